//! RNG module - uniform picks over an inclusive range
//!
//! [`pick`] is the stateless entry point backed by the thread-local generator.
//! The sequence controller instead takes a [`Selector`] so draws can be seeded
//! for reproducible runs or scripted in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly distributed integer in `[min, max]`.
///
/// Callers guarantee `min <= max`.
pub fn pick(min: u8, max: u8) -> u8 {
    rand::random_range(min..=max)
}

/// Source of uniform picks for the sequence controller.
pub trait Selector {
    /// Uniformly distributed integer in `[min, max]`, independent across calls.
    fn pick(&mut self, min: u8, max: u8) -> u8;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn pick(&mut self, min: u8, max: u8) -> u8 {
        (**self).pick(min, max)
    }
}

impl<S: Selector + ?Sized> Selector for Box<S> {
    fn pick(&mut self, min: u8, max: u8) -> u8 {
        (**self).pick(min, max)
    }
}

/// Selector backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdSelector {
    rng: StdRng,
}

impl StdSelector {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible selector for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is present, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }
}

impl Selector for StdSelector {
    fn pick(&mut self, min: u8, max: u8) -> u8 {
        self.rng.random_range(min..=max)
    }
}
