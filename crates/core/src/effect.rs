//! Effect Emitter - sparkle ring layout for the reveal burst
//!
//! A burst is `BURST_COUNT` particles evenly spaced on a ring around an anchor,
//! each with a random radius and start delay. Layout is pure; spawning and
//! removing the particles belongs to whatever implements [`EffectEmitter`].

use std::f32::consts::TAU;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{
    Anchor, BURST_COUNT, BURST_RADIUS_MIN, BURST_RADIUS_SPREAD, BURST_STAGGER_MS,
    SPARKLE_LIFETIME_MS,
};

/// Glyphs cycled through by consecutive particles.
pub const SPARKLE_GLYPHS: [char; 5] = ['✦', '★', '❄', '♥', '✧'];

/// One decorative particle, positioned relative to the burst anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub glyph: char,
    /// Horizontal offset from the anchor in stage pixels.
    pub dx: f32,
    /// Vertical offset from the anchor in stage pixels.
    pub dy: f32,
    pub delay_ms: u32,
}

impl Sparkle {
    pub fn radius(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Whether the particle is on screen `age_ms` after the burst.
    pub fn is_visible(&self, age_ms: u64) -> bool {
        age_ms >= self.delay_ms as u64 && !self.is_expired(age_ms)
    }

    /// Whether the particle's animation has completed.
    pub fn is_expired(&self, age_ms: u64) -> bool {
        age_ms >= self.delay_ms as u64 + SPARKLE_LIFETIME_MS as u64
    }
}

/// Fixed-size burst, laid out without allocating.
pub type Burst = ArrayVec<Sparkle, BURST_COUNT>;

/// Lay out one burst.
pub fn sparkle_burst<R: Rng + ?Sized>(rng: &mut R) -> Burst {
    let mut burst = Burst::new();
    for i in 0..BURST_COUNT {
        let angle = TAU * i as f32 / BURST_COUNT as f32;
        let radius = BURST_RADIUS_MIN + rng.random::<f32>() * BURST_RADIUS_SPREAD;
        burst.push(Sparkle {
            glyph: SPARKLE_GLYPHS[i % SPARKLE_GLYPHS.len()],
            dx: angle.cos() * radius,
            dy: angle.sin() * radius,
            delay_ms: rng.random_range(0..BURST_STAGGER_MS),
        });
    }
    burst
}

/// Fire-and-forget visual burst.
pub trait EffectEmitter {
    fn burst(&mut self, anchor: Anchor);
}

/// Emitter that draws nothing (headless runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl EffectEmitter for NoEffects {
    fn burst(&mut self, _anchor: Anchor) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_has_fixed_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sparkle_burst(&mut rng).len(), BURST_COUNT);
    }

    #[test]
    fn test_burst_radius_and_stagger_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            for s in sparkle_burst(&mut rng) {
                let r = s.radius();
                assert!(r >= BURST_RADIUS_MIN - 0.01, "radius {r}");
                assert!(
                    r < BURST_RADIUS_MIN + BURST_RADIUS_SPREAD + 0.01,
                    "radius {r}"
                );
                assert!(s.delay_ms < BURST_STAGGER_MS);
            }
        }
    }

    #[test]
    fn test_burst_is_spread_around_ring() {
        let mut rng = StdRng::seed_from_u64(3);
        let burst = sparkle_burst(&mut rng);

        // First particle sits on the positive x axis, the one halfway round on the negative.
        assert!(burst[0].dx > 0.0);
        assert!(burst[0].dy.abs() < 0.01);
        assert!(burst[BURST_COUNT / 2].dx < 0.0);
    }

    #[test]
    fn test_glyphs_cycle() {
        let mut rng = StdRng::seed_from_u64(4);
        let burst = sparkle_burst(&mut rng);
        assert_eq!(burst[0].glyph, SPARKLE_GLYPHS[0]);
        assert_eq!(burst[5].glyph, SPARKLE_GLYPHS[0]);
        assert_eq!(burst[6].glyph, SPARKLE_GLYPHS[1]);
    }

    #[test]
    fn test_sparkle_lifetime_window() {
        let s = Sparkle {
            glyph: '✦',
            dx: 40.0,
            dy: 0.0,
            delay_ms: 100,
        };
        assert!(!s.is_visible(50));
        assert!(s.is_visible(100));
        assert!(s.is_visible(999));
        assert!(!s.is_visible(1000));
        assert!(s.is_expired(1000));
    }
}
