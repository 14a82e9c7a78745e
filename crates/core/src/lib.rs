//! Core draw logic module - pure, deterministic, and testable
//!
//! This crate contains everything the reveal sequence needs that is not tied
//! to timers or terminals. It has **no dependencies** on UI or async runtimes,
//! making it:
//!
//! - **Deterministic**: seeded selectors reproduce the same draws
//! - **Testable**: every collaborator of the sequence controller is a trait
//!   with a trivial in-memory implementation
//! - **Portable**: runs in the terminal app, the headless simulator, or tests
//!
//! # Module Structure
//!
//! - [`rng`]: Random Selector, uniform picks over an inclusive range
//! - [`audio`]: Audio Gate, mute preference and autoplay policy in front of an
//!   [`AudioBackend`]
//! - [`effect`]: Effect Emitter, sparkle ring layout for the reveal burst
//! - [`presenter`]: the write-only presentation port driven by the controller
//! - [`pulse`]: reveal emphasis curve
//! - [`tally`]: distribution bookkeeping and the chi-square uniformity check
//!
//! # Example
//!
//! ```
//! use lucky_draw_core::{Selector, StdSelector, Tally};
//! use lucky_draw_core::types::{RANGE_MAX, RANGE_MIN};
//!
//! let mut rng = StdSelector::seeded(12345);
//! let mut tally = Tally::new();
//! for _ in 0..100 {
//!     let pick = rng.pick(RANGE_MIN, RANGE_MAX);
//!     assert!(tally.record(pick));
//! }
//! assert_eq!(tally.total(), 100);
//! ```

pub mod audio;
pub mod effect;
pub mod presenter;
pub mod pulse;
pub mod rng;
pub mod tally;

pub use lucky_draw_types as types;

// Re-export commonly used types for convenience
pub use audio::{AudioBackend, AudioError, AudioGate, AudioPreference};
pub use effect::{sparkle_burst, Burst, EffectEmitter, NoEffects, Sparkle, SPARKLE_GLYPHS};
pub use presenter::Presenter;
pub use pulse::pulse_scale;
pub use rng::{pick, Selector, StdSelector};
pub use tally::{Tally, CHI_SQUARE_CRITICAL_999};
