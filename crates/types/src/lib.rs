//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (sequencing logic, terminal rendering, simulation).
//!
//! # Selection Range
//!
//! Draws are uniform over the inclusive range `RANGE_MIN..=RANGE_MAX` (1..=10),
//! one value per gift on display.
//!
//! # Sequence Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WARMUP_MS` | 800 | Pause between trigger and the roll |
//! | `ROLL_INTERVAL_MS` | 90 | Period of the cosmetic spin ticks |
//! | `ROLL_DURATION_MS` | 2200 | Total roll time, independent of tick count |
//! | `PULSE_MS` | 520 | Reveal emphasis animation (overlaps settle) |
//! | `SETTLE_MS` | 900 | Pause after the reveal before accepting triggers |
//!
//! # Roll Checkpoints
//!
//! Fixed tick numbers with side effects during the roll:
//!
//! - `SHUFFLE_QUIP_TICK` (6): first playful status line
//! - `PATIENCE_QUIP_TICK` (12): second playful status line
//! - `RECOMMIT_TICK` (14): the committed pick is drawn again and overrides
//!   the value chosen when the roll started
//!
//! # Examples
//!
//! ```
//! use lucky_draw_types::{DisplayValue, SequenceState, RANGE_MAX, RANGE_MIN};
//!
//! assert!(SequenceState::Idle.accepts_trigger());
//! assert!(!SequenceState::Rolling.accepts_trigger());
//!
//! assert_eq!(DisplayValue::Final(7).to_string(), "7");
//! assert_eq!(RANGE_MAX - RANGE_MIN + 1, 10);
//! ```

/// Smallest value a draw can produce.
pub const RANGE_MIN: u8 = 1;

/// Largest value a draw can produce (inclusive).
pub const RANGE_MAX: u8 = 10;

/// Number of distinct values in the selection range.
pub const RANGE_LEN: usize = (RANGE_MAX - RANGE_MIN + 1) as usize;

/// Warm-up pause before rolling starts (800ms).
pub const WARMUP_MS: u64 = 800;

/// Interval between cosmetic roll ticks (90ms).
pub const ROLL_INTERVAL_MS: u64 = 90;

/// Total roll duration (2200ms).
pub const ROLL_DURATION_MS: u64 = 2200;

/// Reveal pulse animation length (520ms).
pub const PULSE_MS: u64 = 520;

/// Settle pause after the reveal (900ms).
pub const SETTLE_MS: u64 = 900;

/// Tick at which the first playful status line is shown.
pub const SHUFFLE_QUIP_TICK: u32 = 6;

/// Tick at which the second playful status line is shown.
pub const PATIENCE_QUIP_TICK: u32 = 12;

/// Tick at which the committed pick is drawn again.
pub const RECOMMIT_TICK: u32 = 14;

/// Ambient loop playback volume.
pub const AMBIENT_VOLUME: f32 = 0.35;

/// One-shot reveal cue volume.
pub const CUE_VOLUME: f32 = 0.65;

/// Particles spawned per reveal burst.
pub const BURST_COUNT: usize = 14;

/// Inner radius of the sparkle ring, in stage pixels.
pub const BURST_RADIUS_MIN: f32 = 40.0;

/// Random extra radius added to `BURST_RADIUS_MIN`, in stage pixels.
pub const BURST_RADIUS_SPREAD: f32 = 70.0;

/// Upper bound (exclusive) of the random per-particle start delay.
pub const BURST_STAGGER_MS: u32 = 120;

/// How long a sparkle stays on screen once its delay has elapsed.
pub const SPARKLE_LIFETIME_MS: u32 = 900;

/// Text shown in the number display before a value is known.
pub const PLACEHOLDER: &str = "—";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_timing_defaults() {
        assert_eq!(WARMUP_MS, 800);
        assert_eq!(ROLL_INTERVAL_MS, 90);
        assert_eq!(ROLL_DURATION_MS, 2200);
        assert_eq!(PULSE_MS, 520);
        assert_eq!(SETTLE_MS, 900);

        assert_eq!(SHUFFLE_QUIP_TICK, 6);
        assert_eq!(PATIENCE_QUIP_TICK, 12);
        assert_eq!(RECOMMIT_TICK, 14);
    }

    #[test]
    fn recommit_fires_before_roll_ends() {
        assert!(RECOMMIT_TICK as u64 * ROLL_INTERVAL_MS < ROLL_DURATION_MS);
    }

    #[test]
    fn range_is_ten_gifts() {
        assert_eq!(RANGE_LEN, 10);
    }
}

/// The reveal sequence state machine.
///
/// Transitions always run `Idle -> Warming -> Rolling -> Reveal -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceState {
    #[default]
    Idle,
    Warming,
    Rolling,
    Reveal,
}

impl SequenceState {
    /// Only an idle machine starts a new sequence.
    pub fn accepts_trigger(self) -> bool {
        self == SequenceState::Idle
    }

    /// The state that follows this one in a sequence.
    pub fn next(self) -> Self {
        match self {
            SequenceState::Idle => SequenceState::Warming,
            SequenceState::Warming => SequenceState::Rolling,
            SequenceState::Rolling => SequenceState::Reveal,
            SequenceState::Reveal => SequenceState::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SequenceState::Idle => "idle",
            SequenceState::Warming => "warming",
            SequenceState::Rolling => "rolling",
            SequenceState::Reveal => "reveal",
        }
    }
}

impl std::fmt::Display for SequenceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User inputs the sequence controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawAction {
    /// Start a draw (ignored unless idle).
    Trigger,
    /// Flip the mute preference (always accepted).
    ToggleMute,
}

/// What the number display currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayValue {
    #[default]
    Placeholder,
    /// Cosmetic value flashed during the roll.
    Spin(u8),
    /// The revealed pick.
    Final(u8),
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Placeholder => f.write_str(PLACEHOLDER),
            DisplayValue::Spin(n) | DisplayValue::Final(n) => write!(f, "{n}"),
        }
    }
}

/// A point in stage coordinates, expressed as fractions of the stage size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where reveal bursts are centered: middle of the mascot, a quarter down.
pub const MASCOT_ANCHOR: Anchor = Anchor::new(0.5, 0.25);

/// Fixed copy shown by the widget.
pub mod copy {
    pub const STATUS_GREETING: &str = "Press Enter and I'll pick a gift for you!";
    pub const STATUS_WARMING: &str = "Let me check my list...";
    pub const STATUS_ROLLING: &str = "Shuffling the gift fate... hmm...";
    pub const STATUS_SHUFFLE_QUIP: &str = "Not this one... or this one...";
    pub const STATUS_PATIENCE_QUIP: &str = "Almost there... hot cocoa says be patient";

    pub const LABEL_IDLE: &str = "Ask Santa";
    pub const LABEL_WARMING: &str = "Warming the magic...";
    pub const LABEL_ROLLING: &str = "Shuffling gifts...";

    pub const MUTE_ON: &str = "Muted";
    pub const MUTE_OFF: &str = "Cozy On";

    /// Status line announcing a revealed pick.
    pub fn reveal(pick: u8) -> String {
        format!("Ho ho ho! Open gift #{pick}!")
    }

    pub fn mute_indicator(muted: bool) -> &'static str {
        if muted {
            MUTE_ON
        } else {
            MUTE_OFF
        }
    }
}
