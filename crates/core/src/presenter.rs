//! Presentation port.
//!
//! Everything the sequence controller shows goes through [`Presenter`]. Calls
//! are write-only; the controller never reads presentation state back.

use crate::types::{DisplayValue, SequenceState};
use std::time::Duration;

pub trait Presenter {
    /// The state machine entered `phase`.
    fn show_phase(&mut self, _phase: SequenceState) {}

    /// Number display.
    fn set_display(&mut self, value: DisplayValue);

    /// Status / speech line.
    fn set_status(&mut self, text: &str);

    /// Highlight the gift for `pick`, or clear the highlight.
    fn set_highlight(&mut self, pick: Option<u8>);

    /// Warm "magic" presentation mode.
    fn set_magic(&mut self, on: bool);

    /// Trigger control state and label.
    fn set_trigger(&mut self, enabled: bool, label: &str);

    /// Emphasis pulse on the number display.
    fn pulse(&mut self, duration: Duration);

    /// Mute indicator.
    fn set_muted(&mut self, muted: bool);
}
