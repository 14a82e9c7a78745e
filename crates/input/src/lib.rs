//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm`. It maps key events into [`crate::types::DrawAction`]s and
//! detects the quit chord.

pub mod map;

pub use lucky_draw_types as types;

pub use map::{handle_key_event, should_quit};
