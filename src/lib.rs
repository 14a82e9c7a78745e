//! Lucky draw (workspace facade crate).
//!
//! Re-exports the `lucky_draw::{core,engine,input,term,types,audio}` API whose
//! implementation lives in dedicated crates under `crates/`, plus the
//! start-up [`config`] shared by the binaries.

pub mod config;

pub use lucky_draw_audio as audio;
pub use lucky_draw_core as core;
pub use lucky_draw_engine as engine;
pub use lucky_draw_input as input;
pub use lucky_draw_term as term;
pub use lucky_draw_types as types;
