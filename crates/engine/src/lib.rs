//! Sequence engine - the timer-driven reveal state machine
//!
//! The [`SequenceController`] owns the only mutable sequencing state (the
//! current [`SequenceState`](crate::types::SequenceState) and the active
//! [`RollSession`]). It is driven either directly with
//! [`SequenceController::trigger`] or as an actor over a channel of
//! [`DrawAction`](crate::types::DrawAction)s with [`SequenceController::run`].
//!
//! [`DrawRuntime`] hosts that actor on a single-worker tokio runtime and lets
//! a synchronous UI loop feed it input.

pub mod controller;
pub mod runtime;
pub mod session;

pub use lucky_draw_core as core;
pub use lucky_draw_types as types;

pub use controller::{SequenceController, Timings};
pub use runtime::DrawRuntime;
pub use session::RollSession;
