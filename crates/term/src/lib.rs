//! Terminal "widget renderer" module.
//!
//! This is a small rendering layer for the draw widget. It avoids ratatui
//! widgets/layout and instead renders into a simple framebuffer that is
//! flushed to a terminal backend with run-length diffs.
//!
//! - [`scene`]: view-model written by the sequence controller
//! - [`draw_view`]: pure `Scene -> FrameBuffer` rendering
//! - [`renderer`]: crossterm output
//! - [`render_throttle`]: frame pacing

pub mod draw_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod scene;

pub use lucky_draw_core as core;
pub use lucky_draw_types as types;

pub use draw_view::{DrawView, StageRect, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{LiveSparkle, Pulse, Scene, SceneEffects, SceneHandle};
