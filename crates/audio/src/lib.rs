//! Audio backends for the draw widget.
//!
//! - [`SilentBackend`]: always available, reports every request as unavailable
//! - [`ToneBackend`]: procedural fireplace loop and jingle through rodio
//!   (compile with the `sound` feature)
//!
//! [`open_default`] picks the best backend the build and machine support.

pub mod silent;
#[cfg(feature = "sound")]
pub mod tone;

pub use lucky_draw_core as core;
pub use lucky_draw_types as types;

pub use silent::SilentBackend;
#[cfg(feature = "sound")]
pub use tone::ToneBackend;

use crate::core::AudioBackend;

/// Best available backend; falls back to silence when output cannot open.
pub fn open_default(enabled: bool) -> Box<dyn AudioBackend + Send> {
    if !enabled {
        log::info!("audio disabled by configuration");
        return Box::new(SilentBackend);
    }

    #[cfg(feature = "sound")]
    {
        match ToneBackend::open() {
            Ok(backend) => return Box::new(backend),
            Err(err) => log::warn!("audio output unavailable, running silent: {err}"),
        }
    }

    #[cfg(not(feature = "sound"))]
    {
        log::info!("built without the `sound` feature, running silent");
    }

    Box::new(SilentBackend)
}
