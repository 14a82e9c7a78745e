//! Backend for builds or machines without audio output.

use crate::core::{AudioBackend, AudioError};

/// Rejects every playback request; the audio gate swallows the errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn start_ambient(&mut self, _volume: f32) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    fn stop_ambient(&mut self) {}

    fn play_cue(&mut self, _volume: f32) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AudioGate;

    #[test]
    fn silent_backend_is_harmless_behind_gate() {
        let mut gate = AudioGate::new(SilentBackend);
        assert!(!gate.toggle_mute());
        gate.play_cue();
        assert!(!gate.ambient_active());
        assert!(gate.toggle_mute());
    }

    #[test]
    fn open_default_respects_disable_flag() {
        let mut backend = crate::open_default(false);
        assert_eq!(backend.play_cue(0.5), Err(AudioError::Unavailable));
    }
}
