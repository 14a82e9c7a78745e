//! Audio Gate - mute preference and autoplay policy in front of a backend
//!
//! Sound is cosmetic. Every playback failure is logged and dropped at this
//! boundary; nothing here returns an error to the sequence controller.
//!
//! The gate also enforces the autoplay rule platforms apply to media: nothing
//! may start before the user has interacted at least once.

use thiserror::Error;

use crate::types::{AMBIENT_VOLUME, CUE_VOLUME};

/// Why a backend could not play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio output is not available")]
    Unavailable,
    #[error("playback requires a prior user gesture")]
    GestureRequired,
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("audio thread disconnected")]
    Disconnected,
}

/// Platform media outputs.
///
/// Implementations should make `stop_ambient` safe to call at any time.
pub trait AudioBackend {
    /// Begin (or resume) the looped ambient track at `volume`.
    fn start_ambient(&mut self, volume: f32) -> Result<(), AudioError>;

    /// Pause the ambient track and rewind it to the start.
    fn stop_ambient(&mut self);

    /// Rewind and play the one-shot cue at `volume`.
    fn play_cue(&mut self, volume: f32) -> Result<(), AudioError>;
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn start_ambient(&mut self, volume: f32) -> Result<(), AudioError> {
        (**self).start_ambient(volume)
    }

    fn stop_ambient(&mut self) {
        (**self).stop_ambient()
    }

    fn play_cue(&mut self, volume: f32) -> Result<(), AudioError> {
        (**self).play_cue(volume)
    }
}

/// Process-wide audio preference; survives across sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioPreference {
    pub muted: bool,
    /// Set permanently once the user has interacted.
    pub gesture_seen: bool,
}

impl Default for AudioPreference {
    fn default() -> Self {
        Self {
            muted: true,
            gesture_seen: false,
        }
    }
}

/// Gated access to an [`AudioBackend`].
#[derive(Debug)]
pub struct AudioGate<B> {
    backend: B,
    pref: AudioPreference,
    ambient_active: bool,
}

impl<B: AudioBackend> AudioGate<B> {
    /// New gate, muted and waiting for a first gesture.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pref: AudioPreference::default(),
            ambient_active: false,
        }
    }

    pub fn preference(&self) -> AudioPreference {
        self.pref
    }

    pub fn is_muted(&self) -> bool {
        self.pref.muted
    }

    pub fn ambient_active(&self) -> bool {
        self.ambient_active
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Record that the user has interacted. Never reset.
    pub fn note_user_gesture(&mut self) {
        self.pref.gesture_seen = true;
    }

    /// Flip mute. Unmuting tries to start the ambient loop, muting stops it.
    ///
    /// Returns the new muted flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.note_user_gesture();
        self.pref.muted = !self.pref.muted;

        if self.pref.muted {
            self.stop_ambient();
        } else {
            self.request_ambient_start();
        }
        self.pref.muted
    }

    /// Start the ambient loop unless muted. Failures are swallowed and not retried.
    pub fn request_ambient_start(&mut self) {
        if self.pref.muted {
            return;
        }
        if !self.pref.gesture_seen {
            discard("ambient", &AudioError::GestureRequired);
            return;
        }
        if self.ambient_active {
            return;
        }

        match self.backend.start_ambient(AMBIENT_VOLUME) {
            Ok(()) => self.ambient_active = true,
            Err(err) => discard("ambient", &err),
        }
    }

    /// Pause and rewind the ambient loop. Idempotent.
    pub fn stop_ambient(&mut self) {
        self.backend.stop_ambient();
        self.ambient_active = false;
    }

    /// Play the reveal cue unless muted, ignoring failures.
    pub fn play_cue(&mut self) {
        if self.pref.muted {
            return;
        }
        if !self.pref.gesture_seen {
            discard("cue", &AudioError::GestureRequired);
            return;
        }

        if let Err(err) = self.backend.play_cue(CUE_VOLUME) {
            discard("cue", &err);
        }
    }
}

fn discard(what: &str, err: &AudioError) {
    log::debug!("{what} playback failed, continuing without sound: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        starts: Vec<f32>,
        stops: u32,
        cues: Vec<f32>,
        fail: Option<AudioError>,
    }

    impl AudioBackend for Recorder {
        fn start_ambient(&mut self, volume: f32) -> Result<(), AudioError> {
            self.starts.push(volume);
            match &self.fail {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn stop_ambient(&mut self) {
            self.stops += 1;
        }

        fn play_cue(&mut self, volume: f32) -> Result<(), AudioError> {
            self.cues.push(volume);
            match &self.fail {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn test_starts_muted_without_gesture() {
        let gate = AudioGate::new(Recorder::default());
        assert_eq!(
            gate.preference(),
            AudioPreference {
                muted: true,
                gesture_seen: false
            }
        );
    }

    #[test]
    fn test_muted_gate_never_touches_backend() {
        let mut gate = AudioGate::new(Recorder::default());
        gate.note_user_gesture();
        gate.request_ambient_start();
        gate.play_cue();

        assert!(gate.backend().starts.is_empty());
        assert!(gate.backend().cues.is_empty());
        assert_eq!(gate.backend().stops, 0);
    }

    #[test]
    fn test_toggle_unmute_starts_ambient_at_fixed_volume() {
        let mut gate = AudioGate::new(Recorder::default());
        assert!(!gate.toggle_mute());

        assert_eq!(gate.backend().starts, vec![AMBIENT_VOLUME]);
        assert!(gate.ambient_active());
        assert!(gate.preference().gesture_seen);
    }

    #[test]
    fn test_toggle_mute_stops_and_rewinds() {
        let mut gate = AudioGate::new(Recorder::default());
        gate.toggle_mute();
        assert!(gate.toggle_mute());

        assert_eq!(gate.backend().stops, 1);
        assert!(!gate.ambient_active());
    }

    #[test]
    fn test_ambient_start_is_idempotent() {
        let mut gate = AudioGate::new(Recorder::default());
        gate.toggle_mute();
        gate.request_ambient_start();
        gate.request_ambient_start();

        assert_eq!(gate.backend().starts.len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut gate = AudioGate::new(Recorder::default());
        gate.stop_ambient();
        gate.stop_ambient();
        assert!(!gate.ambient_active());
    }

    #[test]
    fn test_rejected_start_is_swallowed_and_not_retried() {
        let mut gate = AudioGate::new(Recorder {
            fail: Some(AudioError::Rejected("blocked".to_string())),
            ..Recorder::default()
        });
        gate.toggle_mute();

        assert_eq!(gate.backend().starts.len(), 1);
        assert!(!gate.ambient_active());
        assert!(!gate.is_muted());
    }

    #[test]
    fn test_cue_failure_is_ignored() {
        let mut gate = AudioGate::new(Recorder {
            fail: Some(AudioError::Unavailable),
            ..Recorder::default()
        });
        gate.toggle_mute();
        gate.play_cue();

        assert_eq!(gate.backend().cues, vec![CUE_VOLUME]);
    }

    #[test]
    fn test_gesture_required_before_playback() {
        let mut gate = AudioGate::new(Recorder::default());
        // Force unmute without a gesture to exercise the autoplay rule.
        gate.pref.muted = false;
        gate.request_ambient_start();
        gate.play_cue();

        assert!(gate.backend().starts.is_empty());
        assert!(gate.backend().cues.is_empty());

        gate.note_user_gesture();
        gate.request_ambient_start();
        assert_eq!(gate.backend().starts.len(), 1);
    }
}
