//! Scene: the view-model written by the sequence controller.
//!
//! [`SceneHandle`] is the terminal implementation of the presentation port.
//! Writes land in a `watch` channel; the render loop reads the latest scene
//! every frame and never blocks the controller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;

use crate::core::{pulse_scale, sparkle_burst, EffectEmitter, Presenter, Sparkle};
use crate::types::{copy, Anchor, DisplayValue, SequenceState};

/// A sparkle that has been spawned on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSparkle {
    pub sparkle: Sparkle,
    pub anchor: Anchor,
    pub born: Instant,
}

impl LiveSparkle {
    fn age_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.born).as_millis() as u64
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.sparkle.is_visible(self.age_ms(now))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.sparkle.is_expired(self.age_ms(now))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub started: Instant,
    pub duration: Duration,
}

/// Everything the draw view needs to paint a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub phase: SequenceState,
    pub display: DisplayValue,
    pub status: String,
    pub highlight: Option<u8>,
    pub magic: bool,
    pub trigger_enabled: bool,
    pub trigger_label: String,
    pub muted: bool,
    pub pulse: Option<Pulse>,
    pub sparkles: Vec<LiveSparkle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            phase: SequenceState::Idle,
            display: DisplayValue::Placeholder,
            status: copy::STATUS_GREETING.to_string(),
            highlight: None,
            magic: false,
            trigger_enabled: true,
            trigger_label: copy::LABEL_IDLE.to_string(),
            muted: true,
            pulse: None,
            sparkles: Vec::new(),
        }
    }
}

impl Scene {
    /// Current display scale of the number box.
    pub fn pulse_scale(&self, now: Instant) -> f32 {
        match self.pulse {
            Some(p) => pulse_scale(
                now.saturating_duration_since(p.started).as_millis() as u64,
                p.duration.as_millis() as u64,
            ),
            None => 1.0,
        }
    }

    /// Drop finished sparkles and pulses; returns whether anything changed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.sparkles.len();
        self.sparkles.retain(|s| !s.is_expired(now));
        let mut changed = self.sparkles.len() != before;

        if let Some(p) = self.pulse {
            if now.saturating_duration_since(p.started) >= p.duration {
                self.pulse = None;
                changed = true;
            }
        }
        changed
    }

    /// Whether the next frame can differ from the last without new input.
    pub fn is_animating(&self) -> bool {
        self.pulse.is_some() || !self.sparkles.is_empty()
    }
}

/// Shared writer for the scene.
#[derive(Clone)]
pub struct SceneHandle {
    tx: Arc<watch::Sender<Scene>>,
}

impl Default for SceneHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Scene::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<Scene> {
        self.tx.subscribe()
    }

    /// Copy of the current scene.
    pub fn snapshot(&self) -> Scene {
        self.tx.borrow().clone()
    }

    pub fn prune(&self, now: Instant) {
        self.tx.send_if_modified(|scene| scene.prune(now));
    }

    /// Effect emitter that spawns sparkles into this scene.
    pub fn effects(&self, rng: StdRng) -> SceneEffects {
        SceneEffects {
            scene: self.clone(),
            rng,
        }
    }

    fn update(&self, f: impl FnOnce(&mut Scene)) {
        self.tx.send_modify(f);
    }
}

impl Presenter for SceneHandle {
    fn show_phase(&mut self, phase: SequenceState) {
        self.update(|s| s.phase = phase);
    }

    fn set_display(&mut self, value: DisplayValue) {
        self.update(|s| s.display = value);
    }

    fn set_status(&mut self, text: &str) {
        self.update(|s| {
            s.status.clear();
            s.status.push_str(text);
        });
    }

    fn set_highlight(&mut self, pick: Option<u8>) {
        self.update(|s| s.highlight = pick);
    }

    fn set_magic(&mut self, on: bool) {
        self.update(|s| s.magic = on);
    }

    fn set_trigger(&mut self, enabled: bool, label: &str) {
        self.update(|s| {
            s.trigger_enabled = enabled;
            s.trigger_label.clear();
            s.trigger_label.push_str(label);
        });
    }

    fn pulse(&mut self, duration: Duration) {
        let started = Instant::now();
        self.update(|s| s.pulse = Some(Pulse { started, duration }));
    }

    fn set_muted(&mut self, muted: bool) {
        self.update(|s| s.muted = muted);
    }
}

/// Sparkle spawner backed by a [`SceneHandle`].
pub struct SceneEffects {
    scene: SceneHandle,
    rng: StdRng,
}

impl SceneEffects {
    pub fn from_entropy(scene: &SceneHandle) -> Self {
        scene.effects(StdRng::from_os_rng())
    }
}

impl EffectEmitter for SceneEffects {
    fn burst(&mut self, anchor: Anchor) {
        let burst = sparkle_burst(&mut self.rng);
        let born = Instant::now();
        self.scene.update(|s| {
            s.sparkles.extend(burst.iter().map(|&sparkle| LiveSparkle {
                sparkle,
                anchor,
                born,
            }))
        });
        log::debug!("sparkle burst of {} at {:?}", burst.len(), anchor);
    }
}
