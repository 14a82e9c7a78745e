//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use lucky_draw::core::{AudioBackend, AudioError, EffectEmitter, Presenter, Selector};
use lucky_draw::types::{Anchor, DisplayValue, SequenceState};

/// Replays a fixed list of picks, then repeats `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    script: VecDeque<u8>,
    fallback: u8,
    pub draws: usize,
}

impl ScriptedSelector {
    pub fn new(script: &[u8], fallback: u8) -> Self {
        Self {
            script: script.iter().copied().collect(),
            fallback,
            draws: 0,
        }
    }
}

impl Selector for ScriptedSelector {
    fn pick(&mut self, _min: u8, _max: u8) -> u8 {
        self.draws += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Everything the controller presented, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Phase(SequenceState),
    Display(DisplayValue),
    Status(String),
    Highlight(Option<u8>),
    Magic(bool),
    Trigger(bool, String),
    Pulse(Duration),
    Muted(bool),
}

/// Presenter that timestamps every call. Clones share the log.
#[derive(Debug, Clone)]
pub struct Recorder {
    origin: Instant,
    log: Arc<Mutex<Vec<(Duration, Shown)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            log: Arc::default(),
        }
    }

    fn push(&self, shown: Shown) {
        self.log
            .lock()
            .unwrap()
            .push((self.origin.elapsed(), shown));
    }

    pub fn entries(&self) -> Vec<(Duration, Shown)> {
        self.log.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.entries().into_iter().map(|(_, s)| s).collect()
    }

    /// Phase transitions with their offsets in milliseconds.
    pub fn phases(&self) -> Vec<(u128, SequenceState)> {
        self.entries()
            .into_iter()
            .filter_map(|(at, s)| match s {
                Shown::Phase(p) => Some((at.as_millis(), p)),
                _ => None,
            })
            .collect()
    }

    pub fn spins(&self) -> Vec<u8> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Display(DisplayValue::Spin(n)) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Status(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn last_trigger(&self) -> Option<(bool, String)> {
        self.shown().into_iter().rev().find_map(|s| match s {
            Shown::Trigger(enabled, label) => Some((enabled, label)),
            _ => None,
        })
    }
}

impl Presenter for Recorder {
    fn show_phase(&mut self, phase: SequenceState) {
        self.push(Shown::Phase(phase));
    }
    fn set_display(&mut self, value: DisplayValue) {
        self.push(Shown::Display(value));
    }
    fn set_status(&mut self, text: &str) {
        self.push(Shown::Status(text.to_string()));
    }
    fn set_highlight(&mut self, pick: Option<u8>) {
        self.push(Shown::Highlight(pick));
    }
    fn set_magic(&mut self, on: bool) {
        self.push(Shown::Magic(on));
    }
    fn set_trigger(&mut self, enabled: bool, label: &str) {
        self.push(Shown::Trigger(enabled, label.to_string()));
    }
    fn pulse(&mut self, duration: Duration) {
        self.push(Shown::Pulse(duration));
    }
    fn set_muted(&mut self, muted: bool) {
        self.push(Shown::Muted(muted));
    }
}

/// Counts bursts and where they were anchored.
#[derive(Debug, Clone, Default)]
pub struct BurstLog(pub Arc<Mutex<Vec<Anchor>>>);

impl EffectEmitter for BurstLog {
    fn burst(&mut self, anchor: Anchor) {
        self.0.lock().unwrap().push(anchor);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Start(f32),
    Stop,
    Cue(f32),
}

/// Audio backend that records calls and optionally fails them.
#[derive(Debug, Clone, Default)]
pub struct AudioLog {
    pub calls: Arc<Mutex<Vec<AudioCall>>>,
    pub fail: bool,
}

impl AudioLog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().unwrap().clone()
    }

    fn result(&self) -> Result<(), AudioError> {
        if self.fail {
            Err(AudioError::Rejected("device busy".to_string()))
        } else {
            Ok(())
        }
    }
}

impl AudioBackend for AudioLog {
    fn start_ambient(&mut self, volume: f32) -> Result<(), AudioError> {
        self.calls.lock().unwrap().push(AudioCall::Start(volume));
        self.result()
    }
    fn stop_ambient(&mut self) {
        self.calls.lock().unwrap().push(AudioCall::Stop);
    }
    fn play_cue(&mut self, volume: f32) -> Result<(), AudioError> {
        self.calls.lock().unwrap().push(AudioCall::Cue(volume));
        self.result()
    }
}

/// Presenter that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Presenter for Quiet {
    fn set_display(&mut self, _value: DisplayValue) {}
    fn set_status(&mut self, _text: &str) {}
    fn set_highlight(&mut self, _pick: Option<u8>) {}
    fn set_magic(&mut self, _on: bool) {}
    fn set_trigger(&mut self, _enabled: bool, _label: &str) {}
    fn pulse(&mut self, _duration: Duration) {}
    fn set_muted(&mut self, _muted: bool) {}
}
