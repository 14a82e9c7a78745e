//! Sequence controller - owns the reveal state machine
//!
//! A sequence always runs `Idle -> Warming -> Rolling -> Reveal -> Idle` in
//! fixed wall-clock time. While it runs, the controller keeps listening to its
//! inbox at every suspension point: triggers are dropped, mute toggles apply
//! immediately and never move the timeline.
//!
//! Side effects go out through the [`Presenter`], the [`EffectEmitter`] and the
//! [`AudioGate`]. None of them can fail into the timer chain.

use std::future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::core::{AudioBackend, AudioGate, EffectEmitter, Presenter, Selector};
use crate::session::RollSession;
use crate::types::{
    copy, DisplayValue, DrawAction, SequenceState, MASCOT_ANCHOR, PATIENCE_QUIP_TICK,
    PULSE_MS, RANGE_MAX, RANGE_MIN, RECOMMIT_TICK, ROLL_DURATION_MS, ROLL_INTERVAL_MS, SETTLE_MS,
    SHUFFLE_QUIP_TICK, WARMUP_MS,
};

/// Stage durations of one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub warmup: Duration,
    pub roll_interval: Duration,
    pub roll_duration: Duration,
    /// Reveal emphasis; runs concurrently with `settle`.
    pub pulse: Duration,
    pub settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            warmup: Duration::from_millis(WARMUP_MS),
            roll_interval: Duration::from_millis(ROLL_INTERVAL_MS),
            roll_duration: Duration::from_millis(ROLL_DURATION_MS),
            pulse: Duration::from_millis(PULSE_MS),
            settle: Duration::from_millis(SETTLE_MS),
        }
    }
}

impl Timings {
    /// Wall-clock length of a sequence from trigger to idle.
    pub fn sequence_length(&self) -> Duration {
        self.warmup + self.roll_duration + self.settle
    }
}

/// Actions received while a sequence is in flight.
struct Inbox<'a> {
    rx: Option<&'a mut mpsc::Receiver<DrawAction>>,
}

impl<'a> Inbox<'a> {
    fn attached(rx: &'a mut mpsc::Receiver<DrawAction>) -> Self {
        Self { rx: Some(rx) }
    }

    fn detached() -> Self {
        Self { rx: None }
    }

    /// Next action; pends forever once the channel is gone.
    async fn next(&mut self) -> DrawAction {
        loop {
            let Some(rx) = self.rx.as_mut() else {
                return future::pending().await;
            };
            if let Some(action) = rx.recv().await {
                return action;
            }
            self.rx = None;
        }
    }
}

/// The reveal state machine and its collaborators.
pub struct SequenceController<P, E, B, S> {
    state: SequenceState,
    presenter: P,
    effects: E,
    audio: AudioGate<B>,
    selector: S,
    timings: Timings,
    /// Completed sequences.
    draws: u64,
    rejected_triggers: u64,
    last_pick: Option<u8>,
}

impl<P, E, B, S> SequenceController<P, E, B, S>
where
    P: Presenter,
    E: EffectEmitter,
    B: AudioBackend,
    S: Selector,
{
    pub fn new(presenter: P, effects: E, backend: B, selector: S) -> Self {
        Self {
            state: SequenceState::Idle,
            presenter,
            effects,
            audio: AudioGate::new(backend),
            selector,
            timings: Timings::default(),
            draws: 0,
            rejected_triggers: 0,
            last_pick: None,
        }
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn audio(&self) -> &AudioGate<B> {
        &self.audio
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn rejected_triggers(&self) -> u64 {
        self.rejected_triggers
    }

    /// Value revealed by the most recent sequence.
    pub fn last_pick(&self) -> Option<u8> {
        self.last_pick
    }

    /// Push the idle presentation (labels, placeholder, mute indicator).
    pub fn present_idle(&mut self) {
        self.presenter.show_phase(self.state);
        self.presenter.set_display(DisplayValue::Placeholder);
        self.presenter.set_status(copy::STATUS_GREETING);
        self.presenter.set_trigger(true, copy::LABEL_IDLE);
        self.presenter.set_muted(self.audio.is_muted());
    }

    /// Flip mute. Accepted in every state; touches audio and the indicator only.
    pub fn toggle_mute(&mut self) {
        let muted = self.audio.toggle_mute();
        self.presenter.set_muted(muted);
        log::debug!("mute toggled: muted={muted} state={}", self.state);
    }

    /// Run one full sequence and return the revealed value.
    ///
    /// Returns `None` without side effects when a sequence is already running.
    /// The future must be driven to completion: dropping it mid-sequence
    /// leaves the controller in its current non-idle state.
    pub async fn trigger(&mut self) -> Option<u8> {
        if !self.state.accepts_trigger() {
            self.reject_trigger();
            return None;
        }
        Some(self.sequence(&mut Inbox::detached()).await)
    }

    /// Serve actions until the sender side closes, then return the controller.
    pub async fn run(mut self, mut inbox: mpsc::Receiver<DrawAction>) -> Self {
        self.present_idle();

        while let Some(action) = inbox.recv().await {
            match action {
                DrawAction::Trigger if self.state.accepts_trigger() => {
                    self.sequence(&mut Inbox::attached(&mut inbox)).await;
                }
                DrawAction::Trigger => self.reject_trigger(),
                DrawAction::ToggleMute => self.toggle_mute(),
            }
        }

        log::debug!("inbox closed after {} draws", self.draws);
        self
    }

    async fn sequence(&mut self, inbox: &mut Inbox<'_>) -> u8 {
        self.enter(SequenceState::Warming);
        self.presenter.set_magic(true);
        self.presenter.set_highlight(None);
        self.audio.note_user_gesture();
        self.audio.request_ambient_start();
        self.presenter.set_status(copy::STATUS_WARMING);
        self.presenter.set_trigger(false, copy::LABEL_WARMING);
        self.presenter.set_display(DisplayValue::Placeholder);
        self.hold(self.timings.warmup, inbox).await;

        self.enter(SequenceState::Rolling);
        self.presenter.set_status(copy::STATUS_ROLLING);
        self.presenter.set_trigger(false, copy::LABEL_ROLLING);
        let pick = self.roll(inbox).await;

        self.enter(SequenceState::Reveal);
        self.presenter.set_display(DisplayValue::Final(pick));
        self.presenter.pulse(self.timings.pulse);
        self.presenter.set_highlight(Some(pick));
        self.presenter.set_status(&copy::reveal(pick));
        self.effects.burst(MASCOT_ANCHOR);
        self.audio.play_cue();
        self.draws += 1;
        self.last_pick = Some(pick);
        log::info!("draw #{} revealed {pick}", self.draws);
        self.hold(self.timings.settle, inbox).await;

        self.presenter.set_magic(false);
        self.enter(SequenceState::Idle);
        self.presenter.set_trigger(true, copy::LABEL_IDLE);
        pick
    }

    /// Spin until the roll duration elapses; returns the committed pick.
    async fn roll(&mut self, inbox: &mut Inbox<'_>) -> u8 {
        let initial = self.selector.pick(RANGE_MIN, RANGE_MAX);
        let mut session = RollSession::begin(initial, self.timings.roll_interval);

        let deadline = time::sleep_until(Instant::now() + self.timings.roll_duration);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                biased;
                _ = &mut deadline => break,
                _ = session.next_tick() => self.on_tick(&mut session),
                action = inbox.next() => self.handle_busy(action),
            }
        }

        session.release_timer();
        log::debug!(
            "roll finished after {} ticks (recommitted={})",
            session.ticks_elapsed(),
            session.recommitted()
        );
        session.finish()
    }

    fn on_tick(&mut self, session: &mut RollSession) {
        let tick = session.advance();

        let spin = self.selector.pick(RANGE_MIN, RANGE_MAX);
        self.presenter.set_display(DisplayValue::Spin(spin));

        match tick {
            SHUFFLE_QUIP_TICK => self.presenter.set_status(copy::STATUS_SHUFFLE_QUIP),
            PATIENCE_QUIP_TICK => self.presenter.set_status(copy::STATUS_PATIENCE_QUIP),
            RECOMMIT_TICK => {
                let pick = self.selector.pick(RANGE_MIN, RANGE_MAX);
                session.recommit(pick);
            }
            _ => {}
        }
    }

    /// Sleep for `duration` while serving the inbox.
    async fn hold(&mut self, duration: Duration, inbox: &mut Inbox<'_>) {
        let sleep = time::sleep(duration);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                biased;
                _ = &mut sleep => return,
                action = inbox.next() => self.handle_busy(action),
            }
        }
    }

    fn handle_busy(&mut self, action: DrawAction) {
        match action {
            DrawAction::Trigger => self.reject_trigger(),
            DrawAction::ToggleMute => self.toggle_mute(),
        }
    }

    fn reject_trigger(&mut self) {
        self.rejected_triggers += 1;
        log::debug!("trigger ignored while {}", self.state);
    }

    fn enter(&mut self, next: SequenceState) {
        debug_assert_eq!(self.state.next(), next, "out-of-order transition");
        log::debug!("sequence {} -> {}", self.state, next);
        self.state = next;
        self.presenter.show_phase(next);
    }
}
