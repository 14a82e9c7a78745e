//! Roll session - the per-sequence commitment and its tick timer.

use std::future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// State of one roll, created when `Rolling` starts and consumed by the reveal.
///
/// `committed_pick` is written once at the start and may be overwritten once
/// more by [`RollSession::recommit`]. Whatever was written last is revealed.
#[derive(Debug)]
pub struct RollSession {
    ticks_elapsed: u32,
    committed_pick: u8,
    recommitted: bool,
    timer: Option<Interval>,
}

impl RollSession {
    /// Commit `initial_pick` and start the periodic tick timer.
    ///
    /// The first tick fires one full `interval` after the start. A zero
    /// interval is clamped to one millisecond.
    pub fn begin(initial_pick: u8, interval: Duration) -> Self {
        let period = interval.max(Duration::from_millis(1));
        let mut timer = time::interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            ticks_elapsed: 0,
            committed_pick: initial_pick,
            recommitted: false,
            timer: Some(timer),
        }
    }

    pub fn ticks_elapsed(&self) -> u32 {
        self.ticks_elapsed
    }

    pub fn committed_pick(&self) -> u8 {
        self.committed_pick
    }

    pub fn recommitted(&self) -> bool {
        self.recommitted
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Wait for the next tick. Never resolves once the timer is released.
    pub async fn next_tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }

    /// Count a tick; returns the new tick count.
    pub fn advance(&mut self) -> u32 {
        self.ticks_elapsed += 1;
        self.ticks_elapsed
    }

    /// Overwrite the committed pick. Only the first re-commit is accepted.
    pub fn recommit(&mut self, pick: u8) -> bool {
        if self.recommitted {
            return false;
        }
        self.committed_pick = pick;
        self.recommitted = true;
        true
    }

    /// Stop and drop the tick timer. Returns whether a timer was running.
    pub fn release_timer(&mut self) -> bool {
        self.timer.take().is_some()
    }

    /// End the session, returning the value to reveal.
    pub fn finish(mut self) -> u8 {
        self.release_timer();
        self.committed_pick
    }
}
