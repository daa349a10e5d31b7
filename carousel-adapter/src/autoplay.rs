use carousel::CarouselState;

use crate::Interval;

/// Repeating autoplay timer.
///
/// While the carousel is paused (stopped carousels are paused too) no timer exists at all, so
/// resuming starts a full interval from the moment of resumption instead of firing early.
#[derive(Clone, Debug)]
pub struct AutoplayScheduler {
    enabled: bool,
    interval_ms: u64,
    timer: Option<Interval>,
    was_paused: bool,
}

impl AutoplayScheduler {
    pub fn new(enabled: bool, interval_ms: u64, state: CarouselState, now_ms: u64) -> Self {
        let mut scheduler = Self {
            enabled,
            interval_ms,
            timer: None,
            was_paused: state.paused,
        };
        scheduler.sync(state, now_ms);
        scheduler
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether a timer is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<&Interval> {
        self.timer.as_ref()
    }

    pub fn set_enabled(&mut self, enabled: bool, state: CarouselState, now_ms: u64) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.timer = None;
        self.sync(state, now_ms);
    }

    /// Changes the interval; a running timer is recreated with the new period.
    pub fn set_interval_ms(&mut self, interval_ms: u64, state: CarouselState, now_ms: u64) {
        if self.interval_ms == interval_ms {
            return;
        }
        self.interval_ms = interval_ms;
        self.timer = None;
        self.sync(state, now_ms);
    }

    /// Reconciles the timer with the playback flags. Call after every state change.
    pub fn sync(&mut self, state: CarouselState, now_ms: u64) {
        let resumed = self.was_paused && !state.paused;
        self.was_paused = state.paused;

        if !self.enabled || state.paused {
            if self.timer.take().is_some() {
                adebug!(now_ms, "autoplay suspended");
            }
            return;
        }
        if resumed || self.timer.is_none() {
            adebug!(now_ms, interval_ms = self.interval_ms, "autoplay armed");
            self.timer = Some(Interval::new(now_ms, self.interval_ms));
        }
    }

    /// Returns `true` when the carousel should advance by one slide.
    pub fn poll(&mut self, state: CarouselState, now_ms: u64) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        timer.poll(now_ms) && !state.stopped
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }
}
