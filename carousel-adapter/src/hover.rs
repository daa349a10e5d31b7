use carousel::CarouselState;

use crate::Timeout;

/// Delay between a hover transition and the pause/resume it causes.
pub const HOVER_DELAY_MS: u64 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoverAction {
    Pause,
    Play,
}

/// Debounced pause on pointer-enter and resume on pointer-leave.
///
/// Only the latest request survives: entering cancels a pending resume and leaving cancels a
/// pending pause. A stopped carousel ignores hover entirely.
#[derive(Clone, Debug)]
pub struct HoverDebounce {
    delay_ms: u64,
    pending: Option<(Timeout, HoverAction)>,
}

impl Default for HoverDebounce {
    fn default() -> Self {
        Self::new(HOVER_DELAY_MS)
    }
}

impl HoverDebounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<HoverAction> {
        self.pending.map(|(_, action)| action)
    }

    pub fn on_enter(&mut self, state: CarouselState, now_ms: u64) -> bool {
        self.schedule(HoverAction::Pause, state, now_ms)
    }

    pub fn on_leave(&mut self, state: CarouselState, now_ms: u64) -> bool {
        self.schedule(HoverAction::Play, state, now_ms)
    }

    fn schedule(&mut self, action: HoverAction, state: CarouselState, now_ms: u64) -> bool {
        if state.stopped {
            return false;
        }
        atrace!(?action, now_ms, "hover debounce scheduled");
        self.pending = Some((Timeout::new(now_ms, self.delay_ms), action));
        true
    }

    /// Returns the action whose delay has elapsed, if any.
    pub fn poll(&mut self, state: CarouselState, now_ms: u64) -> Option<HoverAction> {
        let (timeout, action) = self.pending?;
        if !timeout.is_due(now_ms) {
            return None;
        }
        self.pending = None;
        if state.stopped {
            return None;
        }
        Some(action)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
