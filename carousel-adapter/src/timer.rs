/// A one-shot deadline.
///
/// Owning the handle is owning the timer: dropping it (or replacing the `Option` that holds it)
/// cancels it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeout {
    pub deadline_ms: u64,
}

impl Timeout {
    pub fn new(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            deadline_ms: now_ms.saturating_add(delay_ms),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }
}

/// A repeating deadline.
///
/// `poll` fires at most once per call. When the caller falls behind by more than a period (e.g.
/// a throttled background tab), the schedule is re-anchored to `now_ms` instead of bursting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    period_ms: u64,
    next_ms: u64,
}

impl Interval {
    pub fn new(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_ms: now_ms.saturating_add(period_ms),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn next_ms(&self) -> u64 {
        self.next_ms
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms = self.next_ms.saturating_add(self.period_ms);
        if self.next_ms <= now_ms {
            self.next_ms = now_ms.saturating_add(self.period_ms);
        }
        true
    }
}
