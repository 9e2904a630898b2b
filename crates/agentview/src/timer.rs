//! Time-injected timers
//!
//! Timers never read a clock. Callers pass a monotonic millisecond timestamp
//! into every query, which keeps the state machines deterministic under test.
//! A timer is an owned value: dropping it cancels it.

/// Smallest accepted interval period
const MIN_PERIOD_MS: f64 = 1.0;

/// A single delay that expires once
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneShot {
    /// Start time (ms timestamp)
    start_ms: f64,
    /// Delay length
    duration_ms: f64,
}

impl OneShot {
    /// Arm a delay starting at `now_ms`
    pub fn start(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_ms: now_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Timestamp at which the delay expires
    #[inline]
    pub fn deadline_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Check if the delay has elapsed
    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms()
    }

    /// Milliseconds left before expiry (0 once expired)
    #[inline]
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.deadline_ms() - now_ms).max(0.0)
    }
}

/// A repeating timer firing every `period_ms`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    period_ms: f64,
    next_ms: f64,
}

impl Interval {
    /// Start a repeating timer; the first firing is one period after `now_ms`
    pub fn start(now_ms: f64, period_ms: f64) -> Self {
        let period_ms = period_ms.max(MIN_PERIOD_MS);
        Self {
            period_ms,
            next_ms: now_ms + period_ms,
        }
    }

    #[inline]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Timestamp of the next firing
    #[inline]
    pub fn next_deadline_ms(&self) -> f64 {
        self.next_ms
    }

    /// Consume every firing due at `now_ms` and return how many there were
    ///
    /// Missed periods are not coalesced: a caller that stalls for three
    /// periods receives three firings.
    pub fn take_due(&mut self, now_ms: f64) -> u32 {
        if !(now_ms >= self.next_ms) {
            return 0;
        }
        let due = ((now_ms - self.next_ms) / self.period_ms).floor() + 1.0;
        self.next_ms += due * self.period_ms;
        due.min(u32::MAX as f64) as u32
    }
}
