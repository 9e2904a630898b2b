//! Wheel gesture debouncing for carousel navigation

use super::{NavKey, NavStep};
use crate::config::NavigationConfig;
use crate::timer::OneShot;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    CoolingDown(OneShot),
}

/// Result of feeding one wheel event to the debouncer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelOutcome {
    /// Step emitted by this event, if it crossed the threshold
    pub step: Option<NavStep>,
}

impl WheelOutcome {
    /// The carousel owns the wheel gesture, so the environment's default
    /// scrolling is suppressed for every event, including discarded ones.
    #[inline]
    pub fn suppress_default(&self) -> bool {
        true
    }
}

/// Converts continuous wheel deltas into discrete steps
///
/// While idle, deltas accumulate until their absolute sum reaches the
/// threshold; that event emits one step, clears the accumulator and starts a
/// cooldown. Wheel events arriving during the cooldown are dropped without
/// being accumulated. Key presses bypass all of this.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    threshold: f32,
    cooldown_ms: f64,
    accumulator: f32,
    phase: Phase,
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl GestureDebouncer {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            threshold: config.scroll_threshold,
            cooldown_ms: config.cooldown_ms,
            accumulator: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Check if wheel input is currently being discarded
    #[inline]
    pub fn is_cooling_down(&self) -> bool {
        matches!(self.phase, Phase::CoolingDown(_))
    }

    /// Timestamp at which the current cooldown ends
    pub fn cooldown_deadline_ms(&self) -> Option<f64> {
        match self.phase {
            Phase::CoolingDown(timer) => Some(timer.deadline_ms()),
            Phase::Idle => None,
        }
    }

    /// Advance time; returns `true` if a cooldown ended
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.phase {
            Phase::CoolingDown(timer) if timer.is_expired(now_ms) => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Feed one wheel event with vertical delta `delta`
    pub fn on_wheel(&mut self, delta: f32, now_ms: f64) -> WheelOutcome {
        self.poll(now_ms);

        if self.is_cooling_down() {
            tracing::trace!(delta, "wheel event discarded during cooldown");
            return WheelOutcome { step: None };
        }

        // A non-finite delta would poison the accumulator for the session
        if !delta.is_finite() {
            return WheelOutcome { step: None };
        }

        self.accumulator += delta;
        if self.accumulator.abs() < self.threshold {
            return WheelOutcome { step: None };
        }

        let step = if self.accumulator > 0.0 {
            NavStep::Next
        } else {
            NavStep::Prev
        };
        self.accumulator = 0.0;
        self.phase = Phase::CoolingDown(OneShot::start(now_ms, self.cooldown_ms));
        tracing::debug!(?step, "wheel gesture step");

        WheelOutcome { step: Some(step) }
    }

    /// Keys map straight to steps regardless of the cooldown
    #[inline]
    pub fn on_key(&self, key: NavKey) -> NavStep {
        key.step()
    }

    /// Drop any pending cooldown and partial gesture
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.phase = Phase::Idle;
    }
}
