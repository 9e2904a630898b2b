//! Carousel with auto-play timer

use super::{CarouselAction, CarouselState, AUTO_PLAY_INTERVAL_MS};
use crate::config::PlaybackConfig;
use crate::timer::Interval;

/// The single carousel instance shared by every navigation surface
///
/// Owns the auto-play interval: it is armed when `is_playing` turns true and
/// dropped as soon as it turns false, so no timer outlives playback.
#[derive(Clone, Debug)]
pub struct Carousel {
    state: CarouselState,
    interval_ms: f64,
    timer: Option<Interval>,
}

impl Carousel {
    /// Create a carousel over `total_screens` items with the default interval
    pub fn new(total_screens: usize) -> Self {
        Self::with_config(total_screens, &PlaybackConfig::default())
    }

    pub fn with_config(total_screens: usize, config: &PlaybackConfig) -> Self {
        Self {
            state: CarouselState::new(total_screens),
            interval_ms: config.interval_ms,
            timer: None,
        }
    }

    /// Current snapshot
    #[inline]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Check if the auto-play timer is armed
    #[inline]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Timestamp of the next automatic advance
    pub fn next_advance_ms(&self) -> Option<f64> {
        self.timer.map(|timer| timer.next_deadline_ms())
    }

    /// Apply a transition at time `now_ms`
    pub fn dispatch(&mut self, action: CarouselAction, now_ms: f64) -> CarouselState {
        let was_playing = self.state.is_playing;
        self.state = self.state.apply(action);
        self.sync_timer(was_playing, now_ms);
        self.state
    }

    #[inline]
    pub fn next(&mut self, now_ms: f64) -> CarouselState {
        self.dispatch(CarouselAction::Next, now_ms)
    }

    #[inline]
    pub fn prev(&mut self, now_ms: f64) -> CarouselState {
        self.dispatch(CarouselAction::Prev, now_ms)
    }

    #[inline]
    pub fn go_to(&mut self, index: i64, now_ms: f64) -> CarouselState {
        self.dispatch(CarouselAction::GoTo(index), now_ms)
    }

    #[inline]
    pub fn toggle_play(&mut self, now_ms: f64) -> CarouselState {
        self.dispatch(CarouselAction::TogglePlay, now_ms)
    }

    #[inline]
    pub fn stop_play(&mut self, now_ms: f64) -> CarouselState {
        self.dispatch(CarouselAction::StopPlay, now_ms)
    }

    /// Fire due auto-play advances; returns how many `next` transitions ran
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.take_due(now_ms),
            None => return 0,
        };

        let mut fired = 0;
        for _ in 0..due {
            if self.timer.is_none() {
                break;
            }
            self.next(now_ms);
            fired += 1;
        }
        fired
    }

    /// Tear down the auto-play timer and stop playback
    pub fn shutdown(&mut self) {
        self.timer = None;
        self.state.is_playing = false;
    }

    fn sync_timer(&mut self, was_playing: bool, now_ms: f64) {
        match (was_playing, self.state.is_playing) {
            (false, true) => {
                self.timer = Some(Interval::start(now_ms, self.interval_ms));
            }
            (true, false) => {
                self.timer = None;
                if self.state.is_last() {
                    tracing::debug!(index = self.state.active_index, "auto-play reached the last screen");
                }
            }
            _ => {}
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            state: CarouselState::new(0),
            interval_ms: AUTO_PLAY_INTERVAL_MS,
            timer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_arms_and_disarms_timer() {
        let mut carousel = Carousel::new(5);
        assert!(!carousel.is_timer_armed());

        carousel.toggle_play(0.0);
        assert!(carousel.is_timer_armed());
        assert_eq!(carousel.next_advance_ms(), Some(2000.0));

        carousel.toggle_play(500.0);
        assert!(!carousel.is_timer_armed());
        assert_eq!(carousel.tick(10_000.0), 0);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let mut carousel = Carousel::new(5);
        carousel.toggle_play(0.0);

        assert_eq!(carousel.tick(1999.0), 0);
        assert_eq!(carousel.tick(2000.0), 1);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.tick(4000.0), 1);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_autoplay_stops_at_last_screen() {
        let mut carousel = Carousel::new(5);
        carousel.go_to(3, 0.0);
        carousel.toggle_play(0.0);

        assert_eq!(carousel.tick(2000.0), 1);
        assert_eq!(carousel.active_index(), 4);
        assert!(!carousel.is_playing());
        assert!(!carousel.is_timer_armed());
    }

    #[test]
    fn test_stalled_tick_stops_at_end() {
        let mut carousel = Carousel::new(3);
        carousel.toggle_play(0.0);

        // Five periods elapsed but only two advances fit before the end
        assert_eq!(carousel.tick(10_000.0), 2);
        assert_eq!(carousel.active_index(), 2);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn test_manual_next_keeps_timer_phase() {
        let mut carousel = Carousel::new(5);
        carousel.toggle_play(0.0);
        carousel.next(1500.0);
        assert_eq!(carousel.next_advance_ms(), Some(2000.0));
        assert_eq!(carousel.tick(2000.0), 1);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_restart_after_stop_rearms() {
        let mut carousel = Carousel::new(5);
        carousel.toggle_play(0.0);
        carousel.stop_play(100.0);
        carousel.toggle_play(3000.0);
        assert_eq!(carousel.next_advance_ms(), Some(5000.0));
    }

    #[test]
    fn test_shutdown_drops_timer() {
        let mut carousel = Carousel::new(5);
        carousel.toggle_play(0.0);
        carousel.shutdown();
        assert!(!carousel.is_timer_armed());
        assert!(!carousel.is_playing());
        assert_eq!(carousel.tick(8000.0), 0);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_custom_interval() {
        let mut carousel = Carousel::with_config(5, &PlaybackConfig { interval_ms: 500.0 });
        carousel.toggle_play(0.0);
        assert_eq!(carousel.tick(1000.0), 2);
        assert_eq!(carousel.active_index(), 2);
    }
}
