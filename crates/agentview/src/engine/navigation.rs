//! Wheel, keyboard and carousel navigation

use crate::carousel::{CarouselAction, CarouselState};
use crate::input::{InputResult, NavKey, NavStep};
use super::ViewerEngine;

impl ViewerEngine {
    /// Feed one wheel event
    ///
    /// The caller must suppress the environment's default scrolling for every
    /// event regardless of the result.
    pub fn handle_wheel(&mut self, delta_y: f32, now_ms: f64) -> InputResult {
        match self.gestures.on_wheel(delta_y, now_ms).step {
            Some(step) => self.navigate(step, now_ms),
            None => InputResult::Handled,
        }
    }

    /// Feed one key press by its DOM key name
    pub fn handle_key(&mut self, key: &str, now_ms: f64) -> InputResult {
        match NavKey::from_key(key) {
            Some(key) => {
                let step = self.gestures.on_key(key);
                self.navigate(step, now_ms)
            }
            None => InputResult::Unhandled,
        }
    }

    fn navigate(&mut self, step: NavStep, now_ms: f64) -> InputResult {
        let state = self.carousel.dispatch(step.into(), now_ms);
        tracing::debug!(?step, index = state.active_index, "carousel step");
        InputResult::Navigated {
            step,
            active_index: state.active_index,
        }
    }

    /// Apply a carousel transition directly
    pub fn dispatch(&mut self, action: CarouselAction, now_ms: f64) -> CarouselState {
        self.carousel.dispatch(action, now_ms)
    }

    pub fn next(&mut self, now_ms: f64) -> CarouselState {
        self.carousel.next(now_ms)
    }

    pub fn prev(&mut self, now_ms: f64) -> CarouselState {
        self.carousel.prev(now_ms)
    }

    pub fn go_to(&mut self, index: i64, now_ms: f64) -> CarouselState {
        self.carousel.go_to(index, now_ms)
    }

    pub fn toggle_play(&mut self, now_ms: f64) -> CarouselState {
        self.carousel.toggle_play(now_ms)
    }

    pub fn stop_play(&mut self, now_ms: f64) -> CarouselState {
        self.carousel.stop_play(now_ms)
    }
}
