//! Input result type

use serde::Serialize;

use super::NavStep;
use crate::dock::ZoneId;

/// Result of input handling, reported back to the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed without a visible effect
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A navigation step was applied to the carousel
    Navigated {
        step: NavStep,
        /// Active index after the step
        #[serde(rename = "activeIndex")]
        active_index: usize,
    },
    /// A panel drop was resolved to a resting position
    Snapped {
        x: f32,
        y: f32,
        /// Capturing zone, `None` for a free position
        zone: Option<ZoneId>,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// The applied navigation step, if any
    #[inline]
    pub fn step(&self) -> Option<NavStep> {
        match self {
            InputResult::Navigated { step, .. } => Some(*step),
            _ => None,
        }
    }
}
