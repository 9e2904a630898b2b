//! Clamped carousel index state

use serde::{Deserialize, Serialize};

use crate::input::NavStep;

/// Transitions accepted by the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "camelCase")]
pub enum CarouselAction {
    Next,
    Prev,
    /// Jump to an index; out-of-range values are clamped
    GoTo(i64),
    TogglePlay,
    StopPlay,
}

impl From<NavStep> for CarouselAction {
    fn from(step: NavStep) -> Self {
        match step {
            NavStep::Next => CarouselAction::Next,
            NavStep::Prev => CarouselAction::Prev,
        }
    }
}

/// Snapshot of the carousel
///
/// `active_index` always lies in `0..total_screens` and never wraps. With an
/// empty content list the index stays at 0 and every move is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub active_index: usize,
    pub total_screens: usize,
    pub is_playing: bool,
}

impl CarouselState {
    /// Initial state for a content list of `total_screens` items
    pub const fn new(total_screens: usize) -> Self {
        Self {
            active_index: 0,
            total_screens,
            is_playing: false,
        }
    }

    /// Highest valid index, `None` for an empty list
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.total_screens.checked_sub(1)
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.active_index == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.last_index() == Some(self.active_index)
    }

    /// Apply one transition
    pub fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Next => {
                let Some(last) = self.last_index() else {
                    // Nothing to advance through; playback has nowhere to go
                    return Self { is_playing: false, ..self };
                };
                let active_index = (self.active_index + 1).min(last);
                let reached_end = self.is_playing && active_index == last;
                Self {
                    active_index,
                    is_playing: self.is_playing && !reached_end,
                    ..self
                }
            }
            CarouselAction::Prev => Self {
                active_index: self.active_index.saturating_sub(1),
                ..self
            },
            CarouselAction::GoTo(index) => {
                let Some(last) = self.last_index() else {
                    return self;
                };
                let active_index = index.clamp(0, last as i64) as usize;
                Self { active_index, ..self }
            }
            CarouselAction::TogglePlay => Self {
                is_playing: !self.is_playing,
                ..self
            },
            CarouselAction::StopPlay => Self {
                is_playing: false,
                ..self
            },
        }
    }
}
