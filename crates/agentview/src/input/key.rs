//! Keyboard navigation keys

use super::NavStep;

/// The two keys the carousel listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value; every other key is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            _ => None,
        }
    }

    #[inline]
    pub fn step(self) -> NavStep {
        match self {
            NavKey::ArrowLeft => NavStep::Prev,
            NavKey::ArrowRight => NavStep::Next,
        }
    }
}
