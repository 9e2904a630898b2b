//! Input handling module
//!
//! Turns raw wheel and key events into discrete navigation steps, and tracks
//! pointer drags on floating panels.

mod gesture;
mod key;
mod drag;
mod result;

pub use gesture::{GestureDebouncer, WheelOutcome};
pub use key::NavKey;
pub use drag::{calculate_resize, DragState};
pub use result::InputResult;

use serde::{Deserialize, Serialize};

/// Accumulated wheel delta that triggers one navigation step
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Window after a wheel-triggered step during which wheel input is discarded
pub const COOLDOWN_MS: f64 = 400.0;

/// A discrete carousel navigation step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavStep {
    Next,
    Prev,
}
