//! Core geometry types for panel docking
//!
//! All coordinates are viewport pixels with the origin at the top-left
//! corner, matching the coordinate space of pointer events.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
