//! Viewport dimensions
//!
//! The viewport is ambient state owned by the environment. The core only reads
//! it; a resize notification replaces it wholesale and every consumer that
//! derives geometry from it recomputes.

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};

/// Visible browser area in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen size in pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1440.0, 900.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The full viewport as a rectangle anchored at the origin
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.size)
    }

    /// Clamp a panel's top-left corner so the whole panel stays on screen,
    /// `margin` pixels away from every edge.
    ///
    /// When the panel is larger than the viewport the lower bound wins and the
    /// panel is pinned at `margin`.
    pub fn clamp_origin(&self, origin: Vec2, panel: Size, margin: f32) -> Vec2 {
        let max_x = self.size.width - panel.width - margin;
        let max_y = self.size.height - panel.height - margin;
        Vec2::new(origin.x.min(max_x).max(margin), origin.y.min(max_y).max(margin))
    }
}
