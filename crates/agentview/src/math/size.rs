//! 2D size type for panel and viewport dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half extents, the offset from a top-left anchor to the center
    #[inline]
    pub fn half(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that both dimensions are finite and strictly positive
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && !self.is_empty()
    }

    /// Check that this size fits inside `other` on both axes
    #[inline]
    pub fn fits_within(self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Clamp size to minimum and maximum
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self::new(
            self.width.clamp(min.width, max.width),
            self.height.clamp(min.height, max.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_half() {
        let half = Size::new(320.0, 380.0).half();
        assert!((half.x - 160.0).abs() < 0.001);
        assert!((half.y - 190.0).abs() < 0.001);
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(320.0, 380.0).is_valid());
        assert!(!Size::new(0.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 10.0).is_valid());
        assert!(!Size::new(f32::NAN, 10.0).is_valid());
    }

    #[test]
    fn test_size_fits_within() {
        let min = Size::new(240.0, 200.0);
        let max = Size::new(520.0, 600.0);
        assert!(min.fits_within(max));
        assert!(!max.fits_within(min));
    }

    #[test]
    fn test_size_clamp() {
        let s = Size::new(100.0, 900.0);
        let min = Size::new(240.0, 200.0);
        let max = Size::new(520.0, 600.0);
        let clamped = s.clamp(min, max);
        assert!((clamped.width - 240.0).abs() < 0.001);
        assert!((clamped.height - 600.0).abs() < 0.001);
    }
}
