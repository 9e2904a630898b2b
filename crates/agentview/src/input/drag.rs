//! Pointer drag state for floating panels

use crate::math::{Size, Vec2};

/// Current drag operation on a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// Moving the panel; the release point decides where it docks
    Move {
        /// Pointer position when the drag started
        start_pointer: Vec2,
        /// Panel position when the drag started
        start_position: Vec2,
    },
    /// Resizing the panel from its bottom-right handle
    Resize {
        /// Pointer position when the resize started
        start_pointer: Vec2,
        /// Panel size when the resize started
        start_size: Size,
    },
}

impl DragState {
    /// Check if this is a move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::Move { .. })
    }

    /// Check if this is a resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::Resize { .. })
    }
}

/// Size after dragging the bottom-right resize handle by `delta`
pub fn calculate_resize(start_size: Size, delta: Vec2, min: Size, max: Size) -> Size {
    Size::new(start_size.width + delta.x, start_size.height + delta.y).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(240.0, 200.0);
    const MAX: Size = Size::new(520.0, 600.0);

    #[test]
    fn test_drag_state_kinds() {
        let moving = DragState::Move {
            start_pointer: Vec2::new(10.0, 10.0),
            start_position: Vec2::new(1120.0, 260.0),
        };
        assert!(moving.is_move());
        assert!(!moving.is_resize());

        let resizing = DragState::Resize {
            start_pointer: Vec2::new(10.0, 10.0),
            start_size: Size::new(320.0, 380.0),
        };
        assert!(resizing.is_resize());
        assert!(!resizing.is_move());
    }

    #[test]
    fn test_resize_grows() {
        let size = calculate_resize(Size::new(320.0, 380.0), Vec2::new(40.0, 20.0), MIN, MAX);
        assert!((size.width - 360.0).abs() < 0.001);
        assert!((size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_clamps_to_bounds() {
        let size = calculate_resize(Size::new(320.0, 380.0), Vec2::new(-500.0, 900.0), MIN, MAX);
        assert!((size.width - 240.0).abs() < 0.001);
        assert!((size.height - 600.0).abs() < 0.001);
    }
}
