//! A draggable, dockable panel

use super::{PanelKind, DIMMED_OPACITY};
use crate::config::PanelConfig;
use crate::dock::{DockTracker, SnapResolution, ZoneId};
use crate::input::{calculate_resize, DragState};
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

/// Floating panel state
///
/// Position is the panel's top-left corner in viewport pixels. It changes
/// while a move drag is in flight and settles on the resolved snap target when
/// the drag ends. Viewport and size changes recompute zones but never move
/// the panel.
#[derive(Clone, Debug)]
pub struct FloatingPanel {
    kind: PanelKind,
    tracker: DockTracker,
    position: Vec2,
    min_size: Size,
    max_size: Size,
    dimmed: bool,
    drag: Option<DragState>,
}

impl FloatingPanel {
    /// Mount a panel at its initial zone
    pub fn new(kind: PanelKind, config: &PanelConfig, viewport: Viewport) -> Self {
        let tracker = DockTracker::new(config, viewport);
        let position = tracker.initial_position();
        Self {
            kind,
            tracker,
            position,
            min_size: config.min_size,
            max_size: config.max_size,
            dimmed: false,
            drag: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[inline]
    pub fn tracker(&self) -> &DockTracker {
        &self.tracker
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.tracker.panel_size()
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size())
    }

    #[inline]
    pub fn active_zone(&self) -> ZoneId {
        self.tracker.active_zone()
    }

    #[inline]
    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn opacity(&self) -> f32 {
        if self.dimmed {
            DIMMED_OPACITY
        } else {
            1.0
        }
    }

    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.min_size != self.max_size
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| drag.is_move())
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.drag.is_some_and(|drag| drag.is_resize())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.tracker.set_viewport(viewport);
    }

    // --- move ---

    /// Start moving the panel; refused while dimmed or resizing
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.dimmed || self.is_resizing() {
            return false;
        }
        self.drag = Some(DragState::Move {
            start_pointer: pointer,
            start_position: self.position,
        });
        true
    }

    /// Follow the pointer during a move; returns the live position
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        match self.drag {
            Some(DragState::Move { start_pointer, start_position }) => {
                self.position = start_position + (pointer - start_pointer);
                Some(self.position)
            }
            _ => None,
        }
    }

    /// Release a move at `drop_point` and settle on the snap target
    ///
    /// Returns `None` when no move was in flight.
    pub fn end_drag(&mut self, drop_point: Vec2) -> Option<SnapResolution> {
        if !self.is_dragging() {
            return None;
        }
        self.drag = None;
        let resolution = self.tracker.resolve(drop_point);
        self.position = resolution.position();
        Some(resolution)
    }

    /// Abandon a move and return to where it started
    pub fn cancel_drag(&mut self) {
        if let Some(DragState::Move { start_position, .. }) = self.drag {
            self.position = start_position;
            self.drag = None;
        }
    }

    // --- resize ---

    /// Start resizing from the bottom-right handle
    pub fn begin_resize(&mut self, pointer: Vec2) -> bool {
        if self.dimmed || !self.is_resizable() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragState::Resize {
            start_pointer: pointer,
            start_size: self.size(),
        });
        true
    }

    /// Resize to follow the pointer; returns the clamped new size
    pub fn resize_to(&mut self, pointer: Vec2) -> Option<Size> {
        let Some(DragState::Resize { start_pointer, start_size }) = self.drag else {
            return None;
        };
        let size = calculate_resize(start_size, pointer - start_pointer, self.min_size, self.max_size);
        if size != self.size() {
            self.tracker.set_panel_size(size);
        }
        Some(size)
    }

    pub fn end_resize(&mut self) -> bool {
        if self.is_resizing() {
            self.drag = None;
            true
        } else {
            false
        }
    }

    // --- dimming ---

    /// Toggle dimming; returns the new state
    ///
    /// Dimming abandons any drag or resize in progress.
    pub fn toggle_dim(&mut self) -> bool {
        self.set_dimmed(!self.dimmed);
        self.dimmed
    }

    pub fn set_dimmed(&mut self, dimmed: bool) {
        if dimmed {
            self.cancel_drag();
            self.drag = None;
        }
        self.dimmed = dimmed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> FloatingPanel {
        FloatingPanel::new(PanelKind::Agent, &PanelConfig::agent_panel(), Viewport::new(1440.0, 900.0))
    }

    fn bar() -> FloatingPanel {
        FloatingPanel::new(PanelKind::ControlBar, &PanelConfig::control_bar(), Viewport::new(1440.0, 900.0))
    }

    #[test]
    fn test_mounts_at_initial_zone() {
        let panel = agent();
        assert!((panel.position().x - 1120.0).abs() < 0.001);
        assert!((panel.position().y - 260.0).abs() < 0.001);
        assert_eq!(panel.active_zone(), ZoneId::RightMiddle);

        let bar = bar();
        assert!((bar.position().x - 440.0).abs() < 0.001);
        assert!((bar.position().y - 830.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_follows_pointer_then_snaps() {
        let mut panel = agent();
        assert!(panel.begin_drag(Vec2::new(1280.0, 450.0)));
        assert!(panel.is_dragging());

        let live = panel.drag_to(Vec2::new(300.0, 460.0)).unwrap();
        assert!((live.x - 140.0).abs() < 0.001);
        assert!((live.y - 270.0).abs() < 0.001);

        let resolution = panel.end_drag(Vec2::new(170.0, 460.0)).unwrap();
        assert_eq!(resolution.zone(), Some(ZoneId::LeftMiddle));
        assert!((panel.position().x - 0.0).abs() < 0.001);
        assert!((panel.position().y - 260.0).abs() < 0.001);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_end_without_begin_is_ignored() {
        let mut panel = agent();
        let before = panel.position();
        assert!(panel.end_drag(Vec2::new(10.0, 10.0)).is_none());
        assert_eq!(panel.position(), before);
    }

    #[test]
    fn test_cancel_restores_position() {
        let mut panel = agent();
        let start = panel.position();
        panel.begin_drag(Vec2::new(0.0, 0.0));
        panel.drag_to(Vec2::new(-400.0, 50.0));
        panel.cancel_drag();
        assert_eq!(panel.position(), start);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_dimmed_panel_refuses_drag() {
        let mut panel = bar();
        assert!(panel.toggle_dim());
        assert!((panel.opacity() - 0.15).abs() < 0.001);

        let before = panel.position();
        assert!(!panel.begin_drag(Vec2::new(720.0, 850.0)));
        assert!(panel.end_drag(Vec2::new(100.0, 100.0)).is_none());
        assert_eq!(panel.position(), before);

        assert!(!panel.toggle_dim());
        assert!((panel.opacity() - 1.0).abs() < 0.001);
        assert!(panel.begin_drag(Vec2::new(720.0, 850.0)));
    }

    #[test]
    fn test_dimming_mid_drag_abandons_it() {
        let mut panel = agent();
        let start = panel.position();
        panel.begin_drag(Vec2::new(0.0, 0.0));
        panel.drag_to(Vec2::new(-300.0, 0.0));
        panel.set_dimmed(true);
        assert!(!panel.is_dragging());
        assert_eq!(panel.position(), start);
    }

    #[test]
    fn test_resize_clamps_and_recomputes_zones() {
        let mut panel = agent();
        assert!(panel.begin_resize(Vec2::new(1440.0, 640.0)));
        assert!(!panel.begin_drag(Vec2::new(1300.0, 300.0)));

        let size = panel.resize_to(Vec2::new(1540.0, 1040.0)).unwrap();
        assert!((size.width - 420.0).abs() < 0.001);
        assert!((size.height - 600.0).abs() < 0.001);

        // right-middle anchor follows the new size
        let zone = panel.tracker().zone(ZoneId::RightMiddle).unwrap();
        assert!((zone.position.x - 1020.0).abs() < 0.001);
        assert!((zone.position.y - 150.0).abs() < 0.001);

        // resizing does not move the panel
        assert!((panel.position().x - 1120.0).abs() < 0.001);
        assert!(panel.end_resize());
        assert!(!panel.end_resize());
    }

    #[test]
    fn test_fixed_size_panel_refuses_resize() {
        let mut panel = bar();
        assert!(!panel.is_resizable());
        assert!(!panel.begin_resize(Vec2::ZERO));
        assert!(panel.resize_to(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_viewport_change_keeps_position() {
        let mut panel = agent();
        panel.set_viewport(Viewport::new(1920.0, 1080.0));
        assert!((panel.position().x - 1120.0).abs() < 0.001);
        let zone = panel.tracker().zone(ZoneId::RightMiddle).unwrap();
        assert!((zone.position.x - 1600.0).abs() < 0.001);
    }
}
