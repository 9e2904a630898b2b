//! Floating panel drag, resize and dim operations

use crate::input::InputResult;
use crate::math::{Size, Vec2};
use crate::panel::PanelKind;
use super::ViewerEngine;

impl ViewerEngine {
    /// Pointer down on a panel's drag area
    pub fn begin_panel_drag(&mut self, kind: PanelKind, x: f32, y: f32) -> InputResult {
        if self.panel_mut(kind).begin_drag(Vec2::new(x, y)) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer move during a panel drag; returns the live position
    pub fn drag_panel(&mut self, kind: PanelKind, x: f32, y: f32) -> Option<Vec2> {
        self.panel_mut(kind).drag_to(Vec2::new(x, y))
    }

    /// Drag release at (`x`, `y`)
    ///
    /// Resolves the drop against the panel's zones and reports where it
    /// settled. Returns `Unhandled` when no drag was in flight.
    pub fn end_panel_drag(&mut self, kind: PanelKind, x: f32, y: f32) -> InputResult {
        match self.panel_mut(kind).end_drag(Vec2::new(x, y)) {
            Some(resolution) => {
                let position = resolution.position();
                InputResult::Snapped {
                    x: position.x,
                    y: position.y,
                    zone: resolution.zone(),
                }
            }
            None => InputResult::Unhandled,
        }
    }

    pub fn cancel_panel_drag(&mut self, kind: PanelKind) {
        self.panel_mut(kind).cancel_drag();
    }

    /// Pointer down on a panel's resize handle
    pub fn begin_panel_resize(&mut self, kind: PanelKind, x: f32, y: f32) -> InputResult {
        if self.panel_mut(kind).begin_resize(Vec2::new(x, y)) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer move during a resize; returns the clamped size
    pub fn resize_panel(&mut self, kind: PanelKind, x: f32, y: f32) -> Option<Size> {
        self.panel_mut(kind).resize_to(Vec2::new(x, y))
    }

    pub fn end_panel_resize(&mut self, kind: PanelKind) -> bool {
        self.panel_mut(kind).end_resize()
    }

    /// Toggle a panel's dimmed state; returns the new state
    pub fn toggle_panel_dim(&mut self, kind: PanelKind) -> bool {
        let dimmed = self.panel_mut(kind).toggle_dim();
        tracing::debug!(panel = %kind, dimmed, "panel dim toggled");
        dimmed
    }
}
