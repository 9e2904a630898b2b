//! Frame snapshot for the presentation layer

use serde::Serialize;

use crate::carousel::{card_transforms, dot_indicators, CardTransform, CarouselState, DotIndicator};
use crate::dock::ZoneId;
use crate::math::{Rect, Size};
use crate::panel::{FloatingPanel, PanelKind};
use crate::theme::ThemeStyle;
use super::ViewerEngine;

/// One dock zone overlay
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZoneFrame {
    pub id: ZoneId,
    pub label: &'static str,
    /// Area the panel would occupy when docked here
    pub rect: Rect,
    pub active: bool,
}

/// One floating panel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFrame {
    pub kind: PanelKind,
    pub rect: Rect,
    pub active_zone: ZoneId,
    pub dimmed: bool,
    pub opacity: f32,
    pub dragging: bool,
    pub resizing: bool,
    /// Zone overlays; only populated while the panel is being dragged
    pub zones: Vec<ZoneFrame>,
}

impl PanelFrame {
    fn of(panel: &FloatingPanel) -> Self {
        let tracker = panel.tracker();
        let dragging = panel.is_dragging();
        let zones = if dragging {
            tracker
                .zones()
                .iter()
                .map(|zone| ZoneFrame {
                    id: zone.id,
                    label: zone.id.label(),
                    rect: zone.rect(tracker.panel_size()),
                    active: zone.id == tracker.active_zone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            kind: panel.kind(),
            rect: panel.rect(),
            active_zone: panel.active_zone(),
            dimmed: panel.is_dimmed(),
            opacity: panel.opacity(),
            dragging,
            resizing: panel.is_resizing(),
            zones,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerFrame {
    pub viewport: Size,
    pub carousel: CarouselState,
    pub is_first: bool,
    pub is_last: bool,
    pub cards: Vec<CardTransform>,
    pub dots: Vec<DotIndicator>,
    pub panels: Vec<PanelFrame>,
    pub theme: ThemeStyle,
}

impl ViewerEngine {
    /// Snapshot the current state
    pub fn frame(&self) -> ViewerFrame {
        let state = self.carousel.state();
        ViewerFrame {
            viewport: self.viewport.size,
            carousel: state,
            is_first: state.is_first(),
            is_last: state.is_last(),
            cards: card_transforms(&state, &self.screens),
            dots: dot_indicators(&state),
            panels: vec![
                PanelFrame::of(&self.agent_panel),
                PanelFrame::of(&self.control_bar),
            ],
            theme: self.theme.style(),
        }
    }

    /// Snapshot of one panel
    pub fn panel_frame(&self, kind: PanelKind) -> PanelFrame {
        PanelFrame::of(self.panel(kind))
    }
}
