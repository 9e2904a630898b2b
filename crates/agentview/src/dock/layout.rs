//! Zone geometry for each panel type

use serde::{Deserialize, Serialize};

use super::{DockZone, ZoneId, BAR_PADDING, HEADER_CLEARANCE};
use crate::math::Size;

/// How a panel type arranges its dock zones
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DockLayout {
    /// Eight zones flush against the viewport edges and corners (agent panel)
    Edges,
    /// Four zones inset from the edges (control bar)
    #[serde(rename_all = "camelCase")]
    Bar {
        /// Inset from the viewport edges
        padding: f32,
        /// Additional top offset for the top zone
        header_clearance: f32,
    },
}

impl DockLayout {
    /// Bar layout with the default padding and header clearance
    pub const fn bar() -> Self {
        DockLayout::Bar {
            padding: BAR_PADDING,
            header_clearance: HEADER_CLEARANCE,
        }
    }

    /// Number of zones this layout produces
    pub fn zone_count(&self) -> usize {
        match self {
            DockLayout::Edges => 8,
            DockLayout::Bar { .. } => 4,
        }
    }

    /// Compute the zones for a viewport and panel size
    ///
    /// Pure function of its inputs. The order of the returned list is the
    /// tie-break order used by the resolver.
    pub fn zones(&self, viewport: Size, panel: Size) -> Vec<DockZone> {
        let (vw, vh) = (viewport.width, viewport.height);
        let (pw, ph) = (panel.width, panel.height);
        let center_x = vw / 2.0 - pw / 2.0;

        match *self {
            DockLayout::Edges => {
                let middle_y = vh / 2.0 - ph / 2.0;
                vec![
                    DockZone::new(ZoneId::RightMiddle, vw - pw, middle_y),
                    DockZone::new(ZoneId::RightTop, vw - pw, 0.0),
                    DockZone::new(ZoneId::RightBottom, vw - pw, vh - ph),
                    DockZone::new(ZoneId::LeftMiddle, 0.0, middle_y),
                    DockZone::new(ZoneId::LeftTop, 0.0, 0.0),
                    DockZone::new(ZoneId::LeftBottom, 0.0, vh - ph),
                    DockZone::new(ZoneId::TopCenter, center_x, 0.0),
                    DockZone::new(ZoneId::BottomCenter, center_x, vh - ph),
                ]
            }
            DockLayout::Bar { padding, header_clearance } => {
                let bottom_y = vh - ph - padding;
                vec![
                    DockZone::new(ZoneId::BottomCenter, center_x, bottom_y),
                    DockZone::new(ZoneId::BottomLeft, padding, bottom_y),
                    DockZone::new(ZoneId::BottomRight, vw - pw - padding, bottom_y),
                    DockZone::new(ZoneId::TopCenter, center_x, padding + header_clearance),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Vec2};

    fn position_of(zones: &[DockZone], id: ZoneId) -> Vec2 {
        zones.iter().find(|z| z.id == id).map(|z| z.position).unwrap()
    }

    #[test]
    fn test_edge_zones_order() {
        let zones = DockLayout::Edges.zones(Size::new(1440.0, 900.0), Size::new(320.0, 380.0));
        let ids: Vec<ZoneId> = zones.iter().map(|z| z.id).collect();
        assert_eq!(
            ids,
            vec![
                ZoneId::RightMiddle,
                ZoneId::RightTop,
                ZoneId::RightBottom,
                ZoneId::LeftMiddle,
                ZoneId::LeftTop,
                ZoneId::LeftBottom,
                ZoneId::TopCenter,
                ZoneId::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_edge_zone_positions() {
        let zones = DockLayout::Edges.zones(Size::new(1440.0, 900.0), Size::new(320.0, 380.0));

        assert_eq!(position_of(&zones, ZoneId::RightMiddle), Vec2::new(1120.0, 260.0));
        assert_eq!(position_of(&zones, ZoneId::RightBottom), Vec2::new(1120.0, 520.0));
        assert_eq!(position_of(&zones, ZoneId::LeftTop), Vec2::ZERO);
        assert_eq!(position_of(&zones, ZoneId::TopCenter), Vec2::new(560.0, 0.0));
        assert_eq!(position_of(&zones, ZoneId::BottomCenter), Vec2::new(560.0, 520.0));
    }

    #[test]
    fn test_bar_zone_positions() {
        let zones = DockLayout::bar().zones(Size::new(1440.0, 900.0), Size::new(560.0, 46.0));

        assert_eq!(zones.len(), 4);
        assert_eq!(zones[0].id, ZoneId::BottomCenter);
        assert_eq!(position_of(&zones, ZoneId::BottomCenter), Vec2::new(440.0, 830.0));
        assert_eq!(position_of(&zones, ZoneId::BottomLeft), Vec2::new(24.0, 830.0));
        assert_eq!(position_of(&zones, ZoneId::BottomRight), Vec2::new(856.0, 830.0));
        assert_eq!(position_of(&zones, ZoneId::TopCenter), Vec2::new(440.0, 72.0));
    }

    #[test]
    fn test_zones_stay_inside_viewport() {
        let viewport = Size::new(1280.0, 720.0);
        let screen = Rect::from_pos_size(Vec2::ZERO, viewport);

        let panel = Size::new(520.0, 600.0);
        for zone in DockLayout::Edges.zones(viewport, panel) {
            assert!(screen.contains_rect(&zone.rect(panel)), "{} escapes", zone.id);
        }

        let bar = Size::new(560.0, 46.0);
        let inset = screen.inset(BAR_PADDING);
        for zone in DockLayout::bar().zones(viewport, bar) {
            assert!(inset.contains_rect(&zone.rect(bar)), "{} escapes", zone.id);
        }
    }

    #[test]
    fn test_zone_count() {
        assert_eq!(DockLayout::Edges.zone_count(), 8);
        assert_eq!(DockLayout::bar().zone_count(), 4);
    }

    #[test]
    fn test_layout_serde() {
        let json = serde_json::to_string(&DockLayout::bar()).unwrap();
        assert_eq!(json, r#"{"kind":"bar","padding":24.0,"headerClearance":48.0}"#);
        let edges: DockLayout = serde_json::from_str(r#"{"kind":"edges"}"#).unwrap();
        assert_eq!(edges, DockLayout::Edges);
    }
}
