//! Dock zone identity and anchors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownZone;
use crate::math::{Rect, Size, Vec2};

/// Stable identity of a dock zone
///
/// The agent panel uses the eight edge zones, the control bar uses
/// `BottomCenter`, `BottomLeft`, `BottomRight` and `TopCenter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneId {
    RightMiddle,
    RightTop,
    RightBottom,
    LeftMiddle,
    LeftTop,
    LeftBottom,
    TopCenter,
    BottomCenter,
    BottomLeft,
    BottomRight,
}

impl ZoneId {
    pub const ALL: [ZoneId; 10] = [
        ZoneId::RightMiddle,
        ZoneId::RightTop,
        ZoneId::RightBottom,
        ZoneId::LeftMiddle,
        ZoneId::LeftTop,
        ZoneId::LeftBottom,
        ZoneId::TopCenter,
        ZoneId::BottomCenter,
        ZoneId::BottomLeft,
        ZoneId::BottomRight,
    ];

    /// Kebab-case identifier, as used by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneId::RightMiddle => "right-middle",
            ZoneId::RightTop => "right-top",
            ZoneId::RightBottom => "right-bottom",
            ZoneId::LeftMiddle => "left-middle",
            ZoneId::LeftTop => "left-top",
            ZoneId::LeftBottom => "left-bottom",
            ZoneId::TopCenter => "top-center",
            ZoneId::BottomCenter => "bottom-center",
            ZoneId::BottomLeft => "bottom-left",
            ZoneId::BottomRight => "bottom-right",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ZoneId::RightMiddle => "Right Middle",
            ZoneId::RightTop => "Right Top",
            ZoneId::RightBottom => "Right Bottom",
            ZoneId::LeftMiddle => "Left Middle",
            ZoneId::LeftTop => "Left Top",
            ZoneId::LeftBottom => "Left Bottom",
            ZoneId::TopCenter => "Top Center",
            ZoneId::BottomCenter => "Bottom Center",
            ZoneId::BottomLeft => "Bottom Left",
            ZoneId::BottomRight => "Bottom Right",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneId {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneId::ALL
            .iter()
            .copied()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| UnknownZone(s.to_string()))
    }
}

/// A candidate resting position for a panel
///
/// `position` is the panel's top-left corner when docked here. Zones are
/// derived from the viewport and panel size and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DockZone {
    pub id: ZoneId,
    pub position: Vec2,
}

impl DockZone {
    #[inline]
    pub const fn new(id: ZoneId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }

    /// Where the panel's center sits when docked in this zone
    #[inline]
    pub fn center(&self, panel: Size) -> Vec2 {
        self.position + panel.half()
    }

    /// The area a docked panel of size `panel` occupies
    #[inline]
    pub fn rect(&self, panel: Size) -> Rect {
        Rect::from_pos_size(self.position, panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id_round_trip_through_str() {
        for zone in ZoneId::ALL {
            assert_eq!(zone.as_str().parse::<ZoneId>(), Ok(zone));
        }
    }

    #[test]
    fn test_zone_id_unknown() {
        let err = "center".parse::<ZoneId>().unwrap_err();
        assert_eq!(err, UnknownZone("center".to_string()));
    }

    #[test]
    fn test_zone_id_serde_matches_as_str() {
        let json = serde_json::to_string(&ZoneId::BottomCenter).unwrap();
        assert_eq!(json, "\"bottom-center\"");
        let parsed: ZoneId = serde_json::from_str("\"left-top\"").unwrap();
        assert_eq!(parsed, ZoneId::LeftTop);
    }

    #[test]
    fn test_zone_labels() {
        assert_eq!(ZoneId::BottomCenter.label(), "Bottom Center");
        assert_eq!(ZoneId::TopCenter.to_string(), "top-center");
    }

    #[test]
    fn test_zone_center() {
        let zone = DockZone::new(ZoneId::BottomCenter, 440.0, 830.0);
        let center = zone.center(Size::new(560.0, 46.0));
        assert!((center.x - 720.0).abs() < 0.001);
        assert!((center.y - 853.0).abs() < 0.001);
    }
}
