//! Nearest-zone resolution for drag release

use serde::Serialize;

use super::{DockZone, ZoneId};
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Per-panel-type parameters for snap resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapParams {
    /// Current panel size
    pub panel: Size,
    /// Maximum center-to-drop distance for a zone to capture the drop
    pub snap_distance: f32,
    /// Edge margin applied to the free-position fallback
    pub clamp_margin: f32,
}

/// Outcome of resolving a drop point
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapResolution {
    /// The drop was captured by a zone
    Docked { zone: ZoneId, position: Vec2 },
    /// No zone was close enough, the panel rests at a clamped free position
    Free { position: Vec2 },
}

impl SnapResolution {
    /// Target top-left position for the panel
    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            SnapResolution::Docked { position, .. } | SnapResolution::Free { position } => *position,
        }
    }

    /// The capturing zone, if any
    #[inline]
    pub fn zone(&self) -> Option<ZoneId> {
        match self {
            SnapResolution::Docked { zone, .. } => Some(*zone),
            SnapResolution::Free { .. } => None,
        }
    }

    #[inline]
    pub fn is_docked(&self) -> bool {
        matches!(self, SnapResolution::Docked { .. })
    }
}

/// Find the zone whose docked center is closest to `point`
///
/// Only zones strictly closer than `snap_distance` qualify. On equal
/// distances the zone listed first wins.
pub fn nearest_zone<'a>(
    point: Vec2,
    zones: &'a [DockZone],
    panel: Size,
    snap_distance: f32,
) -> Option<&'a DockZone> {
    let mut nearest = None;
    let mut min_dist = f32::INFINITY;

    for zone in zones {
        let dist = point.distance(zone.center(panel));
        if dist < min_dist && dist < snap_distance {
            min_dist = dist;
            nearest = Some(zone);
        }
    }

    nearest
}

/// Free-position fallback: center the panel on the drop point, then clamp it
/// inside the viewport with `margin` on every side.
#[inline]
pub fn free_position(point: Vec2, panel: Size, viewport: &Viewport, margin: f32) -> Vec2 {
    viewport.clamp_origin(point - panel.half(), panel, margin)
}

/// Resolve a drop point against a zone list
pub fn resolve_snap(
    point: Vec2,
    zones: &[DockZone],
    viewport: &Viewport,
    params: SnapParams,
) -> SnapResolution {
    match nearest_zone(point, zones, params.panel, params.snap_distance) {
        Some(zone) => SnapResolution::Docked {
            zone: zone.id,
            position: zone.position,
        },
        None => SnapResolution::Free {
            position: free_position(point, params.panel, viewport, params.clamp_margin),
        },
    }
}
