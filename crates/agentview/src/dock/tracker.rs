//! Dock state for one floating panel

use super::{resolve_snap, DockLayout, DockZone, SnapParams, SnapResolution, ZoneId};
use crate::config::PanelConfig;
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Owns the zone list and active zone of a single panel
///
/// Zones are recomputed from scratch whenever the viewport or the panel size
/// changes. The active zone only moves when a drop is captured by a zone.
#[derive(Clone, Debug)]
pub struct DockTracker {
    layout: DockLayout,
    viewport: Viewport,
    panel: Size,
    snap_distance: f32,
    clamp_margin: f32,
    initial_zone: ZoneId,
    zones: Vec<DockZone>,
    active_zone: ZoneId,
}

impl DockTracker {
    /// Create a tracker for a panel mounted in `viewport`
    pub fn new(config: &PanelConfig, viewport: Viewport) -> Self {
        let zones = config.layout.zones(viewport.size, config.size);
        Self {
            layout: config.layout,
            viewport,
            panel: config.size,
            snap_distance: config.snap_distance,
            clamp_margin: config.clamp_margin,
            initial_zone: config.initial_zone,
            zones,
            active_zone: config.initial_zone,
        }
    }

    #[inline]
    pub fn layout(&self) -> DockLayout {
        self.layout
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn panel_size(&self) -> Size {
        self.panel
    }

    /// Current zones, in tie-break order
    #[inline]
    pub fn zones(&self) -> &[DockZone] {
        &self.zones
    }

    /// The zone most recently snapped to
    #[inline]
    pub fn active_zone(&self) -> ZoneId {
        self.active_zone
    }

    /// Look up a zone by id
    pub fn zone(&self, id: ZoneId) -> Option<&DockZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Viewport resize notification
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.recompute();
    }

    /// Panel dimension change notification
    pub fn set_panel_size(&mut self, size: Size) {
        self.panel = size;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.zones = self.layout.zones(self.viewport.size, self.panel);
        tracing::trace!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            panel_width = self.panel.width,
            panel_height = self.panel.height,
            zones = self.zones.len(),
            "recomputed dock zones"
        );
    }

    /// Resolve a drop point, updating the active zone when a zone captures it
    pub fn resolve(&mut self, drop_point: Vec2) -> SnapResolution {
        let params = SnapParams {
            panel: self.panel,
            snap_distance: self.snap_distance,
            clamp_margin: self.clamp_margin,
        };
        let resolution = resolve_snap(drop_point, &self.zones, &self.viewport, params);

        match resolution {
            SnapResolution::Docked { zone, position } => {
                self.active_zone = zone;
                tracing::debug!(zone = %zone, x = position.x, y = position.y, "panel docked");
            }
            SnapResolution::Free { position } => {
                tracing::debug!(x = position.x, y = position.y, "panel left floating");
            }
        }

        resolution
    }

    /// Target top-left position for a drop at `drop_point`
    #[inline]
    pub fn snap_target(&mut self, drop_point: Vec2) -> Vec2 {
        self.resolve(drop_point).position()
    }

    /// Anchor of the configured initial zone, or the origin when the layout
    /// has no such zone
    pub fn initial_position(&self) -> Vec2 {
        self.zone(self.initial_zone)
            .map(|zone| zone.position)
            .unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_tracker() -> DockTracker {
        DockTracker::new(&PanelConfig::agent_panel(), Viewport::new(1440.0, 900.0))
    }

    #[test]
    fn test_initial_position_right_middle() {
        let tracker = agent_tracker();
        assert_eq!(tracker.initial_position(), Vec2::new(1120.0, 260.0));
        assert_eq!(tracker.active_zone(), ZoneId::RightMiddle);
    }

    #[test]
    fn test_initial_position_unknown_zone_is_origin() {
        let mut config = PanelConfig::agent_panel();
        config.initial_zone = ZoneId::BottomLeft;
        let tracker = DockTracker::new(&config, Viewport::new(1440.0, 900.0));
        assert_eq!(tracker.initial_position(), Vec2::ZERO);
    }

    #[test]
    fn test_snap_updates_active_zone() {
        let mut tracker = agent_tracker();
        // Near the center of the left-top zone (160, 190)
        let target = tracker.snap_target(Vec2::new(170.0, 200.0));
        assert_eq!(target, Vec2::ZERO);
        assert_eq!(tracker.active_zone(), ZoneId::LeftTop);
    }

    #[test]
    fn test_free_drop_keeps_active_zone() {
        let mut tracker = agent_tracker();
        let resolution = tracker.resolve(Vec2::new(720.0, 450.0));
        assert!(!resolution.is_docked());
        assert_eq!(resolution.position(), Vec2::new(560.0, 260.0));
        assert_eq!(tracker.active_zone(), ZoneId::RightMiddle);
    }

    #[test]
    fn test_resize_recomputes_zones() {
        let mut tracker = agent_tracker();
        tracker.set_viewport(Viewport::new(1920.0, 1080.0));
        let zone = tracker.zone(ZoneId::RightMiddle).unwrap();
        assert_eq!(zone.position, Vec2::new(1600.0, 350.0));
        assert_eq!(tracker.initial_position(), Vec2::new(1600.0, 350.0));
    }

    #[test]
    fn test_panel_size_recomputes_zones() {
        let mut tracker = agent_tracker();
        tracker.set_panel_size(Size::new(400.0, 500.0));
        let zone = tracker.zone(ZoneId::RightBottom).unwrap();
        assert_eq!(zone.position, Vec2::new(1040.0, 400.0));
        assert_eq!(tracker.panel_size(), Size::new(400.0, 500.0));
    }

    #[test]
    fn test_resize_keeps_active_zone() {
        let mut tracker = agent_tracker();
        tracker.snap_target(Vec2::new(170.0, 200.0));
        tracker.set_viewport(Viewport::new(800.0, 600.0));
        assert_eq!(tracker.active_zone(), ZoneId::LeftTop);
    }
}
