//! Viewer configuration
//!
//! Every tunable constant of the docking and navigation core lives here. The
//! defaults reproduce the demo's behaviour; a JSON document can override any
//! top-level section.

use serde::{Deserialize, Serialize};

use crate::carousel::AUTO_PLAY_INTERVAL_MS;
use crate::dock::{DockLayout, ZoneId, AGENT_CLAMP_MARGIN, BAR_CLAMP_MARGIN, SNAP_DISTANCE};
use crate::error::ConfigError;
use crate::input::{COOLDOWN_MS, SCROLL_THRESHOLD};
use crate::math::Size;

/// Configuration for one floating panel type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Zone arrangement
    pub layout: DockLayout,
    /// Initial size
    pub size: Size,
    /// Smallest size reachable by resizing
    pub min_size: Size,
    /// Largest size reachable by resizing
    pub max_size: Size,
    /// Drop capture radius around each zone center
    pub snap_distance: f32,
    /// Edge margin for the free-position fallback
    pub clamp_margin: f32,
    /// Zone the panel starts in
    pub initial_zone: ZoneId,
}

impl PanelConfig {
    /// The floating agent status panel: eight flush zones, resizable
    pub fn agent_panel() -> Self {
        Self {
            layout: DockLayout::Edges,
            size: Size::new(320.0, 380.0),
            min_size: Size::new(240.0, 200.0),
            max_size: Size::new(520.0, 600.0),
            snap_distance: SNAP_DISTANCE,
            clamp_margin: AGENT_CLAMP_MARGIN,
            initial_zone: ZoneId::RightMiddle,
        }
    }

    /// The docking control bar: four inset zones, fixed size
    pub fn control_bar() -> Self {
        let size = Size::new(560.0, 46.0);
        Self {
            layout: DockLayout::bar(),
            size,
            min_size: size,
            max_size: size,
            snap_distance: SNAP_DISTANCE,
            clamp_margin: BAR_CLAMP_MARGIN,
            initial_zone: ZoneId::BottomCenter,
        }
    }

    /// Whether the panel can be resized at all
    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.min_size != self.max_size
    }

    fn validate(&self, panel: &'static str) -> Result<(), ConfigError> {
        for (field, size) in [
            ("size", self.size),
            ("minSize", self.min_size),
            ("maxSize", self.max_size),
        ] {
            if !size.is_valid() {
                return Err(ConfigError::InvalidSize {
                    field,
                    width: size.width,
                    height: size.height,
                });
            }
        }
        if !self.min_size.fits_within(self.size) || !self.size.fits_within(self.max_size) {
            return Err(ConfigError::SizeOutOfBounds { panel });
        }
        positive("snapDistance", self.snap_distance as f64)?;
        non_negative("clampMargin", self.clamp_margin as f64)?;
        if let DockLayout::Bar { padding, header_clearance } = self.layout {
            non_negative("layout.padding", padding as f64)?;
            non_negative("layout.headerClearance", header_clearance as f64)?;
        }
        Ok(())
    }
}

/// Scroll and keyboard navigation tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationConfig {
    /// Accumulated wheel delta that triggers one step
    pub scroll_threshold: f32,
    /// Time after a step during which wheel input is discarded
    pub cooldown_ms: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD,
            cooldown_ms: COOLDOWN_MS,
        }
    }
}

/// Carousel auto-play tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackConfig {
    /// Delay between automatic advances
    pub interval_ms: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: AUTO_PLAY_INTERVAL_MS,
        }
    }
}

/// Complete configuration for a [`ViewerEngine`](crate::ViewerEngine)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(default = "PanelConfig::agent_panel")]
    pub agent_panel: PanelConfig,
    #[serde(default = "PanelConfig::control_bar")]
    pub control_bar: PanelConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            agent_panel: PanelConfig::agent_panel(),
            control_bar: PanelConfig::control_bar(),
            navigation: NavigationConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.agent_panel.validate("agentPanel")?;
        self.control_bar.validate("controlBar")?;
        positive("navigation.scrollThreshold", self.navigation.scroll_threshold as f64)?;
        positive("navigation.cooldownMs", self.navigation.cooldown_ms)?;
        positive("playback.intervalMs", self.playback.interval_ms)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.agent_panel.is_resizable());
        assert!(!config.control_bar.is_resizable());
        assert_eq!(config.agent_panel.initial_zone, ZoneId::RightMiddle);
        assert!((config.control_bar.clamp_margin - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_section_override() {
        let config = ViewerConfig::from_json(r#"{"navigation":{"cooldownMs":250}}"#).unwrap();
        assert!((config.navigation.cooldown_ms - 250.0).abs() < 0.001);
        assert!((config.navigation.scroll_threshold - SCROLL_THRESHOLD).abs() < 0.001);
        assert!((config.playback.interval_ms - AUTO_PLAY_INTERVAL_MS).abs() < 0.001);
    }

    #[test]
    fn test_config_json_round_trip() {
        let json = serde_json::to_string(&ViewerConfig::default()).unwrap();
        let restored = ViewerConfig::from_json(&json).unwrap();
        assert_eq!(restored, ViewerConfig::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = ViewerConfig::from_json("{\"playback\":").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let mut value = serde_json::to_value(ViewerConfig::default()).unwrap();
        value["agentPanel"]["initialZone"] = "middle".into();
        let err = ViewerConfig::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_size_outside_bounds() {
        let mut config = ViewerConfig::default();
        config.agent_panel.size = Size::new(600.0, 380.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SizeOutOfBounds { panel: "agentPanel" })
        ));
    }

    #[test]
    fn test_rejects_zero_cooldown() {
        let mut config = ViewerConfig::default();
        config.navigation.cooldown_ms = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "navigation.cooldownMs", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_margin() {
        let mut config = ViewerConfig::default();
        config.control_bar.clamp_margin = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }
}
