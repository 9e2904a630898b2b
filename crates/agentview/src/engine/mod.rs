//! Viewer engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `navigation`: wheel/key input and carousel transitions
//! - `panels`: drag, resize and dim operations on the floating panels
//! - `rendering`: the pull-based frame snapshot

mod navigation;
mod panels;
mod rendering;

use crate::carousel::Carousel;
use crate::config::ViewerConfig;
use crate::content::{default_screens, Screen};
use crate::input::GestureDebouncer;
use crate::panel::{FloatingPanel, PanelKind};
use crate::persistence::PreferenceStore;
use crate::error::PreferenceError;
use crate::theme::ThemeSettings;
use crate::viewport::Viewport;

pub use rendering::{PanelFrame, ViewerFrame, ZoneFrame};

/// Viewer engine
///
/// Owns one instance of every stateful component and routes environment
/// signals to them:
/// - viewport resize → both panels' dock trackers
/// - wheel/key input → gesture debouncer → carousel
/// - pointer drags → the targeted floating panel
/// - `tick` → cooldown expiry and auto-play advances
///
/// The presentation layer pulls a [`ViewerFrame`] after each call.
#[derive(Clone, Debug)]
pub struct ViewerEngine {
    pub(crate) viewport: Viewport,
    pub(crate) agent_panel: FloatingPanel,
    pub(crate) control_bar: FloatingPanel,
    pub(crate) carousel: Carousel,
    pub(crate) gestures: GestureDebouncer,
    pub(crate) screens: Vec<Screen>,
    pub(crate) theme: ThemeSettings,
}

impl Default for ViewerEngine {
    fn default() -> Self {
        Self::new(&ViewerConfig::default(), default_screens(), Viewport::default())
    }
}

impl ViewerEngine {
    /// Create an engine over `screens` mounted in `viewport`
    pub fn new(config: &ViewerConfig, screens: Vec<Screen>, viewport: Viewport) -> Self {
        tracing::debug!(
            screens = screens.len(),
            width = viewport.width(),
            height = viewport.height(),
            "viewer engine created"
        );
        Self {
            viewport,
            agent_panel: FloatingPanel::new(PanelKind::Agent, &config.agent_panel, viewport),
            control_bar: FloatingPanel::new(PanelKind::ControlBar, &config.control_bar, viewport),
            carousel: Carousel::with_config(screens.len(), &config.playback),
            gestures: GestureDebouncer::new(&config.navigation),
            screens,
            theme: ThemeSettings::default(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Viewport resize notification; both panels recompute their zones
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.agent_panel.set_viewport(self.viewport);
        self.control_bar.set_viewport(self.viewport);
    }

    #[inline]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[inline]
    pub fn gestures(&self) -> &GestureDebouncer {
        &self.gestures
    }

    #[inline]
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Screen currently shown, `None` for an empty content list
    pub fn active_screen(&self) -> Option<&Screen> {
        self.screens.get(self.carousel.active_index())
    }

    pub fn panel(&self, kind: PanelKind) -> &FloatingPanel {
        match kind {
            PanelKind::Agent => &self.agent_panel,
            PanelKind::ControlBar => &self.control_bar,
        }
    }

    pub(crate) fn panel_mut(&mut self, kind: PanelKind) -> &mut FloatingPanel {
        match kind {
            PanelKind::Agent => &mut self.agent_panel,
            PanelKind::ControlBar => &mut self.control_bar,
        }
    }

    // --- time ---

    /// Advance timers to `now_ms`; returns the number of auto-play advances
    pub fn tick(&mut self, now_ms: f64) -> usize {
        self.gestures.poll(now_ms);
        self.carousel.tick(now_ms)
    }

    /// Tear down every timer and in-flight gesture
    pub fn shutdown(&mut self) {
        self.carousel.shutdown();
        self.gestures.reset();
        self.agent_panel.cancel_drag();
        self.agent_panel.end_resize();
        self.control_bar.cancel_drag();
        tracing::debug!("viewer engine shut down");
    }

    // --- theme ---

    #[inline]
    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeSettings) {
        self.theme = theme;
    }

    pub fn toggle_theme_mode(&mut self) {
        self.theme.toggle_mode();
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.theme.set_accent_color(color);
    }

    /// Replace the theme with the stored one, or defaults
    pub fn load_theme<S: PreferenceStore + ?Sized>(&mut self, store: &S) {
        self.theme = ThemeSettings::load(store);
    }

    pub fn save_theme<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<(), PreferenceError> {
        self.theme.save(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::ZoneId;
    use crate::persistence::MemoryPreferences;
    use crate::theme::ThemeMode;

    #[test]
    fn test_default_engine() {
        let engine = ViewerEngine::default();
        assert_eq!(engine.screens().len(), 5);
        assert_eq!(engine.active_screen().map(|s| s.id.as_str()), Some("screen-1"));
        assert!((engine.panel(PanelKind::Agent).position().x - 1120.0).abs() < 0.001);
        assert!((engine.panel(PanelKind::ControlBar).position().y - 830.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_recomputes_both_panels() {
        let mut engine = ViewerEngine::default();
        engine.resize(1920.0, 1080.0);

        let agent = engine.panel(PanelKind::Agent).tracker();
        let zone = agent.zone(ZoneId::RightMiddle).unwrap();
        assert!((zone.position.x - 1600.0).abs() < 0.001);
        assert!((zone.position.y - 350.0).abs() < 0.001);

        let bar = engine.panel(PanelKind::ControlBar).tracker();
        let zone = bar.zone(ZoneId::BottomCenter).unwrap();
        assert!((zone.position.x - 680.0).abs() < 0.001);
        assert!((zone.position.y - 1010.0).abs() < 0.001);
    }

    #[test]
    fn test_shutdown_stops_autoplay() {
        let mut engine = ViewerEngine::default();
        engine.toggle_play(0.0);
        engine.shutdown();
        assert_eq!(engine.tick(10_000.0), 0);
        assert_eq!(engine.carousel().active_index(), 0);
        assert!(!engine.carousel().is_timer_armed());
    }

    #[test]
    fn test_theme_round_trip_through_store() {
        let mut store = MemoryPreferences::new();
        let mut engine = ViewerEngine::default();
        engine.toggle_theme_mode();
        engine.set_accent_color("#14b8a6");
        engine.save_theme(&mut store).unwrap();

        let mut other = ViewerEngine::default();
        other.load_theme(&store);
        assert_eq!(other.theme().mode, ThemeMode::Dark);
        assert_eq!(other.theme().accent_color, "#14b8a6");
    }
}
