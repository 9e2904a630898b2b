//! WASM exports for the viewer
//!
//! [`ViewerController`] wraps [`ViewerEngine`] with a JS-friendly API.
//! Timestamps come from `Date.now()`; structured results are returned as
//! JSON strings and the presentation layer pulls `frame_json()` after every
//! call that may have changed state.

use wasm_bindgen::prelude::*;

use crate::carousel::CarouselState;
use crate::config::ViewerConfig;
use crate::content::{default_screens, Screen};
use crate::engine::ViewerEngine;
use crate::input::InputResult;
use crate::panel::PanelKind;
use crate::persistence::LocalStoragePreferences;
use crate::theme::ACCENT_COLORS;
use crate::viewport::Viewport;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

fn parse_panel(panel: &str) -> Option<PanelKind> {
    match panel.parse() {
        Ok(kind) => Some(kind),
        Err(err) => {
            warn(&format!("[agentview] {err}"));
            None
        }
    }
}

/// Viewer controller for WASM
#[wasm_bindgen]
pub struct ViewerController {
    engine: ViewerEngine,
    config: ViewerConfig,
    prefs: LocalStoragePreferences,
}

#[wasm_bindgen]
impl ViewerController {
    /// Create a controller with the default configuration and demo screens
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::build(ViewerConfig::default(), default_screens())
    }

    /// Create a controller from a JSON configuration document
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<ViewerController, JsValue> {
        let config = ViewerConfig::from_json(config_json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self::build(config, default_screens()))
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Mount the viewer at the current window size
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        let screens = self.engine.screens().to_vec();
        let theme = self.engine.theme().clone();
        self.engine = ViewerEngine::new(&self.config, screens, Viewport::new(width, height));
        self.engine.set_theme(theme);
    }

    /// Replace the content list from JSON (`[{id, title, url, label}]`)
    ///
    /// Remounts the viewer; carousel position is not preserved.
    #[wasm_bindgen]
    pub fn set_screens_json(&mut self, json: &str) -> Result<(), JsValue> {
        let screens: Vec<Screen> =
            serde_json::from_str(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let viewport = self.engine.viewport();
        let theme = self.engine.theme().clone();
        self.engine.shutdown();
        self.engine = ViewerEngine::new(&self.config, screens, viewport);
        self.engine.set_theme(theme);
        Ok(())
    }

    /// Window resize notification
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Feed a wheel event; the caller must `preventDefault()` when this
    /// returns true, which it always does
    #[wasm_bindgen]
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.engine.handle_wheel(delta_y, now_ms());
        true
    }

    /// Feed a keydown event; returns whether the key was consumed
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.engine.handle_key(key, now_ms()).is_handled()
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> String {
        let state = self.engine.next(now_ms());
        Self::state_json(state)
    }

    #[wasm_bindgen]
    pub fn prev(&mut self) -> String {
        let state = self.engine.prev(now_ms());
        Self::state_json(state)
    }

    #[wasm_bindgen]
    pub fn go_to(&mut self, index: i32) -> String {
        let state = self.engine.go_to(i64::from(index), now_ms());
        Self::state_json(state)
    }

    #[wasm_bindgen]
    pub fn toggle_play(&mut self) -> String {
        let state = self.engine.toggle_play(now_ms());
        Self::state_json(state)
    }

    #[wasm_bindgen]
    pub fn stop_play(&mut self) -> String {
        let state = self.engine.stop_play(now_ms());
        Self::state_json(state)
    }

    // =========================================================================
    // Panels
    // =========================================================================

    /// Pointer down on a panel's drag area; returns false when refused
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, panel: &str, x: f32, y: f32) -> bool {
        parse_panel(panel)
            .map(|kind| self.engine.begin_panel_drag(kind, x, y).is_handled())
            .unwrap_or(false)
    }

    /// Pointer move during a drag; returns `{x, y}` or `null`
    #[wasm_bindgen]
    pub fn drag_move(&mut self, panel: &str, x: f32, y: f32) -> String {
        let position = parse_panel(panel).and_then(|kind| self.engine.drag_panel(kind, x, y));
        to_json(&position)
    }

    /// Drag release; returns the snap result as JSON
    #[wasm_bindgen]
    pub fn end_drag(&mut self, panel: &str, x: f32, y: f32) -> String {
        let result = parse_panel(panel)
            .map(|kind| self.engine.end_panel_drag(kind, x, y))
            .unwrap_or(InputResult::Unhandled);
        to_json(&result)
    }

    #[wasm_bindgen]
    pub fn cancel_drag(&mut self, panel: &str) {
        if let Some(kind) = parse_panel(panel) {
            self.engine.cancel_panel_drag(kind);
        }
    }

    #[wasm_bindgen]
    pub fn begin_resize(&mut self, panel: &str, x: f32, y: f32) -> bool {
        parse_panel(panel)
            .map(|kind| self.engine.begin_panel_resize(kind, x, y).is_handled())
            .unwrap_or(false)
    }

    /// Pointer move during a resize; returns `{width, height}` or `null`
    #[wasm_bindgen]
    pub fn resize_move(&mut self, panel: &str, x: f32, y: f32) -> String {
        let size = parse_panel(panel).and_then(|kind| self.engine.resize_panel(kind, x, y));
        to_json(&size)
    }

    #[wasm_bindgen]
    pub fn end_resize(&mut self, panel: &str) -> bool {
        parse_panel(panel)
            .map(|kind| self.engine.end_panel_resize(kind))
            .unwrap_or(false)
    }

    /// Toggle dimming; returns the new dimmed state
    #[wasm_bindgen]
    pub fn toggle_dim(&mut self, panel: &str) -> bool {
        parse_panel(panel)
            .map(|kind| self.engine.toggle_panel_dim(kind))
            .unwrap_or(false)
    }

    // =========================================================================
    // Theme
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_theme_mode(&mut self) {
        self.engine.toggle_theme_mode();
        self.persist_theme();
    }

    #[wasm_bindgen]
    pub fn set_accent_color(&mut self, color: &str) {
        self.engine.set_accent_color(color);
        self.persist_theme();
    }

    /// Accent presets as `[{name, value}]`
    #[wasm_bindgen]
    pub fn accent_colors_json(&self) -> String {
        to_json(&ACCENT_COLORS)
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance timers; returns the number of auto-play advances
    #[wasm_bindgen]
    pub fn tick(&mut self) -> u32 {
        self.engine.tick(now_ms()) as u32
    }

    /// Current frame as JSON
    #[wasm_bindgen]
    pub fn frame_json(&self) -> String {
        to_json(&self.engine.frame())
    }

    /// Release every timer; call on unmount
    #[wasm_bindgen]
    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}

impl ViewerController {
    fn build(config: ViewerConfig, screens: Vec<Screen>) -> Self {
        console_error_panic_hook::set_once();

        let prefs = LocalStoragePreferences::new();
        let mut engine = ViewerEngine::new(&config, screens, Viewport::default());
        engine.load_theme(&prefs);
        Self { engine, config, prefs }
    }

    fn state_json(state: CarouselState) -> String {
        to_json(&state)
    }

    fn persist_theme(&mut self) {
        if let Err(err) = self.engine.save_theme(&mut self.prefs) {
            warn(&format!("[agentview] {err}"));
        }
    }
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new()
    }
}
