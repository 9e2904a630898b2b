//! Light/dark mode and accent color preferences

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::persistence::{load_json, save_json, PreferenceStore};

/// Storage key for [`ThemeSettings`]
pub const THEME_KEY: &str = "agentview-theme";

/// Accent used until the user picks one
pub const DEFAULT_ACCENT: &str = "#111111";

/// Alpha suffixes appended to the accent hex
const HOVER_ALPHA: &str = "cc";
const GLOW_ALPHA: &str = "4d";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// A named accent preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccentColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// Accent presets offered in the settings drawer
pub const ACCENT_COLORS: [AccentColor; 8] = [
    AccentColor { name: "Blue", value: "#4f8ff7" },
    AccentColor { name: "Purple", value: "#a855f7" },
    AccentColor { name: "Pink", value: "#ec4899" },
    AccentColor { name: "Red", value: "#ef4444" },
    AccentColor { name: "Orange", value: "#f97316" },
    AccentColor { name: "Yellow", value: "#eab308" },
    AccentColor { name: "Green", value: "#22c55e" },
    AccentColor { name: "Teal", value: "#14b8a6" },
];

/// Persisted theme preferences
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    /// Hex color, `#rrggbb`
    pub accent_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent_color: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl ThemeSettings {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.accent_color = color.into();
    }

    /// Value for the `data-theme` attribute on the document root
    ///
    /// `None` means the attribute should be removed.
    pub fn data_theme(&self) -> Option<&'static str> {
        match self.mode {
            ThemeMode::Dark => Some("dark"),
            ThemeMode::Light => None,
        }
    }

    /// CSS custom properties derived from the accent color
    pub fn css_variables(&self) -> BTreeMap<&'static str, String> {
        let accent = &self.accent_color;
        BTreeMap::from([
            ("--accent", accent.clone()),
            ("--accent-hover", format!("{accent}{HOVER_ALPHA}")),
            ("--accent-glow", format!("{accent}{GLOW_ALPHA}")),
        ])
    }

    /// Everything the presentation layer needs to apply the theme
    pub fn style(&self) -> ThemeStyle {
        ThemeStyle {
            mode: self.mode,
            accent_color: self.accent_color.clone(),
            data_theme: self.data_theme(),
            variables: self.css_variables(),
        }
    }

    /// Load stored settings, falling back to defaults
    ///
    /// A missing key or an unreadable value both yield the defaults.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring stored theme");
                Self::default()
            }
        }
    }

    /// Load stored settings, reporting malformed values
    pub fn try_load<S: PreferenceStore + ?Sized>(store: &S) -> Result<Option<Self>, PreferenceError> {
        load_json(store, THEME_KEY)
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<(), PreferenceError> {
        save_json(store, THEME_KEY, self)
    }
}

/// Resolved theme for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub mode: ThemeMode,
    pub accent_color: String,
    pub data_theme: Option<&'static str>,
    pub variables: BTreeMap<&'static str, String>,
}
