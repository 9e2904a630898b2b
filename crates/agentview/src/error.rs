//! Error types for the viewer core
//!
//! Docking and navigation are total and never fail. Errors only arise at the
//! edges: loading configuration and reading or writing stored preferences.

/// Errors raised while loading or validating a [`ViewerConfig`](crate::ViewerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the config schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size is zero, negative or not finite.
    #[error("{field}: size {width}x{height} must be finite and positive")]
    InvalidSize {
        field: &'static str,
        width: f32,
        height: f32,
    },

    /// A panel's default size lies outside its min/max bounds.
    #[error("{panel}: size must lie within min_size..=max_size")]
    SizeOutOfBounds { panel: &'static str },

    /// A distance, threshold or duration is zero, negative or not finite.
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A margin is negative or not finite.
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Errors raised by a [`PreferenceStore`](crate::persistence::PreferenceStore).
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// A stored value exists but could not be decoded.
    #[error("malformed preference {key:?}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode preference: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backing store refused the operation (quota, privacy mode, ...).
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// A string that does not name any dock zone.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown dock zone: {0:?}")]
pub struct UnknownZone(pub String);

/// A string that does not name a floating panel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown panel: {0:?}")]
pub struct UnknownPanel(pub String);
