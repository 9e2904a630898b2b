//! Dock snapping and carousel navigation core for the agent workflow viewer
//!
//! The viewer shows a carousel of captured screens with two floating panels
//! over it: the agent status panel and the playback control bar. This crate
//! owns the state behind that surface:
//! - Dock zone geometry and nearest-zone snapping for both panels
//! - Wheel gesture debouncing into discrete navigation steps
//! - The clamped carousel index with its auto-play timer
//! - Theme preferences and the per-frame render snapshot
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`dock`]: Zone layouts, snap resolution and per-panel dock tracking
//! - [`input`]: Wheel debouncing, arrow keys and panel drag state
//! - [`carousel`]: Index reducer, auto-play and card transforms
//! - [`panel`]: Draggable, resizable, dimmable floating panels
//! - [`theme`] / [`persistence`]: Light/dark mode and accent preferences
//!
//! ## Example
//!
//! ```rust
//! use agentview::{PanelKind, ViewerEngine, ZoneId};
//!
//! let mut engine = ViewerEngine::default();
//! engine.resize(1440.0, 900.0);
//!
//! // Drop the control bar near the bottom of the screen
//! engine.begin_panel_drag(PanelKind::ControlBar, 720.0, 850.0);
//! engine.end_panel_drag(PanelKind::ControlBar, 720.0, 850.0);
//! assert_eq!(engine.panel(PanelKind::ControlBar).active_zone(), ZoneId::BottomCenter);
//!
//! // One wheel gesture, one step
//! engine.handle_wheel(30.0, 0.0);
//! engine.handle_wheel(30.0, 16.0);
//! engine.handle_wheel(30.0, 32.0);
//! assert_eq!(engine.carousel().active_index(), 1);
//! ```
//!
//! ## Time
//!
//! Nothing here reads a clock. Every event and [`ViewerEngine::tick`] takes a
//! millisecond timestamp, so the cooldown and auto-play timers are
//! deterministic under test.

pub mod math;
pub mod dock;
pub mod input;
pub mod carousel;
pub mod panel;
pub mod theme;
pub mod persistence;
pub mod content;
pub mod config;
pub mod error;
pub mod timer;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use math::{Rect, Size, Vec2};
pub use dock::{DockLayout, DockTracker, DockZone, SnapResolution, ZoneId};
pub use input::{GestureDebouncer, InputResult, NavKey, NavStep};
pub use carousel::{Carousel, CarouselAction, CarouselState};
pub use panel::{FloatingPanel, PanelKind};
pub use theme::{ThemeMode, ThemeSettings};
pub use persistence::{MemoryPreferences, PreferenceStore};
pub use content::{default_screens, Screen};
pub use config::{NavigationConfig, PanelConfig, PlaybackConfig, ViewerConfig};
pub use error::{ConfigError, PreferenceError};

pub use engine::{PanelFrame, ViewerEngine, ViewerFrame, ZoneFrame};
pub use viewport::Viewport;
