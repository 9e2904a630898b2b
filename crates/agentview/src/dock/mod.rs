//! Dock snapping for floating panels
//!
//! A panel type is described by a [`DockLayout`], which turns the viewport and
//! panel dimensions into an ordered list of candidate [`DockZone`]s. On drag
//! release [`resolve_snap`] picks the nearest zone within the snap distance, or
//! falls back to a clamped free position. [`DockTracker`] owns the zone list
//! and the active zone for one panel instance.

mod zone;
mod layout;
mod resolver;
mod tracker;

pub use zone::{DockZone, ZoneId};
pub use layout::DockLayout;
pub use resolver::{free_position, nearest_zone, resolve_snap, SnapParams, SnapResolution};
pub use tracker::DockTracker;

/// Maximum center-to-drop-point distance for a zone to capture a drop
pub const SNAP_DISTANCE: f32 = 200.0;

/// Inset of control bar zones from the viewport edges
pub const BAR_PADDING: f32 = 24.0;

/// Extra offset for the control bar's top zone so it clears the page header
pub const HEADER_CLEARANCE: f32 = 48.0;

/// Free-position clamp margin for the agent panel (flush to the edges)
pub const AGENT_CLAMP_MARGIN: f32 = 0.0;

/// Free-position clamp margin for the control bar
pub const BAR_CLAMP_MARGIN: f32 = 8.0;
