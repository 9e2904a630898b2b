//! Carousel navigation
//!
//! [`CarouselState`] is a pure, clamped index reducer. [`Carousel`] wraps it
//! with the auto-play timer and is the only place state changes happen.
//! [`cards`] derives per-item render parameters from a state snapshot.

mod state;
mod playback;
pub mod cards;

pub use state::{CarouselAction, CarouselState};
pub use playback::Carousel;
pub use cards::{card_transforms, dot_indicators, CardTransform, DotIndicator};

/// Delay between automatic advances while playing
pub const AUTO_PLAY_INTERVAL_MS: f64 = 2000.0;
