//! Per-card render parameters
//!
//! Cards fan out around the active one: each step of distance shifts the
//! card sideways, shrinks it, tilts it and fades it. Only cards within
//! [`VISIBLE_RADIUS`] steps are produced.

use serde::Serialize;

use super::CarouselState;
use crate::content::Screen;

/// Cards further than this from the active index are not rendered
pub const VISIBLE_RADIUS: i64 = 2;

/// Horizontal shift per step
pub const CARD_SPACING: f32 = 200.0;

const SCALE_STEP: f32 = 0.1;
const ROTATE_STEP_DEG: f32 = 5.0;
const FADE_STEP: f32 = 0.4;
const BASE_Z_INDEX: i32 = 10;

/// Transform for one visible card
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub url: String,
    pub label: String,
    /// Signed distance from the active card
    pub offset: i64,
    /// Horizontal translation in pixels
    pub x: f32,
    pub scale: f32,
    /// Rotation around the vertical axis in degrees
    pub rotate_y: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub is_active: bool,
}

impl CardTransform {
    fn at(index: usize, offset: i64, screen: &Screen) -> Self {
        let step = offset as f32;
        let distance = step.abs();
        Self {
            index,
            id: screen.id.clone(),
            title: screen.title.clone(),
            url: screen.url.clone(),
            label: screen.label.clone(),
            offset,
            x: step * CARD_SPACING,
            scale: 1.0 - distance * SCALE_STEP,
            rotate_y: -ROTATE_STEP_DEG * step,
            opacity: (1.0 - distance * FADE_STEP).max(0.0),
            z_index: BASE_Z_INDEX - offset.unsigned_abs() as i32,
            is_active: offset == 0,
        }
    }
}

/// Compute transforms for the cards visible around the active index
pub fn card_transforms(state: &CarouselState, screens: &[Screen]) -> Vec<CardTransform> {
    let active = state.active_index as i64;
    screens
        .iter()
        .enumerate()
        .filter_map(|(index, screen)| {
            let offset = index as i64 - active;
            (offset.abs() <= VISIBLE_RADIUS).then(|| CardTransform::at(index, offset, screen))
        })
        .collect()
}

/// One progress dot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DotIndicator {
    pub index: usize,
    pub active: bool,
}

/// One dot per screen, the active one flagged
pub fn dot_indicators(state: &CarouselState) -> Vec<DotIndicator> {
    (0..state.total_screens)
        .map(|index| DotIndicator {
            index,
            active: index == state.active_index,
        })
        .collect()
}
