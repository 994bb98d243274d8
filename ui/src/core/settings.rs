//! Process-wide animation settings consumed by the chart and cloud renderers.
//!
//! The web shell owns a single `Signal<AnimationSettings>` provided through
//! context; views read it every render and hand the snapshot down to the
//! renderers. There is deliberately no other global state.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Speed multipliers offered by the settings UI. The factor divides the base
/// transition duration, so 2× plays animations twice as fast.
pub const SPEED_FACTORS: [f64; 3] = [0.5, 1.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub enabled: bool,
    pub speed_factor: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_factor: 1.0,
        }
    }
}

/// Snapshot of the shared settings for the current render. Reading through
/// the context signal subscribes the component, so toggling the switch
/// re-renders every chart. Falls back to defaults when no provider exists
/// (bare component tests).
pub fn use_animation_settings() -> AnimationSettings {
    try_use_context::<Signal<AnimationSettings>>()
        .map(|signal| signal())
        .unwrap_or_default()
}
