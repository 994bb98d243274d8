//! Animation timing policy applied to enter/update/exit transitions.

use crate::core::settings::AnimationSettings;

pub const BASE_DURATION_MS: f64 = 750.0;
pub const BASE_STAGGER_MS: f64 = 50.0;

/// Resolved timing for one frame: the same policy is applied to all three
/// mark sets (exits just use delay index 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPolicy {
    pub duration_ms: f64,
    pub stagger_ms: f64,
}

impl TransitionPolicy {
    /// Divide the base timings by the speed factor; a disabled setting (or a
    /// nonsensical factor) collapses everything to an instant jump.
    pub fn resolve(settings: &AnimationSettings) -> Self {
        if !settings.enabled || settings.speed_factor <= 0.0 {
            return Self::none();
        }
        Self {
            duration_ms: BASE_DURATION_MS / settings.speed_factor,
            stagger_ms: BASE_STAGGER_MS / settings.speed_factor,
        }
    }

    pub fn none() -> Self {
        Self {
            duration_ms: 0.0,
            stagger_ms: 0.0,
        }
    }

    pub fn delay_ms(&self, index: usize) -> f64 {
        self.stagger_ms * index as f64
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0.0
    }
}
