//! Easing curves for slide interpolation.
//!
//! Renderers that animate the track themselves (no CSS transition) sample
//! these to position the track mid-slide.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for the slide transition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    EaseIn,
    /// Quadratic ease-out (fast start, slow end).
    EaseOut,
    /// Cubic ease-in-out (slow start and end), the track's default.
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; output is also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }

    /// Interpolate between `from` and `to` at eased progress `t`.
    #[inline]
    #[must_use]
    pub fn lerp(self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.evaluate(t)
    }
}
