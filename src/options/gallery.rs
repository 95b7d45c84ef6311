use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gallery", inline)]
#[serde(default)]
/// Motion policy for the continuously scrolling gallery.
pub struct GalleryOptions {
    /// Pixels the strip advances per animation frame.
    #[schemars(title = "Speed (px/frame)", range(min = 0.05, max = 10.0), extend("step" = 0.05))]
    pub frame_delta: f32,
    /// Multiplier from pointer travel to scroll travel while dragging.
    #[schemars(title = "Drag Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub drag_sensitivity: f32,
    /// Idle time after a drag or wheel before auto-scroll resumes.
    #[schemars(title = "Cooldown (ms)", range(min = 0, max = 20000))]
    pub cooldown_ms: u64,
}

impl GalleryOptions {
    /// Cooldown before automatic advancement resumes.
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            frame_delta: 0.5,
            drag_sensitivity: 1.5,
            cooldown_ms: 3000,
        }
    }
}
