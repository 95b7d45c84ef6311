use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Carousel", inline)]
#[serde(default)]
/// Timing and scale policy for the hero carousel.
pub struct CarouselOptions {
    /// Dwell on a hero before the next slide, in milliseconds.
    #[schemars(title = "Dwell (ms)", range(min = 0, max = 10000))]
    pub pause_ms: u64,
    /// Duration of one slide transition, in milliseconds.
    #[schemars(title = "Slide (ms)", range(min = 0, max = 5000))]
    pub shift_ms: u64,
    /// Shortened dwell used for the first slide after a resume.
    #[schemars(title = "Resume Delay (ms)", range(min = 0, max = 5000))]
    pub resume_delay_ms: u64,
    /// How long a tap keeps the carousel paused before resuming on its own.
    #[schemars(title = "Tap Pause (ms)", range(min = 0, max = 20000))]
    pub tap_pause_ms: u64,
    /// How long the pressed scale boost stays on a tapped card.
    #[schemars(title = "Press Feedback (ms)", range(min = 0, max = 2000))]
    pub press_ms: u64,
    /// Quiet period after the last resize before geometry is recomputed.
    #[schemars(title = "Resize Debounce (ms)", range(min = 0, max = 2000))]
    pub resize_debounce_ms: u64,
    /// Scale applied to the hero card.
    #[schemars(title = "Hero Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub hero_scale: f32,
    /// Extra scale multiplied in while a card is pressed.
    #[schemars(title = "Press Scale", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub press_scale: f32,
    /// Curve used when the track is interpolated outside CSS.
    #[schemars(title = "Slide Easing")]
    pub slide_easing: EasingFunction,
}

impl CarouselOptions {
    /// Dwell between slides.
    #[must_use]
    pub fn pause_duration(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Slide transition length.
    #[must_use]
    pub fn shift_duration(&self) -> Duration {
        Duration::from_millis(self.shift_ms)
    }

    /// Dwell used right after a resume.
    #[must_use]
    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    /// Auto-resume delay after a tap pause.
    #[must_use]
    pub fn tap_pause(&self) -> Duration {
        Duration::from_millis(self.tap_pause_ms)
    }

    /// Pressed feedback length.
    #[must_use]
    pub fn press_duration(&self) -> Duration {
        Duration::from_millis(self.press_ms)
    }

    /// Resize debounce window.
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            pause_ms: 1200,
            shift_ms: 1200,
            resume_delay_ms: 200,
            tap_pause_ms: 3000,
            press_ms: 200,
            resize_debounce_ms: 250,
            hero_scale: 1.4,
            press_scale: 1.08,
            slide_easing: EasingFunction::EaseInOut,
        }
    }
}
