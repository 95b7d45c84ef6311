use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::Breakpoint;

/// Fixed card dimensions for one breakpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct CardPreset {
    /// Card width in pixels.
    pub width: f32,
    /// Card height in pixels.
    pub height: f32,
    /// Gap between neighbouring cards in pixels.
    pub gap: f32,
}

impl CardPreset {
    /// Distance from one card's left edge to the next.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.width + self.gap
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Breakpoint limits and per-breakpoint card presets.
pub struct LayoutOptions {
    /// Card preset for phones.
    #[schemars(skip)]
    pub phone: CardPreset,
    /// Card preset for tablets.
    #[schemars(skip)]
    pub tablet: CardPreset,
    /// Card preset for desktops.
    #[schemars(skip)]
    pub desktop: CardPreset,
    /// Card width the hero margin is specified against.
    #[schemars(skip)]
    pub base_card_width: f32,
    /// Hero margin at `base_card_width`; scales with the card width.
    #[schemars(title = "Hero Margin", range(min = 0.0, max = 120.0), extend("step" = 1.0))]
    pub base_hero_margin: f32,
    /// Widest viewport still treated as a phone.
    #[schemars(title = "Phone Max Width", range(min = 240.0, max = 1024.0))]
    pub phone_max: f32,
    /// Widest viewport still treated as a tablet.
    #[schemars(title = "Tablet Max Width", range(min = 480.0, max = 2048.0))]
    pub tablet_max: f32,
    /// Vertical room added around the scaled hero inside the track.
    #[schemars(title = "Track Padding", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub track_padding: f32,
}

impl LayoutOptions {
    /// Card preset for a breakpoint.
    #[must_use]
    pub fn preset(&self, breakpoint: Breakpoint) -> CardPreset {
        match breakpoint {
            Breakpoint::Phone => self.phone,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            phone: CardPreset {
                width: 150.0,
                height: 240.0,
                gap: 12.0,
            },
            tablet: CardPreset {
                width: 180.0,
                height: 280.0,
                gap: 20.0,
            },
            desktop: CardPreset {
                width: 200.0,
                height: 320.0,
                gap: 20.0,
            },
            base_card_width: 200.0,
            base_hero_margin: 40.0,
            phone_max: 480.0,
            tablet_max: 1023.0,
            track_padding: 20.0,
        }
    }
}
