//! Card sizing and track centering.
//!
//! Pure: identical inputs produce bit-identical [`Geometry`].

use super::Breakpoint;
use crate::options::LayoutOptions;

/// Layout constants for one `(breakpoint, viewport width)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Breakpoint the preset was selected for.
    pub breakpoint: Breakpoint,
    /// Viewport width the offsets were computed for (sanitized, >= 0).
    pub viewport_width: f32,
    /// Card width in pixels.
    pub card_width: f32,
    /// Card height in pixels.
    pub card_height: f32,
    /// Gap between cards in pixels.
    pub card_gap: f32,
    /// `card_width + card_gap`.
    pub card_step: f32,
    /// Cards rendered on each side of the hero, including one overscan card.
    pub side_count: usize,
    /// Horizontal margin on each side of the hero card.
    pub hero_margin: f32,
    /// Track translation that centers the hero in the viewport.
    pub resting_offset: f32,
    /// Track translation at the end of a forward slide.
    pub animating_offset: f32,
}

impl Geometry {
    /// Compute layout for a breakpoint and viewport width.
    ///
    /// Non-finite or negative widths are treated as zero; the result is
    /// always finite so a widget can render before its first real layout
    /// pass and correct itself on the next resize.
    #[must_use]
    pub fn compute(
        breakpoint: Breakpoint,
        viewport_width: f32,
        layout: &LayoutOptions,
    ) -> Self {
        let viewport_width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };

        let preset = layout.preset(breakpoint);
        let card_step = preset.step();
        let side_count = if card_step > 0.0 {
            (viewport_width / (2.0 * card_step)).ceil() as usize + 1
        } else {
            1
        };

        let hero_margin = if layout.base_card_width > 0.0 {
            layout.base_hero_margin * preset.width / layout.base_card_width
        } else {
            layout.base_hero_margin
        };

        let hero_center =
            side_count as f32 * card_step + hero_margin + preset.width / 2.0;
        let resting_offset = viewport_width / 2.0 - hero_center;

        Self {
            breakpoint,
            viewport_width,
            card_width: preset.width,
            card_height: preset.height,
            card_gap: preset.gap,
            card_step,
            side_count,
            hero_margin,
            resting_offset,
            animating_offset: resting_offset - card_step,
        }
    }

    /// Height of the track box: the scaled hero plus padding.
    #[must_use]
    pub fn track_height(&self, hero_scale: f32, padding: f32) -> f32 {
        (self.card_height * hero_scale).ceil() + padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_at_1200() {
        let g = Geometry::compute(
            Breakpoint::Desktop,
            1200.0,
            &LayoutOptions::default(),
        );
        assert_eq!(g.card_step, 220.0);
        // ceil(1200 / 440) + 1 = 3 + 1
        assert_eq!(g.side_count, 4);
        assert_eq!(g.hero_margin, 40.0);
        // 600 - (4 * 220 + 40 + 100)
        assert_eq!(g.resting_offset, -420.0);
        assert_eq!(g.animating_offset, -640.0);
    }

    #[test]
    fn hero_margin_scales_with_card_width() {
        let layout = LayoutOptions::default();
        let phone = Geometry::compute(Breakpoint::Phone, 375.0, &layout);
        let tablet = Geometry::compute(Breakpoint::Tablet, 800.0, &layout);
        assert_eq!(phone.hero_margin, 30.0);
        assert_eq!(tablet.hero_margin, 36.0);
        assert_eq!(phone.card_step, 162.0);
        assert_eq!(tablet.card_gap, 20.0);
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let layout = LayoutOptions::default();
        for width in [0.0, 333.3, 1023.0, 2560.0] {
            let a = Geometry::compute(Breakpoint::Tablet, width, &layout);
            let b = Geometry::compute(Breakpoint::Tablet, width, &layout);
            assert_eq!(a.resting_offset.to_bits(), b.resting_offset.to_bits());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn degenerate_widths_stay_finite() {
        let layout = LayoutOptions::default();
        for width in [0.0, -50.0, f32::NAN, f32::INFINITY] {
            let g = Geometry::compute(Breakpoint::Desktop, width, &layout);
            assert_eq!(g.viewport_width, 0.0);
            assert_eq!(g.side_count, 1);
            assert!(g.resting_offset.is_finite());
        }
    }

    #[test]
    fn centering_puts_hero_mid_viewport() {
        let layout = LayoutOptions::default();
        let g = Geometry::compute(Breakpoint::Desktop, 1440.0, &layout);
        let hero_left = g.resting_offset
            + g.side_count as f32 * g.card_step
            + g.hero_margin;
        assert!((hero_left + g.card_width / 2.0 - 720.0).abs() < 1e-3);
    }

    #[test]
    fn track_height_leaves_room_for_scaled_hero() {
        let g = Geometry::compute(
            Breakpoint::Desktop,
            1200.0,
            &LayoutOptions::default(),
        );
        assert_eq!(g.track_height(1.4, 20.0), 468.0);
    }
}
