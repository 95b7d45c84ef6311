use crate::content::Swatch;
use crate::layout::Geometry;
use crate::options::CarouselOptions;
use crate::util::color::HexColor;

/// Per-card flags resolved by the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    /// Window position relative to the hero.
    pub position: i32,
    /// Whether this card is drawn enlarged.
    pub is_focal: bool,
    /// Whether tap feedback is showing.
    pub is_pressed: bool,
    /// Whether transitions are suppressed this frame.
    pub suppress_transition: bool,
}

/// A labelled color value printed at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRow {
    /// Short label, e.g. `PMS`.
    pub label: &'static str,
    /// Printed value.
    pub value: String,
}

/// Everything needed to draw one palette card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Window position relative to the hero.
    pub position: i32,
    /// Unscaled card width.
    pub width: f32,
    /// Unscaled card height.
    pub height: f32,
    /// Transform scale.
    pub scale: f32,
    /// Horizontal margin on each side.
    pub margin_x: f32,
    /// Card background.
    pub background: HexColor,
    /// Border color; transparent for non-focal cards.
    pub border: &'static str,
    /// Primary text color.
    pub text_color: &'static str,
    /// Label color.
    pub subtext_color: &'static str,
    /// Transition length, `None` while snapping.
    pub transition_ms: Option<u64>,
    /// Name split into lines.
    pub name_lines: Vec<String>,
    /// Optional icon above the name.
    pub icon: Option<String>,
    /// Color breakdown rows; HEX is always last.
    pub rows: Vec<ColorRow>,
}

impl CardView {
    /// Resolve one card.
    #[must_use]
    pub fn build(
        swatch: &Swatch,
        state: CardState,
        geometry: &Geometry,
        options: &CarouselOptions,
    ) -> Self {
        let contrast = swatch.hex.contrast();

        let mut scale = if state.is_focal { options.hero_scale } else { 1.0 };
        if state.is_pressed {
            scale *= options.press_scale;
        }

        let rows = [
            ("PMS", swatch.pms.as_ref()),
            ("CMYK", swatch.cmyk.as_ref()),
            ("RGB", swatch.rgb.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|v| ColorRow {
                label,
                value: v.clone(),
            })
        })
        .chain(std::iter::once(ColorRow {
            label: "HEX",
            value: swatch.hex.to_lower_hex(),
        }))
        .collect();

        Self {
            position: state.position,
            width: geometry.card_width,
            height: geometry.card_height,
            scale,
            margin_x: if state.is_focal { geometry.hero_margin } else { 0.0 },
            background: swatch.hex,
            border: if state.is_focal { "#FFFFFF" } else { "transparent" },
            text_color: contrast.text(),
            subtext_color: contrast.subtext(),
            transition_ms: (!state.suppress_transition).then_some(options.shift_ms),
            name_lines: swatch.name_lines().map(str::to_owned).collect(),
            icon: swatch.icon.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Breakpoint;
    use crate::options::LayoutOptions;
    use crate::util::color::{DARK_TEXT, LIGHT_SUBTEXT, LIGHT_TEXT};

    fn desktop() -> Geometry {
        Geometry::compute(Breakpoint::Desktop, 1200.0, &LayoutOptions::default())
    }

    #[test]
    fn focal_card_is_enlarged_with_margin() {
        let swatch = Swatch::new("Deep\nOlive", HexColor::rgb(0x3F, 0x3E, 0x32));
        let state = CardState {
            is_focal: true,
            ..CardState::default()
        };
        let card = CardView::build(&swatch, state, &desktop(), &CarouselOptions::default());
        assert!((card.scale - 1.4).abs() < 1e-6);
        assert_eq!(card.margin_x, 40.0);
        assert_eq!(card.border, "#FFFFFF");
        assert_eq!(card.text_color, LIGHT_TEXT);
        assert_eq!(card.subtext_color, LIGHT_SUBTEXT);
        assert_eq!(card.name_lines, ["Deep", "Olive"]);
        assert_eq!(card.transition_ms, Some(1200));
    }

    #[test]
    fn pressed_card_gets_extra_scale() {
        let swatch = Swatch::new("Paper", HexColor::WHITE);
        let state = CardState {
            is_focal: true,
            is_pressed: true,
            ..CardState::default()
        };
        let card = CardView::build(&swatch, state, &desktop(), &CarouselOptions::default());
        assert!((card.scale - 1.4 * 1.08).abs() < 1e-5);
        assert_eq!(card.text_color, DARK_TEXT);
    }

    #[test]
    fn side_card_while_snapping() {
        let mut swatch = Swatch::new("Citron", HexColor::rgb(0xE0, 0xD6, 0x23));
        swatch.pms = Some("395 C".to_owned());
        let state = CardState {
            position: -2,
            suppress_transition: true,
            ..CardState::default()
        };
        let card = CardView::build(&swatch, state, &desktop(), &CarouselOptions::default());
        assert_eq!(card.scale, 1.0);
        assert_eq!(card.margin_x, 0.0);
        assert_eq!(card.border, "transparent");
        assert_eq!(card.transition_ms, None);
        let labels: Vec<_> = card.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["PMS", "HEX"]);
        assert_eq!(card.rows[1].value, "#e0d623");
    }
}
