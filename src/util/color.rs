//! Validated hex colors and luminance-based contrast selection.
//!
//! Colors enter the crate once, at the content boundary, as [`HexColor`].
//! Everything downstream (card text, section titles) asks the color for its
//! [`Contrast`] instead of re-parsing strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Relative luminance below which a background counts as dark.
pub const LUMINANCE_THRESHOLD: f32 = 0.45;

/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";
/// Secondary text color used on dark backgrounds.
pub const LIGHT_SUBTEXT: &str = "rgba(255,255,255,0.7)";
/// Text color used on light backgrounds.
pub const DARK_TEXT: &str = "#2D2D2A";
/// Secondary text color used on light backgrounds.
pub const DARK_SUBTEXT: &str = "rgba(45,45,42,0.6)";

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string was empty (or only a `#`).
    Empty,
    /// Wrong number of hex digits (3 or 6 are accepted).
    Length(usize),
    /// A character that is not a hex digit.
    Digit(char),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::Length(n) => {
                write!(f, "expected 3 or 6 hex digits, found {n}")
            }
            Self::Digit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Which text palette reads well on a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    /// Light text, for dark backgrounds.
    Light,
    /// Dark text, for light backgrounds.
    Dark,
}

impl Contrast {
    /// Primary text color.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Light => LIGHT_TEXT,
            Self::Dark => DARK_TEXT,
        }
    }

    /// Secondary (dimmed) text color.
    #[must_use]
    pub const fn subtext(self) -> &'static str {
        match self {
            Self::Light => LIGHT_SUBTEXT,
            Self::Dark => DARK_SUBTEXT,
        }
    }

    /// Contrast for a raw color string, falling back to dark text when the
    /// string does not parse.
    #[must_use]
    pub fn for_str(raw: &str) -> Self {
        match raw.parse::<HexColor>() {
            Ok(color) => color.contrast(),
            Err(e) => {
                log::warn!("unreadable color {raw:?} ({e}), using dark text");
                Self::Dark
            }
        }
    }
}

/// An sRGB color parsed from `#RRGGBB` (or `#RGB`) notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build a color from channel bytes.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel bytes as `[r, g, b]`.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let digits = raw.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }

        let mut nibbles = Vec::with_capacity(6);
        for c in digits.chars() {
            let value = c.to_digit(16).ok_or(ColorError::Digit(c))?;
            nibbles.push(value as u8);
        }

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
            }
            other => Err(ColorError::Length(other.len())),
        }
    }

    /// Relative luminance with ITU-R BT.709 weights over the normalized
    /// (gamma-encoded) channels.
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        let [r, g, b] = self.channels().map(|c| f32::from(c) / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Whether the color is dark enough to need light text.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < LUMINANCE_THRESHOLD
    }

    /// Text palette that reads well on this color.
    #[must_use]
    pub fn contrast(self) -> Contrast {
        if self.is_dark() {
            Contrast::Light
        } else {
            Contrast::Dark
        }
    }

    /// `#rrggbb` in lowercase, the form shown on swatch cards.
    #[must_use]
    pub fn to_lower_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_gets_light_text_and_white_gets_dark_text() {
        assert_eq!(HexColor::BLACK.contrast(), Contrast::Light);
        assert_eq!(HexColor::BLACK.contrast().text(), "#FFFFFF");
        assert_eq!(HexColor::WHITE.contrast(), Contrast::Dark);
        assert_eq!(HexColor::WHITE.contrast().text(), "#2D2D2A");
    }

    #[test]
    fn threshold_sits_at_point_four_five() {
        // Grays have luminance v / 255; 0.45 * 255 = 114.75.
        let below: HexColor = "#727272".parse().unwrap();
        let above: HexColor = "#737373".parse().unwrap();
        assert!(below.relative_luminance() < LUMINANCE_THRESHOLD);
        assert!(above.relative_luminance() > LUMINANCE_THRESHOLD);
        assert_eq!(below.contrast(), Contrast::Light);
        assert_eq!(above.contrast(), Contrast::Dark);
    }

    #[test]
    fn brand_colors_pick_expected_text() {
        // Olive card reads with light text, mustard with dark.
        assert!(HexColor::parse("#3F3E32").unwrap().is_dark());
        assert!(!HexColor::parse("#E0D623").unwrap().is_dark());
    }

    #[test]
    fn parses_short_and_unprefixed_forms() {
        assert_eq!(HexColor::parse("fff").unwrap(), HexColor::WHITE);
        assert_eq!(
            HexColor::parse(" #0a0B0c ").unwrap(),
            HexColor::rgb(0x0A, 0x0B, 0x0C)
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(HexColor::parse("#"), Err(ColorError::Empty));
        assert_eq!(HexColor::parse("#12345"), Err(ColorError::Length(5)));
        assert_eq!(HexColor::parse("#12345g"), Err(ColorError::Digit('g')));
    }

    #[test]
    fn malformed_strings_fail_soft_to_dark_text() {
        assert_eq!(Contrast::for_str("not a color"), Contrast::Dark);
        assert_eq!(Contrast::for_str("#000"), Contrast::Light);
    }

    #[test]
    fn display_and_lowercase_forms() {
        let c = HexColor::rgb(0xED, 0xD9, 0xD6);
        assert_eq!(c.to_string(), "#EDD9D6");
        assert_eq!(c.to_lower_hex(), "#edd9d6");
    }

    #[test]
    fn serde_validates_at_the_boundary() {
        let ok: HexColor = serde_json::from_str("\"#4A3F35\"").unwrap();
        assert_eq!(ok, HexColor::rgb(0x4A, 0x3F, 0x35));
        assert!(serde_json::from_str::<HexColor>("\"#zz0000\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"#4A3F35\"");
    }
}
