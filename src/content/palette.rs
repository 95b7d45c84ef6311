use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineError;
use crate::util::color::HexColor;

/// One color card in the palette carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Display name; `\n` separates lines.
    pub name: String,
    /// Card background.
    pub hex: HexColor,
    /// Pantone reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pms: Option<String>,
    /// CMYK breakdown, as printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmyk: Option<String>,
    /// RGB breakdown, as printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    /// Optional icon image URL shown above the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Swatch {
    /// Swatch with only a name and a color.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            name: name.into(),
            hex,
            pms: None,
            cmyk: None,
            rgb: None,
            icon: None,
        }
    }

    /// Name split into display lines.
    pub fn name_lines(&self) -> impl Iterator<Item = &str> {
        self.name.split('\n')
    }
}

/// Ordered backing sequence for a palette carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Heading shown above the carousel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Swatches in display order. May be empty.
    #[serde(default)]
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// Parse a palette from JSON. Every `hex` is validated.
    pub fn from_json(content: &str) -> Result<Self, VitrineError> {
        let palette: Self = serde_json::from_str(content)
            .map_err(|e| VitrineError::Content(e.to_string()))?;
        log::debug!(
            "palette {:?} with {} swatches",
            palette.title,
            palette.swatches.len()
        );
        Ok(palette)
    }

    /// Load a palette JSON file.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of swatches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Swatch at `index`, wrapping around the sequence. `None` when empty.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> Option<&Swatch> {
        if self.swatches.is_empty() {
            return None;
        }
        self.swatches.get(index % self.swatches.len())
    }

    /// Brand palette used by the simulator and the demo page.
    #[must_use]
    pub fn brand() -> Self {
        let swatch = |name: &str, hex: HexColor, pms: &str, cmyk: &str| {
            let [r, g, b] = hex.channels();
            Swatch {
                pms: Some(pms.to_owned()),
                cmyk: Some(cmyk.to_owned()),
                rgb: Some(format!("{r}, {g}, {b}")),
                ..Swatch::new(name, hex)
            }
        };
        let hex = HexColor::rgb;
        Self {
            title: Some("Color Palette".to_owned()),
            swatches: vec![
                swatch("Deep\nOlive", hex(0x3F, 0x3E, 0x32), "5605 C", "0, 2, 21, 75"),
                swatch("Citron", hex(0xE0, 0xD6, 0x23), "395 C", "0, 4, 84, 12"),
                swatch("Blush\nStone", hex(0xED, 0xD9, 0xD6), "7604 C", "0, 8, 10, 7"),
                swatch("Charcoal", hex(0x2D, 0x2D, 0x2A), "Black 7 C", "0, 0, 7, 82"),
                swatch("Warm\nGrey", hex(0x8B, 0x89, 0x80), "403 C", "0, 1, 8, 45"),
                swatch("Bark", hex(0x4A, 0x3F, 0x35), "4625 C", "0, 15, 28, 71"),
                swatch("Linen", hex(0xEA, 0xE4, 0xDA), "9224 C", "0, 3, 7, 8"),
                swatch("Paper", HexColor::WHITE, "White", "0, 0, 0, 0"),
            ],
        }
    }
}
