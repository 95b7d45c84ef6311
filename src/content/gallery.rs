use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// One absolutely positioned image in the filmstrip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryTile {
    /// Image URL.
    pub image: String,
    /// Tile width in pixels.
    pub width: f32,
    /// Tile height in pixels.
    pub height: f32,
    /// Distance from the top of the strip.
    pub top: f32,
    /// Distance from the left edge of one content copy.
    pub left: f32,
}

impl GalleryTile {
    fn placeholder(width: f32, height: f32, top: f32, left: f32) -> Self {
        Self {
            image: "/placeholder.jpg".to_owned(),
            width,
            height,
            top,
            left,
        }
    }

    /// Right edge relative to the content copy.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// One copy of the filmstrip content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryLayout {
    /// Tiles of a single copy.
    pub tiles: Vec<GalleryTile>,
    /// Width of a single copy; the scroll offset wraps at this value.
    pub content_width: f32,
}

impl GalleryLayout {
    /// Parse a layout from JSON. A missing `content_width` is derived from
    /// the rightmost tile.
    pub fn from_json(content: &str) -> Result<Self, VitrineError> {
        #[derive(Deserialize)]
        struct Raw {
            tiles: Vec<GalleryTile>,
            content_width: Option<f32>,
        }

        let raw: Raw = serde_json::from_str(content)
            .map_err(|e| VitrineError::Content(e.to_string()))?;
        let content_width = raw
            .content_width
            .unwrap_or_else(|| raw.tiles.iter().map(GalleryTile::right).fold(0.0, f32::max));
        if !content_width.is_finite() || content_width < 0.0 {
            return Err(VitrineError::Content(format!(
                "content_width must be a non-negative number, got {content_width}"
            )));
        }
        Ok(Self {
            tiles: raw.tiles,
            content_width,
        })
    }

    /// Load a layout JSON file.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Every tile twice: the original copy, then a second copy shifted right
    /// by `content_width` so the wrap seam is invisible.
    pub fn seamless_tiles(&self) -> impl Iterator<Item = (usize, &GalleryTile, f32)> {
        [0.0, self.content_width].into_iter().enumerate().flat_map(
            move |(copy, shift)| self.tiles.iter().map(move |tile| (copy, tile, shift)),
        )
    }
}

impl Default for GalleryLayout {
    fn default() -> Self {
        let tile = GalleryTile::placeholder;
        Self {
            tiles: vec![
                tile(378.0, 378.0, 0.0, 0.0),
                tile(378.0, 378.0, 378.0, 0.0),
                tile(583.0, 756.0, 0.0, 378.0),
                tile(378.0, 378.0, 0.0, 961.0),
                tile(378.0, 378.0, 378.0, 961.0),
                tile(825.0, 756.0, 0.0, 1339.0),
                tile(378.0, 378.0, 0.0, 2164.0),
                tile(378.0, 378.0, 378.0, 2164.0),
            ],
            content_width: 2542.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_spans_content_width() {
        let layout = GalleryLayout::default();
        assert_eq!(layout.tiles.len(), 8);
        let right = layout.tiles.iter().map(GalleryTile::right).fold(0.0, f32::max);
        assert_eq!(right, layout.content_width);
    }

    #[test]
    fn seamless_tiles_duplicate_each_copy() {
        let layout = GalleryLayout::default();
        let tiles: Vec<_> = layout.seamless_tiles().collect();
        assert_eq!(tiles.len(), 16);
        let (copy, first_dup, shift) = tiles[8];
        assert_eq!(copy, 1);
        assert_eq!(shift, 2542.0);
        assert_eq!(first_dup, &layout.tiles[0]);
    }

    #[test]
    fn content_width_derived_when_missing() {
        let json = r#"{ "tiles": [
            { "image": "a.jpg", "width": 100, "height": 50, "top": 0, "left": 0 },
            { "image": "b.jpg", "width": 80, "height": 50, "top": 0, "left": 100 }
        ] }"#;
        let layout = GalleryLayout::from_json(json).unwrap();
        assert_eq!(layout.content_width, 180.0);
    }

    #[test]
    fn negative_width_rejected() {
        let json = r#"{ "tiles": [], "content_width": -5 }"#;
        assert!(matches!(
            GalleryLayout::from_json(json),
            Err(VitrineError::Content(_))
        ));
    }
}
