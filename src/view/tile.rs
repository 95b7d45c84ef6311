use crate::content::GalleryLayout;
use crate::gallery::ScrollDriver;

/// One positioned image inside the doubled strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    /// Image URL.
    pub image: String,
    /// Left edge within the doubled strip.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Tile width.
    pub width: f32,
    /// Tile height.
    pub height: f32,
    /// 0 for the original copy, 1 for the seam copy.
    pub copy: usize,
}

/// One frame of the filmstrip.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    /// Horizontal scroll position to apply to the strip container.
    pub scroll_left: f32,
    /// Width of the doubled strip.
    pub strip_width: f32,
    /// Tiles of both copies.
    pub tiles: Vec<TileView>,
}

impl GalleryView {
    /// Resolve the strip for the driver's current offset.
    #[must_use]
    pub fn build(layout: &GalleryLayout, driver: &ScrollDriver) -> Self {
        let tiles = layout
            .seamless_tiles()
            .map(|(copy, tile, shift)| TileView {
                image: tile.image.clone(),
                left: tile.left + shift,
                top: tile.top,
                width: tile.width,
                height: tile.height,
                copy,
            })
            .collect();
        Self {
            scroll_left: driver.offset(),
            strip_width: layout.content_width * 2.0,
            tiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GalleryOptions;

    #[test]
    fn doubles_the_strip() {
        let layout = GalleryLayout::default();
        let mut driver = ScrollDriver::new(layout.content_width, GalleryOptions::default());
        driver.sync_native_offset(10.0);
        let view = GalleryView::build(&layout, &driver);

        assert_eq!(view.strip_width, 5084.0);
        assert_eq!(view.scroll_left, 10.0);
        assert_eq!(view.tiles.len(), 16);
        assert_eq!(view.tiles[8].left, 2542.0);
        assert_eq!(view.tiles[8].copy, 1);
    }
}
