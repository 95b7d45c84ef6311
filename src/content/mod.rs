//! Data handed to the widgets by the host page.
//!
//! Colors are validated once here, while deserializing, so nothing
//! downstream deals with raw hex strings.

mod gallery;
mod palette;

pub use gallery::{GalleryLayout, GalleryTile};
pub use palette::{Palette, Swatch};
