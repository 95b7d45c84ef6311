//! Stateless view models.
//!
//! Each builder takes fully resolved inputs (an item, geometry, controller
//! flags) and returns plain data a renderer can map onto markup. Nothing
//! here holds state between frames.

mod card;
mod tile;
mod track;

pub use card::{CardState, CardView, ColorRow};
pub use tile::{GalleryView, TileView};
pub use track::TrackView;
