//! Continuously scrolling media filmstrip.
//!
//! [`ScrollDriver`] owns the scroll offset; rendering the duplicated strip
//! is left to [`view::GalleryView`](crate::view::GalleryView).

mod driver;

pub use driver::{GalleryEvent, ScrollDriver};
