//! Shared utilities: color parsing and contrast, easing curves.

pub mod color;
pub mod easing;
