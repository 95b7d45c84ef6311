//! Breakpoints, card geometry and the visible card window.
//!
//! Everything here is a pure function of its inputs. The breakpoint itself
//! is normally supplied by the host (a media-query listener); the
//! [`BreakpointObserver`] is provided for hosts that only know the width.

mod breakpoint;
mod geometry;
mod window;

pub use breakpoint::{Breakpoint, BreakpointObserver};
pub use geometry::Geometry;
pub use window::{visible_window, wrap_index, Slot};

/// Viewport facts a widget needs to lay itself out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f32,
    /// Current breakpoint category.
    pub breakpoint: Breakpoint,
}

impl Viewport {
    /// Viewport with an explicit breakpoint.
    #[must_use]
    pub const fn new(width: f32, breakpoint: Breakpoint) -> Self {
        Self { width, breakpoint }
    }
}
