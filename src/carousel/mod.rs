//! Auto-advancing hero carousel.
//!
//! The carousel cycles `Resting → Animating → Snapping → Resting`:
//!
//! - **Resting**: the hero sits centered for the pause duration.
//! - **Animating**: the track slides one card step left over the shift
//!   duration; the incoming card (window position 1) becomes focal.
//! - **Snapping**: the hero index advances, the track jumps back to its
//!   resting offset with transitions suppressed, and one frame later
//!   transitions are re-enabled.
//!
//! Hover, tap, resize and host pauses are tracked as independent
//! [`PauseReasons`](crate::gesture::PauseReasons). A pause only cancels a
//! pending dwell; an in-flight slide always finishes and snaps, then the
//! cycle halts until every reason is lifted.

mod controller;
mod event;

pub use controller::CarouselController;
pub use event::{CarouselEvent, Phase};
