/// Where the carousel is in its pause → slide → snap cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No cycle step pending: not mounted, halted by a pause, or a static
    /// single-item palette.
    #[default]
    Idle,
    /// Dwelling on the hero; a slide is scheduled.
    Resting,
    /// The track is sliding one step left.
    Animating,
    /// One frame with transitions suppressed while the hero index advances
    /// and the track jumps back to its resting offset.
    Snapping,
}

/// Wakeups the carousel schedules for itself.
///
/// Cycle steps carry the cycle number they were scheduled under; a step
/// from a superseded cycle is dropped on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Dwell elapsed; begin sliding.
    SlideStart {
        /// Cycle the step belongs to.
        cycle: u64,
    },
    /// Slide transition finished; snap.
    SlideEnd {
        /// Cycle the step belongs to.
        cycle: u64,
    },
    /// First frame after the snap; re-enable transitions.
    SnapFrame {
        /// Cycle the step belongs to.
        cycle: u64,
    },
    /// Tap dwell elapsed without a second tap.
    TapResume,
    /// Pressed feedback on a tapped card expired.
    PressRelease,
    /// No resize arrived for a full debounce window.
    ResizeSettled,
}
