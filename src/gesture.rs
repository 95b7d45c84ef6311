//! Pause bookkeeping shared by the carousel and the gallery.

use bitflags::bitflags;

bitflags! {
    /// Why a widget is currently paused.
    ///
    /// Each gesture family sets and clears only its own flag, so a resize
    /// settling does not resume a widget the cursor is still hovering.
    /// The widget runs only while the set is empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PauseReasons: u8 {
        /// Pointer is over the focal card.
        const HOVER    = 1 << 0;
        /// Focal card was tapped; auto-resumes after the tap dwell.
        const TAP      = 1 << 1;
        /// Viewport is being resized; resumes once the debounce settles.
        const RESIZE   = 1 << 2;
        /// Pointer is held down dragging the gallery.
        const DRAG     = 1 << 3;
        /// Waiting out the post-drag / post-wheel cooldown.
        const COOLDOWN = 1 << 4;
        /// Host asked for a pause (e.g. the page became hidden).
        const EXTERNAL = 1 << 5;
    }
}

impl PauseReasons {
    /// Whether any pause reason is active.
    #[must_use]
    pub const fn is_paused(self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_while_any_reason_is_set() {
        let mut reasons = PauseReasons::empty();
        assert!(!reasons.is_paused());

        reasons.insert(PauseReasons::HOVER | PauseReasons::RESIZE);
        reasons.remove(PauseReasons::RESIZE);
        assert!(reasons.is_paused());

        reasons.remove(PauseReasons::HOVER);
        assert!(!reasons.is_paused());
    }
}
