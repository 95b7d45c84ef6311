use serde::{Deserialize, Serialize};

use crate::options::LayoutOptions;

/// Discrete viewport-width category used to pick card presets and gesture
/// policy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Narrow touch screens.
    Phone,
    /// Mid-size screens; accept both hover and tap.
    Tablet,
    /// Wide pointer-driven screens.
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width (inclusive upper limits).
    #[must_use]
    pub fn from_width(width: f32, layout: &LayoutOptions) -> Self {
        if width <= layout.phone_max {
            Self::Phone
        } else if width <= layout.tablet_max {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Whether hover gestures (pointer enter/leave) drive pausing.
    #[must_use]
    pub const fn accepts_hover(self) -> bool {
        matches!(self, Self::Tablet | Self::Desktop)
    }

    /// Whether tap gestures drive pausing.
    #[must_use]
    pub const fn accepts_tap(self) -> bool {
        matches!(self, Self::Phone | Self::Tablet)
    }
}

/// Tracks the current breakpoint and reports only transitions, the way a
/// media-query listener fires only when a query flips.
#[derive(Debug, Clone)]
pub struct BreakpointObserver {
    layout: LayoutOptions,
    current: Option<Breakpoint>,
}

impl BreakpointObserver {
    /// Observer with no width seen yet.
    #[must_use]
    pub fn new(layout: LayoutOptions) -> Self {
        Self {
            layout,
            current: None,
        }
    }

    /// Last classified breakpoint, if any width has been observed.
    #[must_use]
    pub fn current(&self) -> Option<Breakpoint> {
        self.current
    }

    /// Feed a viewport width; returns the new breakpoint when it changed
    /// (always on the first observation).
    pub fn observe(&mut self, width: f32) -> Option<Breakpoint> {
        let next = Breakpoint::from_width(width, &self.layout);
        if self.current == Some(next) {
            return None;
        }
        log::debug!("breakpoint {:?} -> {next:?} at {width}px", self.current);
        self.current = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_inclusive() {
        let layout = LayoutOptions::default();
        assert_eq!(Breakpoint::from_width(0.0, &layout), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(480.0, &layout), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(481.0, &layout), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0, &layout), Breakpoint::Tablet);
        assert_eq!(
            Breakpoint::from_width(1024.0, &layout),
            Breakpoint::Desktop
        );
    }

    #[test]
    fn gesture_policy_per_device_class() {
        assert!(!Breakpoint::Phone.accepts_hover());
        assert!(Breakpoint::Phone.accepts_tap());
        assert!(Breakpoint::Tablet.accepts_hover());
        assert!(Breakpoint::Tablet.accepts_tap());
        assert!(Breakpoint::Desktop.accepts_hover());
        assert!(!Breakpoint::Desktop.accepts_tap());
    }

    #[test]
    fn observer_reports_only_changes() {
        let mut observer = BreakpointObserver::new(LayoutOptions::default());
        assert_eq!(observer.observe(1400.0), Some(Breakpoint::Desktop));
        assert_eq!(observer.observe(1200.0), None);
        assert_eq!(observer.observe(800.0), Some(Breakpoint::Tablet));
        assert_eq!(observer.observe(400.0), Some(Breakpoint::Phone));
        assert_eq!(observer.current(), Some(Breakpoint::Phone));
    }
}
