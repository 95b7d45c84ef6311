/// Routes whose scroll position survives a round trip to a detail page.
const RESTORABLE: [&str; 2] = ["/", "/work"];
/// Prefix of detail routes.
const DETAIL_PREFIX: &str = "/project/";

fn is_restorable(path: &str) -> bool {
    RESTORABLE.contains(&path)
}

fn is_detail(path: &str) -> bool {
    path.starts_with(DETAIL_PREFIX)
}

#[derive(Debug, Clone, PartialEq)]
struct SavedScroll {
    path: String,
    scroll_y: f32,
}

/// Scroll memory across navigations.
///
/// Leaving a listing route (`/` or `/work`) for a project page records the
/// listing's scroll position; coming back from a project page to that same
/// listing hands the position out once and forgets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    current: Option<String>,
    saved: Option<SavedScroll>,
}

impl SessionContext {
    /// Fresh context with no current route.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route most recently navigated to.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a scroll position is waiting to be restored.
    #[must_use]
    pub fn has_saved(&self) -> bool {
        self.saved.is_some()
    }

    /// Record `scroll_y` for the current route ahead of a navigation, e.g.
    /// when a project link is clicked. Ignored outside listing routes.
    pub fn remember(&mut self, scroll_y: f32) {
        if let Some(path) = self.current.as_deref().filter(|p| is_restorable(p)) {
            self.saved = Some(SavedScroll {
                path: path.to_owned(),
                scroll_y,
            });
        }
    }

    /// Move to `to`. `scroll_y` is the scroll position of the page being
    /// left. Returns the position to restore on the new page, if any.
    pub fn navigate(&mut self, to: &str, scroll_y: f32) -> Option<f32> {
        let from = self.current.replace(to.to_owned());
        let from = from.as_deref().unwrap_or_default();

        if is_restorable(from) && is_detail(to) {
            log::debug!("saving scroll {scroll_y} for {from}");
            self.saved = Some(SavedScroll {
                path: from.to_owned(),
                scroll_y,
            });
            return None;
        }

        let returning = is_restorable(to) && is_detail(from);
        if returning && self.saved.as_ref().is_some_and(|s| s.path == to) {
            let restored = self.saved.take().map(|s| s.scroll_y);
            log::debug!("restoring scroll {restored:?} on {to}");
            return restored;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_restores_once() {
        let mut session = SessionContext::new();
        assert_eq!(session.navigate("/", 0.0), None);
        assert_eq!(session.navigate("/project/3", 840.0), None);
        assert!(session.has_saved());

        assert_eq!(session.navigate("/", 0.0), Some(840.0));
        assert!(!session.has_saved());

        let _ = session.navigate("/project/3", 0.0);
        assert_eq!(session.navigate("/", 0.0), Some(0.0));
    }

    #[test]
    fn restores_only_on_matching_route() {
        let mut session = SessionContext::new();
        let _ = session.navigate("/work", 0.0);
        let _ = session.navigate("/project/1", 300.0);
        assert_eq!(session.navigate("/", 0.0), None);
        assert!(session.has_saved());
    }

    #[test]
    fn other_routes_do_not_save() {
        let mut session = SessionContext::new();
        let _ = session.navigate("/about", 0.0);
        let _ = session.navigate("/project/1", 300.0);
        assert!(!session.has_saved());

        session.remember(120.0);
        assert!(!session.has_saved());
    }

    #[test]
    fn link_click_remembers_listing_scroll() {
        let mut session = SessionContext::new();
        let _ = session.navigate("/work", 0.0);
        session.remember(512.0);
        let _ = session.navigate("/project/9", 999.0);
        assert_eq!(session.navigate("/work", 0.0), Some(999.0));
        assert_eq!(session.current_path(), Some("/work"));
    }
}
