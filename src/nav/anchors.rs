use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;

/// Logical name of a page section, e.g. `"contact"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap a section name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The section name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Section id to scroll target map.
///
/// Views register their targets as they mount and drop them on unmount;
/// navigation resolves a section by id instead of searching rendered text.
#[derive(Debug, Clone)]
pub struct AnchorRegistry<T> {
    targets: FxHashMap<SectionId, T>,
}

impl<T> AnchorRegistry<T> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: FxHashMap::default(),
        }
    }

    /// Register `target` under `id`, returning the target it replaced.
    pub fn register(&mut self, id: impl Into<String>, target: T) -> Option<T> {
        let id = SectionId::new(id);
        log::trace!("anchor {id} registered");
        self.targets.insert(id, target)
    }

    /// Remove the target registered under `id`.
    pub fn unregister(&mut self, id: &str) -> Option<T> {
        self.targets.remove(id)
    }

    /// Target registered under `id`.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&T> {
        let target = self.targets.get(id);
        if target.is_none() {
            log::debug!("no anchor registered for {id:?}");
        }
        target
    }

    /// Number of registered anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no anchors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&SectionId> {
        let mut ids: Vec<_> = self.targets.keys().collect();
        ids.sort();
        ids
    }
}

impl<T> Default for AnchorRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
