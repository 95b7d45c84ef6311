//! Page-level navigation state the widgets' host page needs.
//!
//! Both types are plain owned values passed to the views that use them,
//! so each page instance has its own and tests can drive them directly.

mod anchors;
mod session;

pub use anchors::{AnchorRegistry, SectionId};
pub use session::SessionContext;
