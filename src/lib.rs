// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Headless core for showcase widgets: an auto-advancing hero carousel and a
//! continuously scrolling filmstrip gallery.
//!
//! Nothing in this crate touches a DOM or a window. Widgets are explicit
//! state machines driven by an injectable [`schedule::Scheduler`], so the
//! same controller runs under browser timers, a wall-clock runner, or a
//! deterministic virtual clock in tests.
//!
//! # Key entry points
//!
//! - [`carousel::CarouselController`] - pause / slide / snap cycle with
//!   hover, tap and resize arbitration
//! - [`gallery::ScrollDriver`] - frame-driven filmstrip with drag and wheel
//!   pausing
//! - [`layout::Geometry`] - card sizing and track centering per breakpoint
//! - [`view`] - stateless view models for cards, tracks and tiles
//! - [`options::Options`] - timing and layout configuration with TOML
//!   presets
//!
//! # Architecture
//!
//! Controllers implement [`schedule::Reactor`]. Every delayed step they need
//! is requested through the scheduler and comes back as an event; every
//! request yields a [`schedule::TimerHandle`] the controller keeps so it can
//! cancel the step on pause, restart or disposal.

pub mod carousel;
pub mod content;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod layout;
pub mod nav;
pub mod options;
pub mod schedule;
pub mod util;
pub mod view;

pub use error::VitrineError;
