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

//! FLIP reorder animations and drag-to-reorder for keyed lists.
//!
//! Glidelist keeps a list of uniquely keyed items in a visual order and
//! animates every order change with the FLIP technique: record where each
//! item was (First), let the host lay the list out again (Last), pin moved
//! items back at their old spot with an instant transform (Invert), then
//! release them with a timed transition (Play). Dragging an item over
//! another swaps the two.
//!
//! # Key entry points
//!
//! - [`engine::ReorderController`] - owns the order, snapshot, locks and
//!   drag session, and reacts to input
//! - [`host::RenderHost`] / [`host::FrameScheduler`] - what a UI layer must
//!   provide: layout, measurement, transforms, frame and timer callbacks
//! - [`host::SimulatedHost`] - deterministic in-memory host for tests and
//!   headless use
//! - [`options::Options`] - runtime configuration (timing, easing, drag
//!   behavior, initial items) with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's single event loop. Deferred work is plain
//! data: the controller hands the host a [`animation::Task`] to run at the
//! next paint or after a delay, and the host passes it back to
//! [`engine::ReorderController::run_task`] when it fires. Each FLIP step
//! schedules the next one from inside its own callback, so invert and play
//! always land in separate frames.

pub mod animation;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod item;
pub mod layout;
pub mod options;
pub mod order;
pub mod util;

pub use engine::ReorderController;
pub use error::GlideError;
pub use item::ItemId;
pub use order::ItemOrder;
