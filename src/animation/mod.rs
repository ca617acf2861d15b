//! FLIP transition engine and the pieces it coordinates.
//!
//! After every layout change the [`FlipEngine`] compares the previous
//! [`PositionSnapshot`](crate::layout::PositionSnapshot) with a fresh
//! measurement. Each moved item is locked, inverted back to its old position
//! on the next frame, and released with a timed transition on the frame
//! after that. The host's own transition interpolation does the tweening.

/// The FLIP cycle and its per-task steps.
pub mod flip;
/// Per-item in-flight flag.
pub mod lock;
/// Deferred work items.
pub mod task;
/// Transition timing.
pub mod transition;

pub use flip::{CycleReport, FlipEngine};
pub use lock::{LockToken, TransitionLock};
pub use task::Task;
pub use transition::TransformTransition;
