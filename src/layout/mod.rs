//! Screen-space geometry and the last-known position of every item.

/// Axis-aligned screen rectangles.
pub mod bounding_box;
/// Position snapshots and the tracker that owns the current one.
pub mod tracker;

pub use bounding_box::BoundingBox;
pub use tracker::{PositionSnapshot, PositionTracker};
