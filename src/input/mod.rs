//! Input handling: event types and the drag state machine.

/// Drag state machine and live drag session.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;

pub use drag::{DragSession, DragState};
pub use event::InputEvent;
