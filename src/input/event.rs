use glam::Vec2;

use crate::item::ItemId;

/// Platform-agnostic list input.
///
/// Hosts translate their native drag-and-drop callbacks into these and feed
/// them to
/// [`ReorderController::handle_event`](crate::engine::ReorderController::handle_event).
///
/// # Example
///
/// ```ignore
/// controller.handle_event(InputEvent::DragStart {
///     item: "gray".into(),
///     pointer: Vec2::new(120.0, 40.0),
/// })?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A drag gesture began on `item`.
    DragStart {
        /// Item under the pointer.
        item: ItemId,
        /// Pointer position in screen coordinates.
        pointer: Vec2,
    },
    /// The pointer moved during a drag.
    DragMove {
        /// Pointer position in screen coordinates.
        pointer: Vec2,
    },
    /// The dragged item entered another item's drop zone.
    DragEnter {
        /// Item owning the drop zone.
        target: ItemId,
    },
    /// The drag gesture finished (drop or cancel).
    DragEnd,
    /// The manual "reorder" trigger.
    Shuffle,
}

impl InputEvent {
    /// Short name for logging and error reporting.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "start",
            Self::DragMove { .. } => "move",
            Self::DragEnter { .. } => "enter",
            Self::DragEnd => "end",
            Self::Shuffle => "shuffle",
        }
    }
}
