//! Drag input handling for ReorderController.

use glam::Vec2;

use super::ReorderController;
use crate::animation::Task;
use crate::error::GlideError;
use crate::host::Host;
use crate::input::InputEvent;
use crate::item::ItemId;

// ── Unified input handler ──

impl<H: Host> ReorderController<H> {
    /// Process a platform-agnostic input event.
    ///
    /// Events that are invalid for the current drag state (a `move` before
    /// any `start`, a second `start` mid-drag) are rejected with
    /// [`GlideError::InvalidDragTransition`] and change nothing. Hosts that
    /// cannot rule out stray events may simply ignore the error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// controller.handle_event(InputEvent::DragMove { pointer })?;
    /// controller.handle_event(InputEvent::Shuffle)?;
    /// ```
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), GlideError> {
        log::trace!("input: {} while {}", event.name(), self.drag.name());
        match event {
            InputEvent::DragStart { item, pointer } => {
                self.drag_start(item, pointer)
            }
            InputEvent::DragMove { pointer } => self.drag_move(pointer),
            InputEvent::DragEnter { target } => self.drag_enter(&target),
            InputEvent::DragEnd => self.drag_end(),
            InputEvent::Shuffle => {
                let _ = self.shuffle();
                Ok(())
            }
        }
    }

    /// Open a drag session on `item` anchored at `pointer`.
    ///
    /// Items outside the order are reported as
    /// [`GlideError::NotRendered`].
    pub fn drag_start(
        &mut self,
        item: ItemId,
        pointer: Vec2,
    ) -> Result<(), GlideError> {
        if !self.order.contains(&item) {
            return Err(GlideError::NotRendered(item));
        }
        let _ = self.drag.begin(item.clone(), pointer)?;
        if self.options.drag.hide_drag_image {
            self.host.clear_drag_image(&item);
        }
        log::debug!("drag start: {item} at ({}, {})", pointer.x, pointer.y);
        Ok(())
    }

    /// Track the pointer; the dragged item follows on the next frame.
    ///
    /// Moves are coalesced: however many arrive between two frames, one
    /// transform write applies the latest delta.
    pub fn drag_move(&mut self, pointer: Vec2) -> Result<(), GlideError> {
        let _ = self.drag.update(pointer)?;
        self.request_drag_frame();
        Ok(())
    }

    /// The dragged item entered `target`'s drop zone: swap them.
    ///
    /// Entering the dragged item's own zone, or a zone whose item is still
    /// settling from a FLIP, is ignored. After a swap the drag origin moves
    /// to the current pointer so the item does not jump.
    pub fn drag_enter(&mut self, target: &ItemId) -> Result<(), GlideError> {
        let Some(dragged) = self.drag.dragged_item().cloned() else {
            return Err(GlideError::InvalidDragTransition {
                event: "enter",
                state: self.drag.name(),
            });
        };
        if &dragged == target {
            return Ok(());
        }
        if self.locks.is_locked(target) {
            log::trace!("drag enter on {target} ignored: still animating");
            return Ok(());
        }

        self.order.swap(&dragged, target)?;
        self.drag.rebase()?;
        self.request_drag_frame();
        log::debug!("drag enter: swapped {dragged} with {target}");
        let _ = self.relayout();
        Ok(())
    }

    /// Close the drag session and send the item back to its slot.
    ///
    /// The snap-back takes its own hold on the item's lock, next to any FLIP
    /// still running on it, so the item stays locked until both are done.
    /// Its position is re-measured when the snap-back finishes.
    pub fn drag_end(&mut self) -> Result<(), GlideError> {
        let session = self.drag.end()?;
        let item = session.item().clone();
        log::debug!("drag end: {item} after {:?}", session.elapsed());

        let token = self.locks.acquire(&item);
        self.host.request_frame(Task::SnapBack { item, token });
        Ok(())
    }

    fn request_drag_frame(&mut self) {
        if let Some(session) = self.drag.session_mut() {
            if session.request_frame() {
                self.host.request_frame(Task::DragFrame);
            }
        }
    }
}
