//! Deferred task execution for ReorderController.

use std::time::Duration;

use glam::Vec2;

use super::ReorderController;
use crate::animation::{LockToken, Task};
use crate::host::Host;
use crate::item::ItemId;

impl<H: Host> ReorderController<H> {
    /// Run a task the host scheduled earlier.
    ///
    /// Hosts call this from their frame callback for paint tasks and from
    /// their timer callback for delayed ones.
    pub fn run_task(&mut self, task: Task) {
        log::trace!("task: {}", task.name());
        match task {
            Task::Invert {
                item,
                offset,
                token,
            } => {
                self.flip.invert(
                    &mut self.host,
                    item,
                    offset,
                    token,
                    self.drag.dragged_item(),
                );
            }
            Task::Play { item, token } => {
                self.flip.play(
                    &mut self.host,
                    item,
                    token,
                    self.drag.dragged_item(),
                );
            }
            Task::Unlock { item, token }
            | Task::SettleDrag { item, token } => {
                self.settle(&item, token);
            }
            Task::DragFrame => self.apply_drag_frame(),
            Task::SnapBack { item, token } => self.snap_back(item, token),
        }
    }

    fn apply_drag_frame(&mut self) {
        let Some(session) = self.drag.session_mut() else {
            return;
        };
        session.frame_applied();
        let item = session.item().clone();
        let delta = session.delta();
        self.host.set_transform(&item, delta, None);
    }

    fn snap_back(&mut self, item: ItemId, token: LockToken) {
        let transition =
            self.options.drag.snap_back.then_some(self.flip.transition());
        if self.drag.dragged_item() != Some(&item) {
            self.host.set_transform(&item, Vec2::ZERO, transition);
        }
        let delay = transition.map_or(Duration::ZERO, |t| t.duration);
        self.host
            .schedule_after(delay, Task::SettleDrag { item, token });
    }

    /// A transition on `item` has run its course: record where it came to
    /// rest and give up `token`'s hold.
    ///
    /// Cycles that ran while the item was in flight stored its visual
    /// position, not its resting one; re-measuring here keeps the next FLIP
    /// from starting at a stale point. Another animation that joined in the
    /// meantime keeps the item locked until its own release.
    fn settle(&mut self, item: &ItemId, token: LockToken) {
        if !self.locks.holds(item, token) {
            log::trace!("{item}: release of expired hold ignored");
            return;
        }
        match self.host.measure(item) {
            Ok(bbox) => self.tracker.update(item.clone(), bbox),
            Err(e) => log::warn!("could not settle {item}: {e}"),
        }
        let _ = self.locks.release(item, token);
    }
}
