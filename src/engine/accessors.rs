//! Read-only queries and host access for [`ReorderController`].

use super::ReorderController;
use crate::animation::{TransformTransition, TransitionLock};
use crate::host::Host;
use crate::input::DragState;
use crate::layout::{PositionSnapshot, PositionTracker};
use crate::options::Options;
use crate::order::ItemOrder;

// ── Host access ──

impl<H: Host> ReorderController<H> {
    /// The host the controller drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Changing the layout through this handle without calling
    /// [`run_layout_cycle`](Self::run_layout_cycle) afterwards leaves the
    /// snapshot stale until the next order change.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear down the controller and hand the host back.
    pub fn into_host(self) -> H {
        self.host
    }
}

// ── State queries ──

impl<H: Host> ReorderController<H> {
    /// Current visual order.
    pub fn order(&self) -> &ItemOrder {
        &self.order
    }

    /// Positions captured at the end of the last layout cycle.
    pub fn positions(&self) -> &PositionSnapshot {
        self.tracker.current()
    }

    /// The position tracker.
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Items currently mid-transition.
    pub fn locks(&self) -> &TransitionLock {
        &self.locks
    }

    /// Drag state machine.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Transition the next FLIP will play with.
    pub fn transition(&self) -> TransformTransition {
        self.flip.transition()
    }
}
