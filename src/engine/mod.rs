//! The reorder controller: one owner for the order, the position snapshot,
//! the lock table and the drag session.
//!
//! Everything runs on the host's event loop. Input arrives through
//! [`ReorderController::handle_event`]; deferred work comes back through
//! [`ReorderController::run_task`]. After every order change the host is
//! asked to re-lay-out and the FLIP cycle runs immediately, before the next
//! frame.

mod accessors;
mod input;
mod options;
mod tasks;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{CycleReport, FlipEngine, TransitionLock};
use crate::error::GlideError;
use crate::host::Host;
use crate::input::DragState;
use crate::item::ItemId;
use crate::layout::PositionTracker;
use crate::options::Options;
use crate::order::ItemOrder;

/// Coordinates drag input, order changes and FLIP transitions for one list.
pub struct ReorderController<H: Host> {
    host: H,
    order: ItemOrder,
    tracker: PositionTracker,
    locks: TransitionLock,
    drag: DragState,
    flip: FlipEngine,
    options: Options,
    rng: StdRng,
}

impl<H: Host> ReorderController<H> {
    /// Take ownership of `host`, lay out `order` and capture the initial
    /// positions. The first layout is never animated.
    pub fn new(host: H, order: ItemOrder, options: Options) -> Self {
        let rng = options
            .list
            .shuffle_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut controller = Self {
            host,
            order,
            tracker: PositionTracker::new(),
            locks: TransitionLock::new(),
            drag: DragState::Idle,
            flip: FlipEngine::new(options.transition.transition()),
            options,
            rng,
        };
        log::info!(
            "reorder controller ready: {} items, {}ms transitions",
            controller.order.len(),
            controller.options.transition.duration_ms
        );
        let _ = controller.relayout();
        controller
    }

    /// Build the initial order from [`Options::list`].
    pub fn from_options(host: H, options: Options) -> Result<Self, GlideError> {
        let order = ItemOrder::new(options.list.items.iter().map(String::as_str))?;
        Ok(Self::new(host, order, options))
    }

    /// Push the current order to the host, then run a FLIP cycle.
    fn relayout(&mut self) -> CycleReport {
        self.host.apply_order(self.order.as_slice());
        self.run_layout_cycle()
    }

    /// Measure the current layout and animate everything that moved.
    ///
    /// Order changes call this automatically; hosts call it directly when
    /// layout shifts for other reasons (a resize, a font load).
    pub fn run_layout_cycle(&mut self) -> CycleReport {
        self.flip.run_cycle(
            &mut self.host,
            &self.order,
            &mut self.tracker,
            &mut self.locks,
            self.drag.dragged_item(),
        )
    }

    /// Replace the order with a random permutation (the manual trigger).
    pub fn shuffle(&mut self) -> CycleReport {
        self.order.shuffle(&mut self.rng);
        log::debug!("shuffled {} items", self.order.len());
        self.relayout()
    }

    /// Swap two items programmatically.
    pub fn swap(
        &mut self,
        a: &ItemId,
        b: &ItemId,
    ) -> Result<CycleReport, GlideError> {
        self.order.swap(a, b)?;
        Ok(self.relayout())
    }
}
