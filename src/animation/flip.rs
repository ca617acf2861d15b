//! First-Last-Invert-Play.

use glam::Vec2;

use super::lock::{LockToken, TransitionLock};
use super::task::Task;
use super::transition::TransformTransition;
use crate::host::Host;
use crate::item::ItemId;
use crate::layout::tracker::Measurement;
use crate::layout::PositionTracker;
use crate::order::ItemOrder;

/// What one layout cycle decided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    /// No previous snapshot existed; nothing was animated.
    pub first_run: bool,
    /// Items that started a FLIP, with their inverse offset.
    pub animated: Vec<(ItemId, Vec2)>,
    /// Items that moved but were still mid-animation.
    pub skipped_locked: Vec<ItemId>,
    /// Items the host could not measure this cycle.
    pub unmeasured: Vec<ItemId>,
}

impl CycleReport {
    /// Offset chosen for `item`, if it was animated this cycle.
    #[must_use]
    pub fn offset_of(&self, item: &ItemId) -> Option<Vec2> {
        self.animated
            .iter()
            .find(|(animated, _)| animated == item)
            .map(|(_, offset)| *offset)
    }
}

/// Plays FLIP transitions for items that moved between two layouts.
///
/// The engine itself is stateless apart from its transition settings; the
/// snapshot, lock table and drag exclusion are owned by the caller and
/// passed in for each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipEngine {
    transition: TransformTransition,
}

impl FlipEngine {
    /// Engine using `transition` for the play phase.
    #[must_use]
    pub const fn new(transition: TransformTransition) -> Self {
        Self { transition }
    }

    /// Transition used for the play phase.
    #[must_use]
    pub fn transition(&self) -> TransformTransition {
        self.transition
    }

    /// Replace the play-phase transition. In-flight animations keep the
    /// timing they were scheduled with.
    pub fn set_transition(&mut self, transition: TransformTransition) {
        self.transition = transition;
    }

    /// Run one cycle after the host has laid out `order`.
    ///
    /// Every moved item that is neither `dragged` nor locked gets locked and
    /// has a [`Task::Invert`] queued for the next frame. The fresh
    /// measurement always becomes the tracker's current snapshot, whether or
    /// not anything moved.
    pub fn run_cycle<H: Host + ?Sized>(
        &self,
        host: &mut H,
        order: &ItemOrder,
        tracker: &mut PositionTracker,
        locks: &mut TransitionLock,
        dragged: Option<&ItemId>,
    ) -> CycleReport {
        let Measurement {
            snapshot: fresh,
            missing,
        } = PositionTracker::measure(&*host, order.iter());

        let mut report = CycleReport {
            unmeasured: missing,
            ..CycleReport::default()
        };

        if !tracker.has_captured() {
            report.first_run = true;
            tracker.store(fresh);
            return report;
        }

        for item in order {
            if dragged == Some(item) {
                continue;
            }
            let (Some(old), Some(new)) =
                (tracker.current().get(item), fresh.get(item))
            else {
                continue;
            };

            let offset = old.offset_to(new);
            if offset == Vec2::ZERO {
                continue;
            }
            let Some(token) = locks.lock(item) else {
                report.skipped_locked.push(item.clone());
                continue;
            };

            host.request_frame(Task::Invert {
                item: item.clone(),
                offset,
                token,
            });
            report.animated.push((item.clone(), offset));
        }

        log::debug!(
            "flip cycle: {} animated, {} locked, {} unmeasured",
            report.animated.len(),
            report.skipped_locked.len(),
            report.unmeasured.len()
        );
        tracker.store(fresh);
        report
    }

    /// Invert step: pin `item` at its old position, then queue the play
    /// step for the following frame.
    ///
    /// If `item` has since become the dragged item its transform belongs to
    /// the drag, so only the continuation is queued.
    pub fn invert<H: Host + ?Sized>(
        &self,
        host: &mut H,
        item: ItemId,
        offset: Vec2,
        token: LockToken,
        dragged: Option<&ItemId>,
    ) {
        if dragged != Some(&item) {
            host.set_transform(&item, offset, None);
        }
        host.request_frame(Task::Play { item, token });
    }

    /// Play step: release the offset with a timed transition and schedule
    /// the release of `token` for when it completes.
    pub fn play<H: Host + ?Sized>(
        &self,
        host: &mut H,
        item: ItemId,
        token: LockToken,
        dragged: Option<&ItemId>,
    ) {
        if dragged != Some(&item) {
            host.set_transform(&item, Vec2::ZERO, Some(self.transition));
        }
        host.schedule_after(
            self.transition.duration,
            Task::Unlock { item, token },
        );
    }
}
