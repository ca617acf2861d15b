//! Deferred work handed to the host's frame scheduler.

use glam::Vec2;

use super::lock::LockToken;
use crate::item::ItemId;

/// A unit of work the controller asks the host to run later.
///
/// Hosts never interpret tasks; they queue them and pass each one back to
/// [`ReorderController::run_task`](crate::engine::ReorderController::run_task)
/// when its frame or timer fires. Multi-step animations are chained by
/// nested continuation: a running task schedules its successor, so the two
/// paint-bound steps of a FLIP always land in different frames.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Paint: jump the item back to its old position with no transition,
    /// then request [`Task::Play`] for the following frame.
    Invert {
        /// Item being animated.
        item: ItemId,
        /// Old position minus new position.
        offset: Vec2,
        /// Lock taken when the FLIP started.
        token: LockToken,
    },
    /// Paint: release the inverse offset with a timed transition, then
    /// schedule [`Task::Unlock`] once the transition has run.
    Play {
        /// Item being animated.
        item: ItemId,
        /// Lock taken when the FLIP started.
        token: LockToken,
    },
    /// Timer: the item's FLIP transition has finished.
    Unlock {
        /// Item to release.
        item: ItemId,
        /// Hold to give up; other holders keep the item locked.
        token: LockToken,
    },
    /// Paint: apply the latest drag delta to the dragged item.
    DragFrame,
    /// Paint: animate a dropped item back to its layout slot, then schedule
    /// [`Task::SettleDrag`].
    SnapBack {
        /// Item that was dragged.
        item: ItemId,
        /// Lock taken at drop.
        token: LockToken,
    },
    /// Timer: the snap-back has finished; re-measure and release the item.
    SettleDrag {
        /// Item that was dragged.
        item: ItemId,
        /// Lock taken at drop.
        token: LockToken,
    },
}

impl Task {
    /// The item this task targets, if any.
    #[must_use]
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            Self::Invert { item, .. }
            | Self::Play { item, .. }
            | Self::Unlock { item, .. }
            | Self::SnapBack { item, .. }
            | Self::SettleDrag { item, .. } => Some(item),
            Self::DragFrame => None,
        }
    }

    /// The lock hold this task belongs to, if any.
    #[must_use]
    pub fn token(&self) -> Option<LockToken> {
        match self {
            Self::Invert { token, .. }
            | Self::Play { token, .. }
            | Self::Unlock { token, .. }
            | Self::SnapBack { token, .. }
            | Self::SettleDrag { token, .. } => Some(*token),
            Self::DragFrame => None,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invert { .. } => "invert",
            Self::Play { .. } => "play",
            Self::Unlock { .. } => "unlock",
            Self::DragFrame => "drag_frame",
            Self::SnapBack { .. } => "snap_back",
            Self::SettleDrag { .. } => "settle_drag",
        }
    }
}
