//! The rendering collaborator: what the engine needs from whoever draws the
//! list.
//!
//! The engine never touches pixels. It asks the host to lay items out in a
//! given order, to measure them, to write 2D translations, and to run
//! [`Task`]s at the next paint or after a delay. Any UI toolkit that can do
//! those five things can host a reorderable list.

/// Deterministic in-memory host with a virtual clock.
pub mod sim;

use std::time::Duration;

use glam::Vec2;

pub use sim::{
    GridLayout, SimulatedHost, TransformWrite, DEFAULT_FRAME_INTERVAL,
    MIN_FRAME_INTERVAL,
};

use crate::animation::{Task, TransformTransition};
use crate::error::GlideError;
use crate::item::ItemId;
use crate::layout::BoundingBox;

/// Layout and transform surface of the host.
pub trait RenderHost {
    /// Re-lay-out the rendered items in `order`.
    ///
    /// Called synchronously after every order change, before the engine
    /// measures; by the time it returns, [`measure`](Self::measure) must
    /// report the new layout.
    fn apply_order(&mut self, order: &[ItemId]);

    /// Screen-space box of `item` as currently displayed.
    ///
    /// Returns [`GlideError::NotRendered`] if the item has no node.
    fn measure(&self, item: &ItemId) -> Result<BoundingBox, GlideError>;

    /// Apply a 2D translation to `item`.
    ///
    /// `None` applies it instantly; `Some` animates from the offset currently
    /// on screen to `offset`.
    fn set_transform(
        &mut self,
        item: &ItemId,
        offset: Vec2,
        transition: Option<TransformTransition>,
    );

    /// Suppress the platform's default drag preview ("ghost") for `item`.
    fn clear_drag_image(&mut self, _item: &ItemId) {}
}

/// Deferred execution surface of the host.
pub trait FrameScheduler {
    /// Run `task` once, just before the next visual frame.
    ///
    /// A task requested while a frame's tasks are being run must land in a
    /// later frame, never the current one.
    fn request_frame(&mut self, task: Task);

    /// Run `task` once after at least `delay` of wall-clock time.
    fn schedule_after(&mut self, delay: Duration, task: Task);
}

/// Everything the controller needs from a host.
pub trait Host: RenderHost + FrameScheduler {}

impl<T: RenderHost + FrameScheduler + ?Sized> Host for T {}
