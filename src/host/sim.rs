//! An in-memory host for tests, benchmarks and the demo binary.
//!
//! Items sit in a fixed grid. Transforms are tracked with their transition
//! so that [`measure`](RenderHost::measure) reports the *visual* box, the
//! way a browser's `getBoundingClientRect` does. Time only moves when a
//! frame is stepped.

use std::time::Duration;

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{FrameScheduler, RenderHost};
use crate::animation::{Task, TransformTransition};
use crate::engine::ReorderController;
use crate::error::GlideError;
use crate::item::ItemId;
use crate::layout::BoundingBox;

/// Frame interval of a 60 Hz display, rounded down.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Shortest frame interval; every frame must move the clock forward.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Grid geometry: slot `i` is at column `i % columns`, row `i / columns`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Items per row.
    pub columns: usize,
    /// Width and height of one cell.
    pub cell: Vec2,
    /// Spacing between cells on both axes.
    pub gap: f32,
    /// Top-left corner of slot 0.
    pub origin: Vec2,
}

impl GridLayout {
    /// Grid with `columns` cells per row.
    #[must_use]
    pub fn new(columns: usize, width: f32, height: f32, gap: f32) -> Self {
        Self {
            columns: columns.max(1),
            cell: Vec2::new(width, height),
            gap,
            origin: Vec2::ZERO,
        }
    }

    /// Single row without gaps.
    #[must_use]
    pub fn row(width: f32, height: f32) -> Self {
        Self::new(usize::MAX, width, height, 0.0)
    }

    /// Box of layout slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> BoundingBox {
        let col = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        BoundingBox::new(
            self.origin.x + col * (self.cell.x + self.gap),
            self.origin.y + row * (self.cell.y + self.gap),
            self.cell.x,
            self.cell.y,
        )
    }
}

/// One recorded `set_transform` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformWrite {
    /// Frame counter when the write happened.
    pub frame: u64,
    /// Item written.
    pub item: ItemId,
    /// Target offset.
    pub offset: Vec2,
    /// Transition the write asked for.
    pub transition: Option<TransformTransition>,
}

/// Tasks released by [`SimulatedHost::begin_frame`].
#[derive(Debug, Default)]
pub struct FrameBatch {
    /// Timers that came due, earliest first.
    pub timers: Vec<Task>,
    /// Paint tasks requested before this frame began.
    pub paint: Vec<Task>,
}

impl FrameBatch {
    /// Whether nothing ran this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty() && self.paint.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct TransformState {
    from: Vec2,
    to: Vec2,
    started: Duration,
    transition: Option<TransformTransition>,
}

impl TransformState {
    fn at(&self, now: Duration) -> Vec2 {
        let Some(transition) = self.transition else {
            return self.to;
        };
        if transition.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started);
        let t = elapsed.as_secs_f32() / transition.duration.as_secs_f32();
        self.from + (self.to - self.from) * transition.easing.evaluate(t)
    }
}

#[derive(Debug)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Deterministic host: grid layout, virtual clock, recorded writes.
#[derive(Debug)]
pub struct SimulatedHost {
    layout: GridLayout,
    frame_interval: Duration,
    now: Duration,
    frame: u64,
    order: Vec<ItemId>,
    unmounted: FxHashSet<ItemId>,
    transforms: FxHashMap<ItemId, TransformState>,
    ghost_cleared: FxHashSet<ItemId>,
    paint_queue: Vec<Task>,
    timers: Vec<PendingTimer>,
    timer_seq: u64,
    writes: Vec<TransformWrite>,
}

impl SimulatedHost {
    /// Empty host using `layout`.
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            now: Duration::ZERO,
            frame: 0,
            order: Vec::new(),
            unmounted: FxHashSet::default(),
            transforms: FxHashMap::default(),
            ghost_cleared: FxHashSet::default(),
            paint_queue: Vec::new(),
            timers: Vec::new(),
            timer_seq: 0,
            writes: Vec::new(),
        }
    }

    /// Use a different frame interval, at least [`MIN_FRAME_INTERVAL`].
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval.max(MIN_FRAME_INTERVAL);
        self
    }

    /// Virtual time elapsed.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of frames produced so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Grid geometry.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Drop `item`'s node; it stays unmeasurable until the next
    /// [`apply_order`](RenderHost::apply_order).
    pub fn unmount(&mut self, item: &ItemId) {
        let _ = self.unmounted.insert(item.clone());
    }

    /// Untransformed layout box of `item`.
    #[must_use]
    pub fn layout_box(&self, item: &ItemId) -> Option<BoundingBox> {
        self.order
            .iter()
            .filter(|candidate| !self.unmounted.contains(*candidate))
            .position(|candidate| candidate == item)
            .map(|slot| self.layout.slot(slot))
    }

    /// Offset currently on screen for `item`, mid-transition included.
    #[must_use]
    pub fn transform_of(&self, item: &ItemId) -> Vec2 {
        self.transforms
            .get(item)
            .map_or(Vec2::ZERO, |state| state.at(self.now))
    }

    /// Whether a transition on `item` is still interpolating.
    #[must_use]
    pub fn is_transitioning(&self, item: &ItemId) -> bool {
        self.transforms.get(item).is_some_and(|state| {
            state.transition.is_some_and(|t| {
                self.now.saturating_sub(state.started) < t.duration
            })
        })
    }

    /// Every transform write so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[TransformWrite] {
        &self.writes
    }

    /// Writes that targeted `item`.
    pub fn writes_for<'a>(
        &'a self,
        item: &'a ItemId,
    ) -> impl Iterator<Item = &'a TransformWrite> + 'a {
        self.writes.iter().filter(move |write| &write.item == item)
    }

    /// Most recent write to `item`.
    #[must_use]
    pub fn last_write(&self, item: &ItemId) -> Option<&TransformWrite> {
        self.writes.iter().rev().find(|write| &write.item == item)
    }

    /// Forget recorded writes.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Whether the drag ghost was suppressed for `item`.
    #[must_use]
    pub fn drag_image_cleared(&self, item: &ItemId) -> bool {
        self.ghost_cleared.contains(item)
    }

    /// Paint tasks waiting for the next frame.
    #[must_use]
    pub fn pending_frame_tasks(&self) -> &[Task] {
        &self.paint_queue
    }

    /// Timer tasks not yet due, earliest first.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<Task> {
        let mut timers: Vec<&PendingTimer> = self.timers.iter().collect();
        timers.sort_by_key(|timer| (timer.due, timer.seq));
        timers.into_iter().map(|timer| timer.task.clone()).collect()
    }

    /// Whether no task is waiting on a frame or a timer.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.paint_queue.is_empty() && self.timers.is_empty()
    }

    /// Advance the clock by one frame and release the tasks that fire in it.
    ///
    /// Paint tasks requested while the returned batch runs are queued for
    /// the frame after this one.
    pub fn begin_frame(&mut self) -> FrameBatch {
        self.frame += 1;
        self.now += self.frame_interval;

        let now = self.now;
        let (mut due, pending): (Vec<PendingTimer>, Vec<PendingTimer>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|timer| timer.due <= now);
        self.timers = pending;
        due.sort_by_key(|timer| (timer.due, timer.seq));

        FrameBatch {
            timers: due.into_iter().map(|timer| timer.task).collect(),
            paint: std::mem::take(&mut self.paint_queue),
        }
    }
}

impl RenderHost for SimulatedHost {
    fn apply_order(&mut self, order: &[ItemId]) {
        self.order = order.to_vec();
        self.unmounted.clear();
    }

    fn measure(&self, item: &ItemId) -> Result<BoundingBox, GlideError> {
        self.layout_box(item)
            .map(|bbox| bbox.translated(self.transform_of(item)))
            .ok_or_else(|| GlideError::NotRendered(item.clone()))
    }

    fn set_transform(
        &mut self,
        item: &ItemId,
        offset: Vec2,
        transition: Option<TransformTransition>,
    ) {
        let state = TransformState {
            from: self.transform_of(item),
            to: offset,
            started: self.now,
            transition,
        };
        let _ = self.transforms.insert(item.clone(), state);
        self.writes.push(TransformWrite {
            frame: self.frame,
            item: item.clone(),
            offset,
            transition,
        });
    }

    fn clear_drag_image(&mut self, item: &ItemId) {
        let _ = self.ghost_cleared.insert(item.clone());
    }
}

impl FrameScheduler for SimulatedHost {
    fn request_frame(&mut self, task: Task) {
        self.paint_queue.push(task);
    }

    fn schedule_after(&mut self, delay: Duration, task: Task) {
        self.timer_seq += 1;
        self.timers.push(PendingTimer {
            due: self.now + delay,
            seq: self.timer_seq,
            task,
        });
    }
}

impl ReorderController<SimulatedHost> {
    /// Produce one frame: fire due timers, then the frame's paint tasks.
    ///
    /// Returns how many tasks ran.
    pub fn step_frame(&mut self) -> usize {
        let batch = self.host_mut().begin_frame();
        let count = batch.timers.len() + batch.paint.len();
        for task in batch.timers.into_iter().chain(batch.paint) {
            self.run_task(task);
        }
        count
    }

    /// Step frames until no task is pending, at most `max_frames` times.
    ///
    /// Returns the number of frames stepped.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && !self.host().is_idle() {
            let _ = self.step_frame();
            frames += 1;
        }
        frames
    }

    /// Step frames until at least `duration` of virtual time has passed.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.host().now() + duration;
        while self.host().now() < target {
            let _ = self.step_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::LockToken;
    use crate::options::Options;
    use crate::order::ItemOrder;
    use crate::util::easing::EasingFunction;

    fn abc_host() -> SimulatedHost {
        let mut host = SimulatedHost::new(GridLayout::row(100.0, 50.0));
        host.apply_order(&["A".into(), "B".into(), "C".into()]);
        host
    }

    #[test]
    fn test_grid_slots() {
        let grid = GridLayout::new(3, 100.0, 100.0, 10.0);
        assert_eq!(grid.slot(0), BoundingBox::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(grid.slot(4), BoundingBox::new(110.0, 110.0, 100.0, 100.0));
    }

    #[test]
    fn test_measure_includes_transform() {
        let mut host = abc_host();
        let b = ItemId::from("B");
        host.set_transform(&b, Vec2::new(5.0, 7.0), None);
        let bbox = host.measure(&b).unwrap();
        assert_eq!((bbox.left, bbox.top), (105.0, 7.0));
    }

    #[test]
    fn test_unknown_item_not_rendered() {
        let host = abc_host();
        let err = host.measure(&"Z".into()).unwrap_err();
        assert!(matches!(err, GlideError::NotRendered(_)));
    }

    #[test]
    fn test_transition_interpolates_over_time() {
        let mut host = abc_host().with_frame_interval(Duration::from_millis(50));
        let a = ItemId::from("A");
        host.set_transform(&a, Vec2::new(100.0, 0.0), None);
        host.set_transform(
            &a,
            Vec2::ZERO,
            Some(TransformTransition::new(
                Duration::from_millis(100),
                EasingFunction::Linear,
            )),
        );

        let _ = host.begin_frame();
        assert!((host.transform_of(&a).x - 50.0).abs() < 1e-3);
        assert!(host.is_transitioning(&a));

        let _ = host.begin_frame();
        assert_eq!(host.transform_of(&a), Vec2::ZERO);
        assert!(!host.is_transitioning(&a));
    }

    #[test]
    fn test_requests_during_frame_go_to_next_frame() {
        let mut host = abc_host();
        host.request_frame(Task::DragFrame);

        let batch = host.begin_frame();
        assert_eq!(batch.paint, vec![Task::DragFrame]);
        host.request_frame(Task::Play {
            item: "A".into(),
            token: LockToken(1),
        });

        assert_eq!(host.pending_frame_tasks().len(), 1);
        let next = host.begin_frame();
        assert_eq!(
            next.paint,
            vec![Task::Play {
                item: "A".into(),
                token: LockToken(1)
            }]
        );
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut host = abc_host();
        let unlock = |key: &str, generation| Task::Unlock {
            item: key.into(),
            token: LockToken(generation),
        };
        host.schedule_after(Duration::from_millis(30), unlock("B", 2));
        host.schedule_after(Duration::from_millis(20), unlock("A", 1));

        assert!(host.begin_frame().timers.is_empty());
        let batch = host.begin_frame();
        assert_eq!(
            batch.timers,
            vec![unlock("A", 1), unlock("B", 2)]
        );
        assert!(host.is_idle());
    }

    #[test]
    fn test_zero_frame_interval_still_advances_clock() {
        let mut host = abc_host().with_frame_interval(Duration::ZERO);
        let _ = host.begin_frame();
        assert_eq!(host.now(), MIN_FRAME_INTERVAL);
    }

    #[test]
    fn test_advance_terminates_with_zero_interval() {
        let host = SimulatedHost::new(GridLayout::row(10.0, 10.0))
            .with_frame_interval(Duration::ZERO);
        let order = ItemOrder::new(["A", "B"]).unwrap();
        let mut controller =
            ReorderController::new(host, order, Options::default());

        controller.advance(Duration::from_millis(5));
        assert_eq!(controller.host().now(), Duration::from_millis(5));
        assert_eq!(controller.host().frame(), 5);
    }
}
