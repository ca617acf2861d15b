use glam::Vec2;
use web_time::{Duration, Instant};

use crate::error::GlideError;
use crate::item::ItemId;

/// The live state of one in-progress drag gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    item: ItemId,
    origin: Vec2,
    delta: Vec2,
    started_at: Instant,
    frame_pending: bool,
}

impl DragSession {
    fn new(item: ItemId, pointer: Vec2) -> Self {
        Self {
            item,
            origin: pointer,
            delta: Vec2::ZERO,
            started_at: Instant::now(),
            frame_pending: false,
        }
    }

    /// The item being dragged.
    #[must_use]
    pub fn item(&self) -> &ItemId {
        &self.item
    }

    /// Pointer position the delta is measured from.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Pointer movement since [`origin`](Self::origin).
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.origin + self.delta
    }

    /// Wall-clock time since the drag began.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Mark a drag frame as requested. Returns false if one already is.
    pub fn request_frame(&mut self) -> bool {
        !std::mem::replace(&mut self.frame_pending, true)
    }

    /// The pending drag frame has run.
    pub fn frame_applied(&mut self) {
        self.frame_pending = false;
    }
}

/// Two-state drag machine: `Idle --start--> Dragging --end--> Idle`.
///
/// `move` and `enter` are only valid while dragging, `start` only while
/// idle. Invalid transitions are rejected with
/// [`GlideError::InvalidDragTransition`] and leave the state untouched.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(DragSession),
}

impl DragState {
    /// State name for logging and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Mutable access to the active session.
    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// The item whose transform the drag currently owns.
    #[must_use]
    pub fn dragged_item(&self) -> Option<&ItemId> {
        self.session().map(DragSession::item)
    }

    fn reject(&self, event: &'static str) -> GlideError {
        GlideError::InvalidDragTransition {
            event,
            state: self.name(),
        }
    }

    /// `start`: open a session for `item` with `pointer` as origin.
    pub fn begin(
        &mut self,
        item: ItemId,
        pointer: Vec2,
    ) -> Result<&mut DragSession, GlideError> {
        if self.is_dragging() {
            return Err(self.reject("start"));
        }
        *self = Self::Dragging(DragSession::new(item, pointer));
        self.active("start")
    }

    /// `move`: recompute the delta from the session origin.
    pub fn update(&mut self, pointer: Vec2) -> Result<Vec2, GlideError> {
        let session = self.active("move")?;
        session.delta = pointer - session.origin;
        Ok(session.delta)
    }

    /// Re-anchor the origin at the last known pointer, zeroing the delta.
    ///
    /// Used after a drag-enter swap: the dragged item's layout slot has
    /// moved under the pointer, so tracking restarts from there.
    pub fn rebase(&mut self) -> Result<(), GlideError> {
        let session = self.active("enter")?;
        session.origin = session.pointer();
        session.delta = Vec2::ZERO;
        Ok(())
    }

    /// `end`: close the session and hand it back.
    pub fn end(&mut self) -> Result<DragSession, GlideError> {
        match std::mem::take(self) {
            Self::Dragging(session) => Ok(session),
            Self::Idle => Err(self.reject("end")),
        }
    }

    fn active(
        &mut self,
        event: &'static str,
    ) -> Result<&mut DragSession, GlideError> {
        match self {
            Self::Dragging(session) => Ok(session),
            Self::Idle => Err(GlideError::InvalidDragTransition {
                event,
                state: "idle",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(item: &str, x: f32, y: f32) -> DragState {
        let mut state = DragState::Idle;
        let _ = state.begin(item.into(), Vec2::new(x, y)).unwrap();
        state
    }

    #[test]
    fn test_begin_records_origin() {
        let state = dragging("A", 10.0, 20.0);
        let session = state.session().unwrap();
        assert_eq!(session.item().as_str(), "A");
        assert_eq!(session.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(session.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_update_tracks_delta_from_origin() {
        let mut state = dragging("A", 100.0, 100.0);
        assert_eq!(
            state.update(Vec2::new(150.0, 70.0)).unwrap(),
            Vec2::new(50.0, -30.0)
        );
        assert_eq!(
            state.update(Vec2::new(90.0, 100.0)).unwrap(),
            Vec2::new(-10.0, 0.0)
        );
    }

    #[test]
    fn test_rebase_continues_from_current_pointer() {
        let mut state = dragging("A", 0.0, 0.0);
        let _ = state.update(Vec2::new(80.0, 5.0)).unwrap();
        state.rebase().unwrap();

        let session = state.session().unwrap();
        assert_eq!(session.origin(), Vec2::new(80.0, 5.0));
        assert_eq!(session.delta(), Vec2::ZERO);
        assert_eq!(
            state.update(Vec2::new(90.0, 5.0)).unwrap(),
            Vec2::new(10.0, 0.0)
        );
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut state = dragging("A", 0.0, 0.0);
        let session = state.end().unwrap();
        assert_eq!(session.item().as_str(), "A");
        assert!(!state.is_dragging());
        assert!(state.dragged_item().is_none());
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut idle = DragState::Idle;
        assert!(matches!(
            idle.update(Vec2::ONE),
            Err(GlideError::InvalidDragTransition { event: "move", state: "idle" })
        ));
        assert!(idle.rebase().is_err());
        assert!(matches!(
            idle.end(),
            Err(GlideError::InvalidDragTransition { event: "end", .. })
        ));

        let mut busy = dragging("A", 0.0, 0.0);
        assert!(matches!(
            busy.begin("B".into(), Vec2::ZERO),
            Err(GlideError::InvalidDragTransition { event: "start", state: "dragging" })
        ));
        assert_eq!(busy.dragged_item().map(ItemId::as_str), Some("A"));
    }

    #[test]
    fn test_frame_request_coalesces() {
        let mut state = dragging("A", 0.0, 0.0);
        let session = state.session_mut().unwrap();
        assert!(session.request_frame());
        assert!(!session.request_frame());
        session.frame_applied();
        assert!(session.request_frame());
    }
}
