use rustc_hash::FxHashMap;

use super::BoundingBox;
use crate::host::RenderHost;
use crate::item::ItemId;

/// Item positions as of one measurement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSnapshot {
    boxes: FxHashMap<ItemId, BoundingBox>,
}

impl PositionSnapshot {
    /// Empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Box recorded for `item`.
    #[must_use]
    pub fn get(&self, item: &ItemId) -> Option<&BoundingBox> {
        self.boxes.get(item)
    }

    /// Record (or overwrite) the box for `item`.
    pub fn insert(&mut self, item: ItemId, bbox: BoundingBox) {
        let _ = self.boxes.insert(item, bbox);
    }

    /// Number of measured items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether nothing was measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate `(item, box)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &BoundingBox)> {
        self.boxes.iter()
    }
}

/// Result of measuring a set of items against the host.
#[derive(Debug, Clone, Default)]
pub struct Measurement {
    /// Boxes for every item the host could measure.
    pub snapshot: PositionSnapshot,
    /// Items the host reported as not rendered.
    pub missing: Vec<ItemId>,
}

/// Owns the single "current" [`PositionSnapshot`].
///
/// Before the first capture the current snapshot is empty and
/// [`has_captured`](Self::has_captured) is false; the FLIP engine uses that
/// to skip animating the very first layout.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    current: PositionSnapshot,
    captured: bool,
}

impl PositionTracker {
    /// Tracker with no snapshot yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure `items` without touching the stored snapshot.
    ///
    /// Unrendered items are collected in [`Measurement::missing`] instead of
    /// failing the whole pass.
    pub fn measure<'a, H, I>(host: &H, items: I) -> Measurement
    where
        H: RenderHost + ?Sized,
        I: IntoIterator<Item = &'a ItemId>,
    {
        let mut measurement = Measurement::default();
        for item in items {
            match host.measure(item) {
                Ok(bbox) => measurement.snapshot.insert(item.clone(), bbox),
                Err(e) => {
                    log::warn!("skipping measurement: {e}");
                    measurement.missing.push(item.clone());
                }
            }
        }
        measurement
    }

    /// Measure `items` and make the result the current snapshot.
    pub fn capture<'a, H, I>(&mut self, host: &H, items: I) -> &PositionSnapshot
    where
        H: RenderHost + ?Sized,
        I: IntoIterator<Item = &'a ItemId>,
    {
        let measurement = Self::measure(host, items);
        self.store(measurement.snapshot);
        &self.current
    }

    /// Replace the current snapshot.
    pub fn store(&mut self, snapshot: PositionSnapshot) {
        self.current = snapshot;
        self.captured = true;
    }

    /// Overwrite one item's entry in the current snapshot.
    pub fn update(&mut self, item: ItemId, bbox: BoundingBox) {
        self.current.insert(item, bbox);
    }

    /// The last captured snapshot (empty before the first capture).
    #[must_use]
    pub fn current(&self) -> &PositionSnapshot {
        &self.current
    }

    /// Whether any snapshot has been stored yet.
    #[must_use]
    pub fn has_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GridLayout, SimulatedHost};
    use crate::order::ItemOrder;

    fn host_with(keys: &[&str]) -> (SimulatedHost, ItemOrder) {
        let order = ItemOrder::new(keys.iter().copied()).unwrap();
        let mut host = SimulatedHost::new(GridLayout::row(100.0, 100.0));
        host.apply_order(order.as_slice());
        (host, order)
    }

    #[test]
    fn test_current_is_empty_before_capture() {
        let tracker = PositionTracker::new();
        assert!(tracker.current().is_empty());
        assert!(!tracker.has_captured());
    }

    #[test]
    fn test_capture_replaces_snapshot() {
        let (mut host, mut order) = host_with(&["A", "B", "C"]);
        let mut tracker = PositionTracker::new();

        let first = tracker.capture(&host, order.iter()).clone();
        assert_eq!(first.get(&"C".into()).map(|b| b.left), Some(200.0));

        order.swap(&"A".into(), &"C".into()).unwrap();
        host.apply_order(order.as_slice());
        let second = tracker.capture(&host, order.iter());
        assert_eq!(second.get(&"C".into()).map(|b| b.left), Some(0.0));
        assert_eq!(second.get(&"A".into()).map(|b| b.left), Some(200.0));
        assert!(tracker.has_captured());
    }

    #[test]
    fn test_missing_nodes_are_skipped() {
        let (mut host, order) = host_with(&["A", "B", "C"]);
        host.unmount(&"B".into());

        let measurement = PositionTracker::measure(&host, order.iter());
        assert_eq!(measurement.snapshot.len(), 2);
        assert_eq!(measurement.missing, vec![ItemId::from("B")]);
    }
}
