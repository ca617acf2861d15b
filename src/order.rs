//! The ordered sequence of item identities and its two mutations.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::error::GlideError;
use crate::item::ItemId;

/// Visual order of the list. Keys are unique; index 0 renders first.
///
/// [`swap`](Self::swap) and [`shuffle`](Self::shuffle) are the only
/// mutations, so identity is stable across every reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOrder {
    items: Vec<ItemId>,
}

impl ItemOrder {
    /// Build an order from a seed sequence, rejecting duplicate keys.
    pub fn new<I, T>(items: I) -> Result<Self, GlideError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        let items: Vec<ItemId> = items.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item) {
                return Err(GlideError::DuplicateItem(item.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the order holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in visual order.
    #[must_use]
    pub fn as_slice(&self) -> &[ItemId] {
        &self.items
    }

    /// Iterate items in visual order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Index of `item`, if present.
    #[must_use]
    pub fn position_of(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Whether `item` is part of the order.
    #[must_use]
    pub fn contains(&self, item: &ItemId) -> bool {
        self.position_of(item).is_some()
    }

    /// Exchange the positions of `a` and `b`.
    ///
    /// Swapping an item with itself is a no-op. If either item is missing
    /// the order is left unchanged and [`GlideError::InvalidSwap`] is
    /// returned.
    pub fn swap(&mut self, a: &ItemId, b: &ItemId) -> Result<(), GlideError> {
        match (self.position_of(a), self.position_of(b)) {
            (Some(ia), Some(ib)) => {
                self.items.swap(ia, ib);
                Ok(())
            }
            _ => Err(GlideError::InvalidSwap {
                a: a.clone(),
                b: b.clone(),
            }),
        }
    }

    /// Replace the order with a uniformly random permutation of itself.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
}

impl<'a> IntoIterator for &'a ItemOrder {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc() -> ItemOrder {
        ItemOrder::new(["A", "B", "C"]).unwrap()
    }

    fn keys(order: &ItemOrder) -> Vec<&str> {
        order.iter().map(ItemId::as_str).collect()
    }

    #[test]
    fn test_swap_exchanges_positions() {
        let mut order = abc();
        order.swap(&"A".into(), &"C".into()).unwrap();
        assert_eq!(keys(&order), ["C", "B", "A"]);
    }

    #[test]
    fn test_swap_with_self_is_noop() {
        let mut order = abc();
        order.swap(&"B".into(), &"B".into()).unwrap();
        assert_eq!(order, abc());
    }

    #[test]
    fn test_swap_missing_item_rejected() {
        let mut order = abc();
        let err = order.swap(&"A".into(), &"Z".into()).unwrap_err();
        assert!(matches!(err, GlideError::InvalidSwap { .. }));
        assert_eq!(order, abc());
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let err = ItemOrder::new(["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, GlideError::DuplicateItem(ref id) if id.as_str() == "A"));
    }

    #[test]
    fn test_position_lookup() {
        let order = abc();
        assert_eq!(order.position_of(&"C".into()), Some(2));
        assert!(!order.contains(&"D".into()));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let mut first = abc();
        let mut second = abc();
        first.shuffle(&mut StdRng::seed_from_u64(7));
        second.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn shuffle_preserves_item_set(len in 0usize..40, seed in any::<u64>()) {
            let mut order = ItemOrder::new((0..len).map(|i| format!("item-{i}"))).unwrap();
            order.shuffle(&mut StdRng::seed_from_u64(seed));

            let mut sorted: Vec<String> = order.iter().map(ToString::to_string).collect();
            sorted.sort();
            let mut expected: Vec<String> = (0..len).map(|i| format!("item-{i}")).collect();
            expected.sort();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn swap_is_an_involution(len in 2usize..20, a in 0usize..20, b in 0usize..20) {
            let a = a % len;
            let b = b % len;
            let original = ItemOrder::new((0..len).map(|i| i.to_string())).unwrap();
            let mut order = original.clone();
            let (ia, ib) = (ItemId::from(a.to_string()), ItemId::from(b.to_string()));
            order.swap(&ia, &ib).unwrap();
            order.swap(&ia, &ib).unwrap();
            prop_assert_eq!(order, original);
        }
    }
}
