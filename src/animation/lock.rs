//! Per-item gate that keeps at most one FLIP animation in flight per item.

use rustc_hash::FxHashMap;

use crate::item::ItemId;

/// Proof of one lock acquisition, handed back on release.
///
/// Tokens are never reused, so a release that arrives after its
/// acquisition was already undone cannot clear someone else's hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LockToken(pub(crate) u64);

impl LockToken {
    /// Acquisition counter value.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Items whose transform is currently animating, with who holds them.
///
/// An item is locked while it has at least one holder. A FLIP only starts
/// on an item with no holder at all ([`lock`](Self::lock)); a drop
/// snap-back may join an animation already in flight
/// ([`acquire`](Self::acquire)). Each holder releases exactly its own
/// token, so the item stays locked until the last animation on it ends.
///
/// There is no synchronization here: everything runs on one event loop,
/// and whoever takes a token is responsible for scheduling its release.
#[derive(Debug, Clone, Default)]
pub struct TransitionLock {
    holders: FxHashMap<ItemId, Vec<LockToken>>,
    next: u64,
}

impl TransitionLock {
    /// Empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an animation is in flight for `item`.
    #[must_use]
    pub fn is_locked(&self, item: &ItemId) -> bool {
        self.holders.contains_key(item)
    }

    /// Lock a free `item`. Returns `None` if it is already held.
    pub fn lock(&mut self, item: &ItemId) -> Option<LockToken> {
        if self.is_locked(item) {
            return None;
        }
        Some(self.acquire(item))
    }

    /// Add a holder to `item`, whether or not it is already locked.
    pub fn acquire(&mut self, item: &ItemId) -> LockToken {
        self.next += 1;
        let token = LockToken(self.next);
        self.holders.entry(item.clone()).or_default().push(token);
        token
    }

    /// Drop `token`'s hold on `item`. Returns false if it held nothing.
    pub fn release(&mut self, item: &ItemId, token: LockToken) -> bool {
        let Some(tokens) = self.holders.get_mut(item) else {
            return false;
        };
        let before = tokens.len();
        tokens.retain(|held| *held != token);
        let released = tokens.len() != before;
        if tokens.is_empty() {
            let _ = self.holders.remove(item);
        }
        released
    }

    /// Whether `token` still holds `item`.
    #[must_use]
    pub fn holds(&self, item: &ItemId, token: LockToken) -> bool {
        self.holders(item).contains(&token)
    }

    /// Tokens currently holding `item`, oldest first.
    #[must_use]
    pub fn holders(&self, item: &ItemId) -> &[LockToken] {
        self.holders.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of locked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// Whether no item is locked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Locked items in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.holders.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_release_pairing() {
        let mut locks = TransitionLock::new();
        let red = ItemId::from("red");

        assert!(!locks.is_locked(&red));
        let token = locks.lock(&red).unwrap();
        assert!(locks.lock(&red).is_none());
        assert!(locks.is_locked(&red));
        assert_eq!(locks.len(), 1);

        assert!(locks.release(&red, token));
        assert!(!locks.release(&red, token));
        assert!(locks.is_empty());
    }

    #[test]
    fn test_item_stays_locked_until_last_holder_releases() {
        let mut locks = TransitionLock::new();
        let red = ItemId::from("red");

        let flip = locks.lock(&red).unwrap();
        let dropped = locks.acquire(&red);
        assert_ne!(flip, dropped);
        assert_eq!(locks.holders(&red), [flip, dropped]);

        assert!(locks.release(&red, flip));
        assert!(locks.is_locked(&red));
        assert!(locks.lock(&red).is_none());

        assert!(locks.release(&red, dropped));
        assert!(!locks.is_locked(&red));
    }

    #[test]
    fn test_stale_release_cannot_clear_new_hold() {
        let mut locks = TransitionLock::new();
        let red = ItemId::from("red");

        let old = locks.lock(&red).unwrap();
        assert!(locks.release(&red, old));
        let new = locks.lock(&red).unwrap();

        assert!(!locks.release(&red, old));
        assert!(locks.holds(&red, new));
        assert!(!locks.holds(&red, old));
        assert!(new.generation() > old.generation());
    }
}
