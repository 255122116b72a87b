//! Ordered collection of pending collisions.
//!
//! The tracker keeps collisions sorted by `(priority, insertion sequence)`:
//! priority 0 comes out before priority 5, and collisions with equal priority
//! come out in the order they were tracked. Because the sequence number makes
//! every entry unique, distinct collisions with the same priority are never
//! merged. Only a true duplicate (same "one", same "other", same priority) is
//! disregarded.
//!
//! Lifecycle per tick: empty → `track`* → iterate → `clear`. The tracker does
//! not clear itself after iteration.
//!
//! Collisions are tracked one way. `(A, B)` and `(B, A)` are different
//! entries, and nothing here stops a caller from tracking both.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::dispatch::collision::{Collision, Priority};

type Slot = (Priority, u64);

/// Priority-ordered set of collisions awaiting resolution.
#[derive(Debug)]
pub struct Tracker<C> {
    collisions: BTreeMap<Slot, Collision<C>>,
    next_seq: u64,
}

impl<C> Default for Tracker<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Tracker<C> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Tracker {
            collisions: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Add `collision` unless an identical one is already tracked.
    ///
    /// Returns `true` if the collision was inserted.
    pub fn track(&mut self, collision: Collision<C>) -> bool
    where
        C: PartialEq,
    {
        let priority = collision.priority();
        let duplicate = self
            .collisions
            .range((priority, 0)..=(priority, u64::MAX))
            .any(|(_, tracked)| {
                tracked.one() == collision.one() && tracked.other() == collision.other()
            });
        if duplicate {
            return false;
        }
        self.collisions.insert((priority, self.next_seq), collision);
        self.next_seq += 1;
        true
    }

    /// Forget every tracked collision.
    pub fn clear(&mut self) {
        self.collisions.clear();
        self.next_seq = 0;
    }

    /// Collisions in handling order.
    pub fn iter(&self) -> Iter<'_, C> {
        Iter {
            inner: self.collisions.values(),
        }
    }

    /// Remove and return every collision in handling order.
    pub fn drain(&mut self) -> impl Iterator<Item = Collision<C>> + use<C> {
        self.next_seq = 0;
        std::mem::take(&mut self.collisions).into_values()
    }

    pub fn len(&self) -> usize {
        self.collisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Borrowing iterator over a [`Tracker`], most urgent first.
pub struct Iter<'a, C> {
    inner: btree_map::Values<'a, Slot, Collision<C>>,
}

impl<'a, C> Iterator for Iter<'a, C> {
    type Item = &'a Collision<C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, C> IntoIterator for &'a Tracker<C> {
    type Item = &'a Collision<C>;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::collidable::Collidable;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag(&'static str);

    impl Collidable for Tag {
        type Shape = ();

        fn collision_key(&self) -> &str {
            self.0
        }

        fn bounding_shape(&self) -> &() {
            &()
        }
    }

    fn collision(one: &'static str, other: &'static str, priority: u8) -> Collision<Tag> {
        Collision::with_priority(Tag(one), Tag(other), Priority::new(priority).unwrap())
    }

    fn keys(tracker: &Tracker<Tag>) -> Vec<String> {
        tracker
            .iter()
            .map(|c| format!("{}:{}", c.collision_key(), c.priority()))
            .collect()
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker: Tracker<Tag> = Tracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.iter().count(), 0);
    }

    #[test]
    fn test_iterates_lowest_priority_value_first() {
        let mut tracker = Tracker::new();
        tracker.track(collision("a", "b", 3));
        tracker.track(collision("c", "d", 0));
        tracker.track(collision("e", "f", 5));
        assert_eq!(keys(&tracker), vec!["cd:0", "ab:3", "ef:5"]);
    }

    #[test]
    fn test_equal_priorities_keep_insertion_order() {
        let mut tracker = Tracker::new();
        tracker.track(collision("x", "y", 2));
        tracker.track(collision("a", "b", 2));
        tracker.track(collision("m", "n", 2));
        assert_eq!(keys(&tracker), vec!["xy:2", "ab:2", "mn:2"]);
    }

    #[test]
    fn test_true_duplicate_is_disregarded() {
        let mut tracker = Tracker::new();
        assert!(tracker.track(collision("a", "b", 1)));
        assert!(!tracker.track(collision("a", "b", 1)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_same_pair_different_priority_is_kept() {
        let mut tracker = Tracker::new();
        assert!(tracker.track(collision("a", "b", 1)));
        assert!(tracker.track(collision("a", "b", 4)));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_reversed_pair_is_distinct() {
        let mut tracker = Tracker::new();
        assert!(tracker.track(collision("a", "b", 0)));
        assert!(tracker.track(collision("b", "a", 0)));
        assert_eq!(keys(&tracker), vec!["ab:0", "ba:0"]);
    }

    #[test]
    fn test_clear_empties() {
        let mut tracker = Tracker::new();
        tracker.track(collision("a", "b", 0));
        tracker.clear();
        assert!(tracker.is_empty());
        tracker.track(collision("a", "b", 0));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_drain_yields_in_order_and_empties() {
        let mut tracker = Tracker::new();
        tracker.track(collision("late", "", 4));
        tracker.track(collision("early", "", 1));
        let drained: Vec<String> = tracker
            .drain()
            .map(|c| c.collision_key().to_owned())
            .collect();
        assert_eq!(drained, vec!["early", "late"]);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let mut tracker = Tracker::new();
        tracker.track(collision("a", "b", 0));
        let mut count = 0;
        for c in &tracker {
            assert_eq!(c.collision_key(), "ab");
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
