use std::collections::HashMap;
use std::hash::Hash;

use crate::data_structures::heap_core::HeapCore;
use crate::data_structures::order::{Comparator, MaxOrder, MinOrder};
use crate::{Error, Result};

/// Indexed min-heap: smallest value at the root
pub type IndexedMinHeap<K, V> = IndexedHeap<K, V, MinOrder>;

/// Indexed max-heap: largest value at the root
pub type IndexedMaxHeap<K, V> = IndexedHeap<K, V, MaxOrder>;

/// Lifts a comparator on values to one on `(key, value)` entries
#[derive(Debug, Default, Clone, Copy)]
struct ByValue<O>(O);

impl<K, V, O: Comparator<V>> Comparator<(K, V)> for ByValue<O> {
    #[inline]
    fn prefers(&self, a: &(K, V), b: &(K, V)) -> bool {
        self.0.prefers(&a.1, &b.1)
    }
}

/// Binary heap of `(key, value)` entries with O(1) lookup by key
///
/// Keys are unique. Values are priorities ordered by `O`. Besides the usual
/// heap operations, entries can be looked up, re-prioritized and removed by
/// key in O(log n).
///
/// The heap array and the key -> position map are only touched together:
/// every relocation performed by a sift is mirrored into the map, so for
/// every present key `k`, the entry at `index_of_key(k)` has key `k`.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K, V, O = MinOrder> {
    /// Entries in heap order
    heap: HeapCore<(K, V), ByValue<O>>,

    /// Position of every present key in `heap`
    positions: HashMap<K, usize>,
}

/// Returns a sift observer that records each relocated entry's new position
fn mirror<K, V>(positions: &mut HashMap<K, usize>) -> impl FnMut(&(K, V), usize) + '_
where
    K: Hash + Eq,
{
    move |(key, _), at| {
        if let Some(slot) = positions.get_mut(key) {
            *slot = at;
        }
    }
}

impl<K, V, O: Default> Default for IndexedHeap<K, V, O> {
    fn default() -> Self {
        IndexedHeap {
            heap: HeapCore::default(),
            positions: HashMap::new(),
        }
    }
}

impl<K, V, O> IndexedHeap<K, V, O>
where
    K: Hash + Eq + Clone,
    O: Comparator<V>,
{
    /// Creates a new empty heap
    pub fn new() -> Self
    where
        O: Default,
    {
        Self::default()
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self
    where
        O: Default,
    {
        IndexedHeap {
            heap: HeapCore::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a new empty heap ordered by a custom comparator
    pub fn with_order(order: O) -> Self {
        IndexedHeap {
            heap: HeapCore::with_order(ByValue(order)),
            positions: HashMap::new(),
        }
    }

    /// Builds a heap from a batch of entries, as if each were `add`ed in turn
    ///
    /// Fails with [`Error::DuplicateKey`] on the first repeated key.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        O: Default,
    {
        let entries = entries.into_iter();
        let mut heap = Self::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            heap.add(key, value)?;
        }
        Ok(heap)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Inserts a new entry
    ///
    /// Fails with [`Error::DuplicateKey`] if `key` is already present; the
    /// existing entry is left untouched.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.positions.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        let index = self.heap.append((key.clone(), value));
        self.positions.insert(key, index);
        self.heap.sift_up(index, mirror(&mut self.positions));
        Ok(())
    }

    /// Removes and returns the root entry
    pub fn pop(&mut self) -> Result<(K, V)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let root = self.heap.swap_remove(0);
        self.positions.remove(&root.0);

        // The former last entry now sits at the root
        if let Some((moved, _)) = self.heap.get(0) {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = 0;
            }
        }
        self.heap.sift_down(0, mirror(&mut self.positions));
        Ok(root)
    }

    /// Returns the root entry without removing it
    pub fn peek(&self) -> Result<(&K, &V)> {
        self.heap
            .peek()
            .map(|(key, value)| (key, value))
            .ok_or(Error::EmptyHeap)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current array position of `key`
    pub fn index_of_key(&self, key: &K) -> Result<usize> {
        self.positions.get(key).copied().ok_or(Error::KeyNotFound)
    }

    /// Current value of `key`
    pub fn value_of_key(&self, key: &K) -> Result<&V> {
        let index = self.index_of_key(key)?;
        self.heap
            .get(index)
            .map(|(_, value)| value)
            .ok_or(Error::KeyNotFound)
    }

    /// Reads the entry at an array position, e.g. one returned by `index_of_key`
    pub fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        self.heap.get(index).map(|(key, value)| (key, value))
    }

    /// Replaces the value of `key` and restores heap order
    ///
    /// The new value may be better or worse than the old one; both sift
    /// directions are attempted and at most one of them moves the entry.
    pub fn update_key(&mut self, key: &K, value: V) -> Result<()> {
        let index = self.index_of_key(key)?;
        match self.heap.get_mut(index) {
            Some(entry) => entry.1 = value,
            None => return Err(Error::KeyNotFound),
        }
        let index = self.heap.sift_up(index, mirror(&mut self.positions));
        self.heap.sift_down(index, mirror(&mut self.positions));
        Ok(())
    }

    /// Removes the entry for `key` and returns it
    ///
    /// The last entry fills the vacated slot and is sifted in whichever
    /// direction it needs: it may beat its new parent as well as lose to its
    /// new children.
    pub fn remove_key(&mut self, key: &K) -> Result<(K, V)> {
        let index = self.positions.remove(key).ok_or(Error::KeyNotFound)?;
        let removed = self.heap.swap_remove(index);

        if let Some((moved, _)) = self.heap.get(index) {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = index;
            }
        }
        let index = self.heap.sift_up(index, mirror(&mut self.positions));
        self.heap.sift_down(index, mirror(&mut self.positions));
        Ok(removed)
    }

    /// Iterates over entries in array order (heap-ordered, not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.heap.as_slice().iter().map(|(key, value)| (key, value))
    }

    /// Iterates over present keys in array order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.heap.as_slice().iter().map(|(key, _)| key)
    }

    /// Consumes the heap, returning its entries best-first
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.heap.into_sorted_vec()
    }

    /// Verifies heap order and that the key map and array agree
    ///
    /// O(n); meant for tests and debugging.
    pub fn check_invariants(&self) -> bool {
        if self.positions.len() != self.heap.len() || !self.heap.is_heap_ordered() {
            return false;
        }
        self.heap
            .as_slice()
            .iter()
            .enumerate()
            .all(|(index, (key, _))| self.positions.get(key) == Some(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::order::FnOrder;

    #[test]
    fn seeded_heap_pops_in_order() {
        let mut heap: IndexedMinHeap<i32, i32> =
            IndexedHeap::from_entries(vec![(1, 1), (2, 2), (3, 3)]).unwrap();

        for expected in 1..=3 {
            assert_eq!(heap.pop().unwrap(), (expected, expected));
            assert!(!heap.contains_key(&expected));
            assert!(heap.check_invariants());
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn decreased_key_becomes_root() {
        let mut heap: IndexedMinHeap<i32, i32> =
            IndexedHeap::from_entries((1..=6).map(|i| (i, i))).unwrap();

        assert_eq!(heap.pop().unwrap(), (1, 1));
        heap.update_key(&2, -2).unwrap();
        assert_eq!(heap.pop().unwrap(), (2, -2));
        assert!(heap.check_invariants());
    }

    #[test]
    fn increased_key_sinks() {
        let mut heap: IndexedMinHeap<&str, u32> =
            IndexedHeap::from_entries(vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]).unwrap();

        heap.update_key(&"a", 10).unwrap();
        assert!(heap.check_invariants());
        assert_eq!(heap.peek().unwrap(), (&"b", &2));
        assert_eq!(*heap.value_of_key(&"a").unwrap(), 10);
    }

    #[test]
    fn duplicate_add_is_rejected_without_overwrite() {
        let mut heap: IndexedMinHeap<u8, i32> = IndexedHeap::new();
        heap.add(7, 70).unwrap();

        assert!(matches!(heap.add(7, 1), Err(Error::DuplicateKey)));
        assert_eq!(*heap.value_of_key(&7).unwrap(), 70);
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn seeding_with_duplicate_fails() {
        let seeded = IndexedMinHeap::<i32, i32>::from_entries(vec![(1, 1), (1, 2)]);
        assert!(matches!(seeded, Err(Error::DuplicateKey)));
    }

    #[test]
    fn empty_heap_errors() {
        let mut heap: IndexedMinHeap<u8, u8> = IndexedHeap::new();
        assert!(matches!(heap.pop(), Err(Error::EmptyHeap)));
        assert!(matches!(heap.peek(), Err(Error::EmptyHeap)));
    }

    #[test]
    fn missing_key_errors() {
        let mut heap: IndexedMinHeap<u8, u8> = IndexedHeap::new();
        heap.add(1, 1).unwrap();

        assert!(matches!(heap.index_of_key(&2), Err(Error::KeyNotFound)));
        assert!(matches!(heap.value_of_key(&2), Err(Error::KeyNotFound)));
        assert!(matches!(heap.update_key(&2, 0), Err(Error::KeyNotFound)));
        assert!(matches!(heap.remove_key(&2), Err(Error::KeyNotFound)));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn index_of_key_points_at_its_entry() {
        let mut heap: IndexedMinHeap<u32, u32> = IndexedHeap::new();
        for (key, value) in [(10, 5), (11, 3), (12, 8), (13, 1), (14, 4)] {
            heap.add(key, value).unwrap();
            for k in heap.keys().copied().collect::<Vec<_>>() {
                let index = heap.index_of_key(&k).unwrap();
                assert_eq!(heap.entry_at(index).map(|(k, _)| *k), Some(k));
            }
        }
    }

    #[test]
    fn remove_key_sifts_relocated_entry_up() {
        // Layout after these adds is exactly the insertion order:
        //            1
        //       100      2
        //     101  102  3  4
        let mut heap: IndexedMinHeap<u32, u32> = IndexedHeap::new();
        for value in [1, 100, 2, 101, 102, 3, 4] {
            heap.add(value, value).unwrap();
        }
        assert_eq!(heap.index_of_key(&101).unwrap(), 3);

        // The last entry (4) lands under 100 and has to climb
        assert_eq!(heap.remove_key(&101).unwrap(), (101, 101));
        assert!(heap.check_invariants());
        assert_eq!(heap.index_of_key(&4).unwrap(), 1);

        let order: Vec<u32> = heap.into_sorted_vec().into_iter().map(|(_, v)| v).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 100, 102]);
    }

    #[test]
    fn remove_last_and_only_entries() {
        let mut heap: IndexedMinHeap<u8, u8> = IndexedHeap::from_entries(vec![(1, 1), (2, 2)]).unwrap();
        assert_eq!(heap.remove_key(&2).unwrap(), (2, 2));
        assert!(heap.check_invariants());
        assert_eq!(heap.remove_key(&1).unwrap(), (1, 1));
        assert!(heap.is_empty());
        assert!(heap.check_invariants());
    }

    #[test]
    fn max_heap_pops_largest_first() {
        let mut heap: IndexedMaxHeap<char, i32> =
            IndexedHeap::from_entries(vec![('a', 3), ('b', 9), ('c', -1), ('d', 5)]).unwrap();

        assert_eq!(heap.pop().unwrap(), ('b', 9));
        heap.update_key(&'c', 100).unwrap();
        assert_eq!(heap.pop().unwrap(), ('c', 100));
        assert_eq!(heap.pop().unwrap(), ('d', 5));
        assert_eq!(heap.pop().unwrap(), ('a', 3));
    }

    #[test]
    fn custom_comparator_orders_floats() {
        let mut heap = IndexedHeap::with_order(FnOrder::new(|a: &f64, b: &f64| a < b));
        heap.add("x", 2.5).unwrap();
        heap.add("y", 0.5).unwrap();
        heap.add("z", 1.5).unwrap();

        assert_eq!(heap.pop().unwrap(), ("y", 0.5));
        assert_eq!(heap.pop().unwrap(), ("z", 1.5));
        assert_eq!(heap.pop().unwrap(), ("x", 2.5));
    }

    #[test]
    fn clear_forgets_keys() {
        let mut heap: IndexedMinHeap<u8, u8> = IndexedHeap::from_entries(vec![(1, 1), (2, 2)]).unwrap();
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains_key(&1));
        heap.add(1, 5).unwrap();
        assert!(heap.check_invariants());
    }
}
