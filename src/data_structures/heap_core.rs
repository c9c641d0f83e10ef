use crate::data_structures::order::{Comparator, MinOrder};

/// Array-backed binary heap ordered by a [`Comparator`]
///
/// The core knows nothing about keys. Every primitive that relocates entries
/// reports each relocation to a caller-supplied observer `(entry, new_index)`,
/// which is how [`IndexedHeap`](crate::data_structures::IndexedHeap) keeps its
/// key map in lockstep. Used on its own it is a plain priority queue.
#[derive(Debug, Clone)]
pub struct HeapCore<T, O = MinOrder> {
    /// Entries laid out as an implicit binary tree: children of `i` at `2i+1` and `2i+2`
    data: Vec<T>,

    /// Decides which of two entries sits closer to the root
    order: O,
}

impl<T, O: Default> Default for HeapCore<T, O> {
    fn default() -> Self {
        HeapCore {
            data: Vec::new(),
            order: O::default(),
        }
    }
}

impl<T, O> HeapCore<T, O>
where
    O: Comparator<T>,
{
    /// Creates a new empty heap with the default ordering
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
        HeapCore {
            data: Vec::with_capacity(capacity),
            order: O::default(),
        }
    }

    /// Creates a new empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        HeapCore {
            data: Vec::new(),
            order,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in array order (heap-ordered, not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pushes an entry and restores heap order
    pub fn push(&mut self, item: T) {
        let index = self.append(item);
        self.sift_up(index, |_, _| {});
    }

    /// Removes and returns the root (the best entry under the comparator)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let root = self.swap_remove(0);
        self.sift_down(0, |_, _| {});
        Some(root)
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Consumes the heap, returning its entries best-first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns true if every parent is not beaten by either of its children
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.order.prefers(&self.data[i], &self.data[parent])
        })
    }

    /// Moves the entry at `index` toward the root while it beats its parent
    ///
    /// Every swap reports both relocated entries to `on_move`. Returns the
    /// entry's final position. Out-of-range indices are a no-op.
    pub fn sift_up<F>(&mut self, mut index: usize, mut on_move: F) -> usize
    where
        F: FnMut(&T, usize),
    {
        if index >= self.data.len() {
            return index;
        }
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.order.prefers(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            on_move(&self.data[index], index);
            on_move(&self.data[parent], parent);
            index = parent;
        }
        index
    }

    /// Moves the entry at `index` toward the leaves while a child beats it
    ///
    /// Swaps with the better of the two children. Every swap reports both
    /// relocated entries to `on_move`. Returns the entry's final position.
    pub fn sift_down<F>(&mut self, mut index: usize, mut on_move: F) -> usize
    where
        F: FnMut(&T, usize),
    {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut best = left;
            if right < len && self.order.prefers(&self.data[right], &self.data[left]) {
                best = right;
            }

            if !self.order.prefers(&self.data[best], &self.data[index]) {
                break;
            }
            self.data.swap(index, best);
            on_move(&self.data[index], index);
            on_move(&self.data[best], best);
            index = best;
        }
        index
    }

    /// Appends without sifting; returns the new entry's index
    pub(crate) fn append(&mut self, item: T) -> usize {
        self.data.push(item);
        self.data.len() - 1
    }

    /// Removes the entry at `index`, moving the last entry into its slot
    ///
    /// Leaves heap order to the caller.
    pub(crate) fn swap_remove(&mut self, index: usize) -> T {
        self.data.swap_remove(index)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable access to a slot; the caller must sift afterwards
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }
}
