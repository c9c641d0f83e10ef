pub mod heap_core;
pub mod indexed_heap;
pub mod order;

pub use heap_core::HeapCore;
pub use indexed_heap::{IndexedHeap, IndexedMaxHeap, IndexedMinHeap};
pub use order::{Comparator, FnOrder, MaxOrder, MinOrder};
