//! Indexed min-heap with decrease-key.

pub mod indexed_min_heap;

pub use indexed_min_heap::{HeapEntry, IndexedMinHeap};
