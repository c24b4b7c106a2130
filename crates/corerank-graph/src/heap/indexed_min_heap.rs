//! Array-backed binary min-heap paired with an element → slot index.
//!
//! `std::collections::BinaryHeap` cannot locate an arbitrary element, so
//! lowering the key of a vertex deep in the queue would need a linear scan.
//! Here every swap also updates `positions`, which keeps decrease-key at
//! O(log n).

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use corerank_core::errors::HeapError;
use corerank_core::types::FxHashMap;

/// A `(key, element)` pair held by the heap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<K> {
    pub key: f64,
    pub element: K,
}

impl<K: Ord> HeapEntry<K> {
    /// Total order: key first, then element. Keys compare with `f64::total_cmp`.
    fn cmp_order(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.element.cmp(&other.element))
    }
}

/// Min-heap keyed by `f64`, with unique elements and O(log n) decrease-key.
///
/// Invariants:
/// - `entries[parent(i)] <= entries[i]` for every `i > 0`
/// - `positions[entries[i].element] == i` for every `i`
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K> {
    entries: Vec<HeapEntry<K>>,
    positions: FxHashMap<K, usize>,
}

impl<K> Default for IndexedMinHeap<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<K> IndexedMinHeap<K>
where
    K: Ord + Hash + Clone + Debug,
{
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a heap from pairs in arbitrary order in O(n).
    ///
    /// Fails with `DuplicateElement` if an element appears twice.
    pub fn build<I>(pairs: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (f64, K)>,
    {
        let entries: Vec<HeapEntry<K>> = pairs
            .into_iter()
            .map(|(key, element)| HeapEntry { key, element })
            .collect();

        let mut positions =
            FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for (slot, entry) in entries.iter().enumerate() {
            if positions.insert(entry.element.clone(), slot).is_some() {
                return Err(HeapError::DuplicateElement {
                    element: format!("{:?}", entry.element),
                });
            }
        }

        let mut heap = Self { entries, positions };
        for slot in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(slot);
        }
        Ok(heap)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The minimum pair without removing it.
    pub fn peek(&self) -> Option<(f64, &K)> {
        self.entries.first().map(|e| (e.key, &e.element))
    }

    pub fn contains(&self, element: &K) -> bool {
        self.positions.contains_key(element)
    }

    /// Current key of `element`, if held.
    pub fn key_of(&self, element: &K) -> Option<f64> {
        self.positions.get(element).map(|&slot| self.entries[slot].key)
    }

    /// Current array slot of `element`, if held.
    pub fn position_of(&self, element: &K) -> Option<usize> {
        self.positions.get(element).copied()
    }

    /// Remove and return the minimum `(key, element)` pair.
    pub fn extract_min(&mut self) -> Result<(f64, K), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let top = self.entries.pop().ok_or(HeapError::EmptyHeap)?;
        self.positions.remove(&top.element);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((top.key, top.element))
    }

    /// Lower the key of `element` to `new_key` and restore heap order.
    ///
    /// `new_key` greater than the current key, or NaN, is a contract
    /// violation and fails with `InvalidKey`. An equal key is accepted.
    pub fn decrease_key(&mut self, element: &K, new_key: f64) -> Result<(), HeapError> {
        let slot = self
            .positions
            .get(element)
            .copied()
            .ok_or_else(|| HeapError::MissingElement {
                element: format!("{element:?}"),
            })?;

        let current = self.entries[slot].key;
        if new_key.is_nan() || new_key.total_cmp(&current) == Ordering::Greater {
            return Err(HeapError::InvalidKey {
                element: format!("{element:?}"),
                current,
                new: new_key,
            });
        }

        self.entries[slot].key = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Scan the whole heap and verify ordering and index consistency.
    pub fn check_invariants(&self) -> bool {
        if self.positions.len() != self.entries.len() {
            return false;
        }
        self.entries.iter().enumerate().all(|(slot, entry)| {
            let ordered = slot == 0
                || self.entries[(slot - 1) / 2].cmp_order(entry) != Ordering::Greater;
            ordered && self.positions.get(&entry.element) == Some(&slot)
        })
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.entries[a].cmp_order(&self.entries[b]) == Ordering::Less
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < len && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.precedes(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    /// Swap two slots and keep `positions` in step.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(p) = self.positions.get_mut(&self.entries[a].element) {
            *p = a;
        }
        if let Some(p) = self.positions.get_mut(&self.entries[b].element) {
            *p = b;
        }
    }
}
