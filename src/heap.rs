//! Indexed binary max-heap over vertex records.
//!
//! A textbook array heap with one extra contract: every vertex in the heap
//! knows its own slot (`pq_index` on the [`Vertex`](crate::store::Vertex)
//! record), so a priority decrease on a known vertex is O(log n) without a
//! lookup. Because the slot bookkeeping lives on the vertex records, every
//! mutating operation takes the [`GraphStore`] as well.
//!
//! Keys are wrapped in [`OrderedFloat`] so real-valued priorities carry a
//! total order; ties break deterministically by heap position. The greedy
//! constructor only ever lowers priorities, so there is no `increase_key`.

use crate::store::{GraphStore, VertexRef};
use ordered_float::OrderedFloat;

const MIN_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: OrderedFloat<f64>,
    vertex: VertexRef,
}

/// Max-heap of `(priority, vertex)` pairs with slot bookkeeping on the
/// vertex records.
#[derive(Debug)]
pub struct VertexHeap {
    entries: Vec<Entry>,
}

impl Default for VertexHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MIN_CAPACITY),
        }
    }

    /// Number of vertices in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the heap empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `v` with the given priority. `v` must not already be present.
    pub fn insert(&mut self, g: &mut GraphStore, key: f64, v: VertexRef) {
        debug_assert!(!g[v].is_in_pq);
        let slot = self.entries.len();
        self.entries.push(Entry {
            key: OrderedFloat(key),
            vertex: v,
        });
        g[v].is_in_pq = true;
        g[v].pq_index = slot as u32;
        self.sift_up(g, slot);
    }

    /// The maximum-priority pair, without removing it.
    pub fn peek(&self) -> Option<(f64, VertexRef)> {
        self.entries.first().map(|e| (e.key.0, e.vertex))
    }

    /// Removes and returns the maximum-priority pair. Clears the vertex's
    /// membership flag.
    pub fn pop(&mut self, g: &mut GraphStore) -> Option<(f64, VertexRef)> {
        let top = *self.entries.first()?;
        let last = self.entries.pop().expect("non-empty heap has a last entry");
        if !self.entries.is_empty() {
            self.entries[0] = last;
            g[last.vertex].pq_index = 0;
            self.sift_down(g, 0);
        }
        g[top.vertex].is_in_pq = false;

        // Hand back slack once occupancy drops below a quarter; shrinking
        // never goes under the minimum footprint.
        let cap = self.entries.capacity();
        if cap > MIN_CAPACITY && self.entries.len() < cap / 4 {
            self.entries.shrink_to((cap / 2).max(MIN_CAPACITY));
        }
        Some((top.key.0, top.vertex))
    }

    /// Current priority of `v`, which must be in the heap.
    pub fn key_of(&self, g: &GraphStore, v: VertexRef) -> f64 {
        debug_assert!(g[v].is_in_pq);
        debug_assert!((g[v].pq_index as usize) < self.entries.len());
        self.entries[g[v].pq_index as usize].key.0
    }

    /// Lowers the priority of `v` to `new_key`. The new key must be strictly
    /// smaller than the current one; only a sift-down can be needed.
    pub fn decrease_key(&mut self, g: &mut GraphStore, v: VertexRef, new_key: f64) {
        debug_assert!(g[v].is_in_pq);
        let slot = g[v].pq_index as usize;
        debug_assert!(slot < self.entries.len());
        debug_assert_eq!(self.entries[slot].vertex, v);
        debug_assert!(OrderedFloat(new_key) < self.entries[slot].key);

        self.entries[slot].key = OrderedFloat(new_key);
        self.sift_down(g, slot);
    }

    fn sift_up(&mut self, g: &mut GraphStore, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].key > self.entries[parent].key {
                self.swap(g, slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, g: &mut GraphStore, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            if left >= self.entries.len() {
                return;
            }
            // Ties between children go left.
            let child = if right < self.entries.len()
                && self.entries[right].key > self.entries[left].key
            {
                right
            } else {
                left
            };
            if self.entries[child].key > self.entries[slot].key {
                self.swap(g, slot, child);
                slot = child;
            } else {
                return;
            }
        }
    }

    fn swap(&mut self, g: &mut GraphStore, a: usize, b: usize) {
        self.entries.swap(a, b);
        g[self.entries[a].vertex].pq_index = a as u32;
        g[self.entries[b].vertex].pq_index = b as u32;
    }

    /// Checks the heap-order and bookkeeping invariants. Test-only.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self, g: &GraphStore) {
        for (slot, entry) in self.entries.iter().enumerate() {
            if slot > 0 {
                let parent = (slot - 1) / 2;
                assert!(
                    self.entries[parent].key >= entry.key,
                    "heap order violated at slot {}",
                    slot
                );
            }
            assert!(g[entry.vertex].is_in_pq, "member without membership flag");
            assert_eq!(
                g[entry.vertex].pq_index as usize, slot,
                "stale slot index for vertex {}",
                g[entry.vertex].id()
            );
        }
    }
}

#[cfg(test)]
#[path = "unit_tests/heap.rs"]
mod tests;
