//! Vote-weighted greedy construction of a dominating set.
//!
//! Every vertex casts a vote of `1 / (degree + 1)` for each member of its
//! closed neighborhood for as long as it is undominated. The constructor
//! repeatedly selects the vertex with the highest sum of received votes,
//! updating the votes of the affected neighborhoods through strict priority
//! decreases on the heap. A final minimality pass drops selections whose
//! whole closed neighborhood is covered at least twice.
//!
//! The constructor works incrementally: called on a partially dominated
//! graph (after a deconstruction pass) it completes the existing selection
//! rather than starting over.

use crate::heap::VertexHeap;
use crate::store::{GraphStore, VertexRef};

/// Initializes the vote of every active vertex from its degree in the
/// reduced graph. Called once per solve, before the first construction.
pub fn init_votes(g: &mut GraphStore) {
    for i in 0..g.active_len() {
        let v = g.active()[i];
        let vote = 1.0 / (g[v].degree() + 1) as f64;
        g[v].vote = vote;
    }
}

/// Extends the current selection until every active vertex is dominated,
/// then minimizes it. `current_size` is the number of already selected
/// vertices; the new selection size is returned.
pub fn construct(g: &mut GraphStore, current_size: usize) -> usize {
    let mut undominated = 0usize;
    let mut heap = VertexHeap::new();

    for i in 0..g.active_len() {
        let v = g.active()[i];
        let mut weight = 0.0;
        if g[v].dominated_count == 0 {
            undominated += 1;
            weight = g[v].vote;
        }
        for j in 0..g[v].degree() {
            let u = g[v].neighbors[j];
            if g[u].dominated_count == 0 {
                weight += g[u].vote;
            }
        }
        g[v].is_in_pq = false;
        if weight > 0.0 {
            heap.insert(g, weight, v);
        }
    }

    let mut size = current_size;
    while undominated > 0 {
        debug_assert!(!heap.is_empty());
        let (_, v) = heap
            .pop(g)
            .expect("undominated vertices imply a non-empty heap");
        debug_assert!(!g[v].in_ds);
        g[v].in_ds = true;
        size += 1;

        g[v].dominated_count += 1;
        let v_newly_dominated = g[v].dominated_count == 1;
        if v_newly_dominated {
            undominated -= 1;
        }
        let v_vote = g[v].vote;

        for i in 0..g[v].degree() {
            let u1 = g[v].neighbors[i];
            g[u1].dominated_count += 1;
            // v's own vote stops flowing to u1 once v is covered.
            let mut delta = if v_newly_dominated { v_vote } else { 0.0 };
            if g[u1].dominated_count == 1 {
                // v is the first to dominate u1: u1 stops voting for itself
                // and for every neighbor still in the queue.
                delta += g[u1].vote;
                undominated -= 1;
                let u1_vote = g[u1].vote;
                for j in 0..g[u1].degree() {
                    let u2 = g[u1].neighbors[j];
                    if g[u2].is_in_pq {
                        let key = heap.key_of(g, u2);
                        heap.decrease_key(g, u2, key - u1_vote);
                    }
                }
            }
            if g[u1].is_in_pq && delta > 0.0 {
                let key = heap.key_of(g, u1);
                heap.decrease_key(g, u1, key - delta);
            }
        }
    }

    make_minimal(g, size)
}

/// Drops every selected vertex whose closed neighborhood is covered at least
/// twice throughout; afterwards no selection can be removed without
/// uncovering some vertex. Returns the new selection size.
fn make_minimal(g: &mut GraphStore, current_size: usize) -> usize {
    let mut size = current_size;
    for i in 0..g.active_len() {
        let v = g.active()[i];
        if !g[v].in_ds || g[v].dominated_count <= 1 {
            continue;
        }
        let mut redundant = true;
        for j in 0..g[v].degree() {
            let u = g[v].neighbors[j];
            if g[u].dominated_count < 2 {
                debug_assert!(g[u].dominated_count >= 1);
                redundant = false;
                break;
            }
        }
        if redundant {
            g[v].in_ds = false;
            size -= 1;
            g[v].dominated_count -= 1;
            for j in 0..g[v].degree() {
                let u = g[v].neighbors[j];
                g[u].dominated_count -= 1;
            }
        }
    }
    size
}

/// Removes `v` from the selection, lowering the domination counters of its
/// closed neighborhood. `v` must currently be selected.
pub(crate) fn remove_from_ds(g: &mut GraphStore, v: VertexRef) {
    debug_assert!(g[v].in_ds);
    g[v].dominated_count -= 1;
    for i in 0..g[v].degree() {
        let u = g[v].neighbors[i];
        g[u].dominated_count -= 1;
    }
    g[v].in_ds = false;
}

#[cfg(test)]
#[path = "../unit_tests/solvers/greedy.rs"]
mod tests;
