use super::*;
use crate::store::GraphStore;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

/// An edgeless store only provides the vertex records the heap books into.
fn arena(n: usize) -> GraphStore {
    GraphStore::from_edges(n, &[])
}

#[test]
fn test_new_is_empty() {
    let heap = VertexHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_pop_returns_descending_keys() {
    let mut g = arena(5);
    let mut heap = VertexHeap::new();
    for (key, v) in [(0.5, 0), (2.0, 1), (1.5, 2), (0.1, 3), (3.0, 4)] {
        heap.insert(&mut g, key, v);
        heap.check_invariants(&g);
    }
    assert_eq!(heap.peek(), Some((3.0, 4)));

    let mut popped = vec![];
    while let Some((key, _)) = heap.pop(&mut g) {
        heap.check_invariants(&g);
        popped.push(key);
    }
    assert_eq!(popped, vec![3.0, 2.0, 1.5, 0.5, 0.1]);
}

#[test]
fn test_membership_bookkeeping() {
    let mut g = arena(3);
    let mut heap = VertexHeap::new();
    heap.insert(&mut g, 1.0, 0);
    heap.insert(&mut g, 2.0, 1);
    assert!(g[0].is_in_pq);
    assert!(g[1].is_in_pq);
    assert!(!g[2].is_in_pq);

    let (_, top) = heap.pop(&mut g).unwrap();
    assert_eq!(top, 1);
    assert!(!g[1].is_in_pq);
    assert!(g[0].is_in_pq);
    heap.check_invariants(&g);
}

#[test]
fn test_key_of() {
    let mut g = arena(2);
    let mut heap = VertexHeap::new();
    heap.insert(&mut g, 0.25, 0);
    heap.insert(&mut g, 0.75, 1);
    assert_eq!(heap.key_of(&g, 0), 0.25);
    assert_eq!(heap.key_of(&g, 1), 0.75);
}

#[test]
fn test_decrease_key_reorders() {
    let mut g = arena(3);
    let mut heap = VertexHeap::new();
    heap.insert(&mut g, 3.0, 0);
    heap.insert(&mut g, 2.0, 1);
    heap.insert(&mut g, 1.0, 2);

    heap.decrease_key(&mut g, 0, 0.5);
    heap.check_invariants(&g);
    assert_eq!(heap.peek(), Some((2.0, 1)));
    assert_eq!(heap.key_of(&g, 0), 0.5);

    let order: Vec<_> = std::iter::from_fn(|| heap.pop(&mut g).map(|(_, v)| v)).collect();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_slot_indices_track_swaps() {
    let mut g = arena(8);
    let mut heap = VertexHeap::new();
    for v in 0..8 {
        heap.insert(&mut g, f64::from(v), v as u32);
    }
    // After arbitrary churn every stored index must still be exact.
    heap.pop(&mut g);
    heap.decrease_key(&mut g, 6, 0.5);
    heap.pop(&mut g);
    heap.check_invariants(&g);
}

#[test]
fn test_churn_keeps_invariants() {
    let mut g = arena(64);
    let mut heap = VertexHeap::new();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut keys: Vec<Option<f64>> = vec![None; 64];

    for _ in 0..2000 {
        let v = rng.random_range(0..64u32);
        match keys[v as usize] {
            None => {
                let key = rng.random::<f64>() * 100.0;
                heap.insert(&mut g, key, v);
                keys[v as usize] = Some(key);
            }
            Some(key) if key > 1e-6 => {
                let new_key = key * rng.random::<f64>();
                heap.decrease_key(&mut g, v, new_key);
                keys[v as usize] = Some(new_key);
            }
            Some(_) => {
                let (_, popped) = heap.pop(&mut g).unwrap();
                keys[popped as usize] = None;
            }
        }
        heap.check_invariants(&g);
    }
    // Drain; keys must come out in non-increasing order.
    let mut last = f64::INFINITY;
    while let Some((key, _)) = heap.pop(&mut g) {
        assert!(key <= last);
        last = key;
        heap.check_invariants(&g);
    }
}

#[test]
fn test_capacity_shrinks_after_mass_pop() {
    let mut g = arena(1024);
    let mut heap = VertexHeap::new();
    for v in 0..1024u32 {
        heap.insert(&mut g, f64::from(v), v);
    }
    for _ in 0..1020 {
        heap.pop(&mut g);
    }
    assert_eq!(heap.len(), 4);
    heap.check_invariants(&g);
}
