//! Mutable graph store for the solver core.
//!
//! All vertex records live in a single arena and are addressed by stable
//! [`VertexRef`] slots; neighbor lists hold slots, never ids, so the
//! representation has no ownership cycles. The `active` sequence lists the
//! vertices still part of the problem and supports O(1) removal by
//! swap-with-last; the `fixed` sequence records vertices that are already
//! committed to the output.
//!
//! Mutations that change the graph structure go through the reduction
//! engine; the greedy phase only toggles selection state and domination
//! counters.

use crate::io::PaceInstance;
use crate::topology::SimpleGraph;
use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

/// Stable arena slot of a vertex.
pub type VertexRef = u32;

/// A vertex record.
///
/// `neighbor_tag`, `pq_index`/`is_in_pq` and `queued_marker` are scratch
/// state owned by one phase at a time: the reduction engine tags
/// neighborhoods, the heap tracks its slots, the deconstruction pass marks
/// BFS visits. The phases never overlap.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Adjacent vertices, as arena slots. Length is the degree.
    pub(crate) neighbors: Vec<VertexRef>,
    /// Greedy priority contribution, `1 / (degree + 1)` on the reduced graph.
    pub(crate) vote: f64,
    /// External vertex id from the input. Unique, never 0.
    pub(crate) id: u32,
    /// How many selected vertices of the closed neighborhood cover this one.
    /// 0 means undominated.
    pub(crate) dominated_count: u32,
    /// Reduction scratch: id of the vertex whose sweep tagged this record,
    /// or 0 for untagged.
    pub(crate) neighbor_tag: u32,
    /// Deconstruction scratch: epoch of the BFS that last enqueued this
    /// vertex.
    pub(crate) queued_marker: u32,
    /// Heap slot of this vertex while it is in the priority queue.
    pub(crate) pq_index: u32,
    /// Whether the vertex currently sits in the priority queue.
    pub(crate) is_in_pq: bool,
    /// Whether the reduction engine has eliminated this vertex.
    pub(crate) is_removed: bool,
    /// Whether the vertex is currently selected into the dominating set.
    pub(crate) in_ds: bool,
}

impl Vertex {
    fn new(id: u32) -> Self {
        Self {
            neighbors: Vec::new(),
            vote: 0.0,
            id,
            dominated_count: 0,
            neighbor_tag: 0,
            queued_marker: 0,
            pq_index: 0,
            is_in_pq: false,
            is_removed: false,
            in_ds: false,
        }
    }

    /// External id of this vertex.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of incident edges in the active graph.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Adjacent vertices, as arena slots.
    pub fn neighbors(&self) -> &[VertexRef] {
        &self.neighbors
    }

    /// Is this vertex covered by the current selection?
    pub fn is_dominated(&self) -> bool {
        self.dominated_count > 0
    }

    /// Is this vertex currently selected into the dominating set?
    pub fn is_selected(&self) -> bool {
        self.in_ds
    }
}

/// A lightweight record of a vertex committed to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVertex {
    /// External vertex id.
    pub id: u32,
    /// Domination count at the time the vertex was fixed.
    pub dominated_count: u32,
}

/// The mutable graph the solver works on.
///
/// # Example
///
/// ```
/// use domsetsolver::store::GraphStore;
///
/// // Path 1-2-3, ids are 1-based as in the input format.
/// let g = GraphStore::from_edges(3, &[(1, 2), (2, 3)]);
/// assert_eq!(g.active_len(), 3);
/// assert_eq!(g.num_edges(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphStore {
    verts: Vec<Vertex>,
    active: Vec<VertexRef>,
    fixed: Vec<FixedVertex>,
    m: usize,
}

impl GraphStore {
    /// Builds a store for vertices with ids `1..=num_vertices` and the given
    /// edges over those ids.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range endpoints or self-loops.
    pub fn from_edges(num_vertices: usize, edges: &[(u32, u32)]) -> Self {
        let mut verts: Vec<Vertex> = (0..num_vertices).map(|i| Vertex::new(i as u32 + 1)).collect();

        let mut degrees = vec![0usize; num_vertices];
        for &(u, v) in edges {
            assert!(
                u >= 1 && v >= 1 && (u as usize) <= num_vertices && (v as usize) <= num_vertices,
                "edge ({}, {}) references vertex outside 1..={}",
                u,
                v,
                num_vertices
            );
            assert_ne!(u, v, "self-loop on vertex {}", u);
            degrees[u as usize - 1] += 1;
            degrees[v as usize - 1] += 1;
        }
        for (vert, &deg) in verts.iter_mut().zip(&degrees) {
            vert.neighbors.reserve_exact(deg);
        }
        for &(u, v) in edges {
            verts[u as usize - 1].neighbors.push(v - 1);
            verts[v as usize - 1].neighbors.push(u - 1);
        }

        Self {
            verts,
            active: (0..num_vertices as u32).collect(),
            fixed: Vec::with_capacity(128),
            m: edges.len(),
        }
    }

    /// Builds a store from a parsed instance.
    pub fn from_instance(instance: &PaceInstance) -> Self {
        Self::from_edges(instance.num_vertices, &instance.edges)
    }

    /// Builds a store from an instance-level graph; vertex `i` gets id
    /// `i + 1`.
    pub fn from_graph(graph: &SimpleGraph) -> Self {
        let edges: Vec<(u32, u32)> = graph
            .edges()
            .into_iter()
            .map(|(u, v)| (u as u32 + 1, v as u32 + 1))
            .collect();
        Self::from_edges(graph.num_vertices(), &edges)
    }

    /// Number of active vertices.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of edges between active vertices.
    pub fn num_edges(&self) -> usize {
        self.m
    }

    /// The active vertex sequence. Order carries no meaning but is stable
    /// while no vertex is deleted.
    pub fn active(&self) -> &[VertexRef] {
        &self.active
    }

    /// Vertices committed to the output, in insertion order.
    pub fn fixed(&self) -> &[FixedVertex] {
        &self.fixed
    }

    /// Symmetrically deletes all edges incident to `v` and updates the edge
    /// count. `v`'s own neighbor list is released.
    fn remove_edges(&mut self, v: VertexRef) {
        let nbrs = std::mem::take(&mut self.verts[v as usize].neighbors);
        for &u in &nbrs {
            let list = &mut self.verts[u as usize].neighbors;
            let pos = list
                .iter()
                .position(|&x| x == v)
                .expect("neighbor lists must be symmetric");
            list.swap_remove(pos);
        }
        self.m -= nbrs.len();
    }

    /// Marks `v` removed and excises it from the adjacency structure. The
    /// arena record and its active slot stay behind until the sweep deletes
    /// the slot.
    pub(crate) fn mark_removed(&mut self, v: VertexRef) {
        debug_assert!(!self.verts[v as usize].is_removed);
        if !self.verts[v as usize].is_removed {
            self.verts[v as usize].is_removed = true;
            self.remove_edges(v);
        }
    }

    /// Deletes the active slot at `active_idx` by moving the tail there.
    /// The vertex must already be marked removed.
    pub(crate) fn delete_slot(&mut self, active_idx: usize) {
        debug_assert!(self.verts[self.active[active_idx] as usize].is_removed);
        debug_assert!(self.verts[self.active[active_idx] as usize].neighbors.is_empty());
        self.active.swap_remove(active_idx);
    }

    /// Appends a record to the fixed list.
    pub(crate) fn add_to_fixed(&mut self, id: u32, dominated_count: u32) {
        self.fixed.push(FixedVertex { id, dominated_count });
    }

    /// Bumps the domination counter of every neighbor of `v`.
    pub(crate) fn mark_neighbors_dominated(&mut self, v: VertexRef) {
        for i in 0..self.verts[v as usize].neighbors.len() {
            let u = self.verts[v as usize].neighbors[i];
            self.verts[u as usize].dominated_count += 1;
        }
    }

    /// Number of active vertices currently selected.
    pub fn selected_len(&self) -> usize {
        self.active.iter().filter(|&&v| self[v].in_ds).count()
    }

    /// The chosen set in output order: fixed vertices first in insertion
    /// order, then selected active vertices in active-sequence order.
    pub fn solution(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self.fixed.iter().map(|f| f.id).collect();
        out.extend(self.active.iter().filter(|&&v| self[v].in_ds).map(|&v| self[v].id));
        out
    }

    /// Renders the active graph (and optionally the fixed vertices) in dot
    /// format. Dominated vertices are filled green, fixed ones cyan.
    pub fn to_dot(&self, include_fixed: bool, graph_name: Option<&str>) -> String {
        let mut out = String::new();
        let _ = write!(out, "graph {} {{", graph_name.unwrap_or("G"));
        for &v in &self.active {
            let _ = write!(out, "\n\t{}", self[v].id);
            if self[v].dominated_count > 0 {
                let _ = write!(out, "[style=filled, fillcolor=green]");
            }
        }
        if include_fixed {
            for f in &self.fixed {
                let _ = write!(out, "\n\t{}[style=filled, fillcolor=cyan]", f.id);
            }
        }
        for &v in &self.active {
            for &u in &self[v].neighbors {
                if self[u].id >= self[v].id {
                    let _ = write!(out, "\n\t{} -- {}", self[v].id, self[u].id);
                }
            }
        }
        out.push_str("\n}\n");
        out
    }

    /// Checks the structural invariants of the store. Test-only.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        let mut degree_sum = 0usize;
        let mut seen_ids = HashSet::new();
        let active_set: HashSet<VertexRef> = self.active.iter().copied().collect();
        assert_eq!(active_set.len(), self.active.len(), "duplicate active slot");

        for &v in &self.active {
            let vert = &self[v];
            assert!(seen_ids.insert(vert.id), "duplicate id {}", vert.id);
            assert_ne!(vert.id, 0, "id 0 is reserved");
            degree_sum += vert.degree();
            for &u in &vert.neighbors {
                assert_ne!(u, v, "self-loop on slot {}", v);
                assert!(!self[u].is_removed, "edge to removed vertex");
                assert!(
                    self[u].neighbors.contains(&v),
                    "asymmetric edge {} -- {}",
                    vert.id,
                    self[u].id
                );
            }
        }
        assert_eq!(degree_sum, 2 * self.m, "edge count out of sync");

        for vert in &self.verts {
            if vert.is_removed {
                assert!(vert.neighbors.is_empty(), "removed vertex kept edges");
                assert!(!active_set.contains(&(vert.id - 1)), "removed vertex active");
            }
        }
        for f in &self.fixed {
            assert!(seen_ids.insert(f.id), "fixed id {} also active", f.id);
        }
    }
}

impl Index<VertexRef> for GraphStore {
    type Output = Vertex;

    fn index(&self, v: VertexRef) -> &Vertex {
        &self.verts[v as usize]
    }
}

impl IndexMut<VertexRef> for GraphStore {
    fn index_mut(&mut self, v: VertexRef) -> &mut Vertex {
        &mut self.verts[v as usize]
    }
}

#[cfg(test)]
#[path = "unit_tests/store.rs"]
mod tests;
