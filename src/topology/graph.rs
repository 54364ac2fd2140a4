//! Simple undirected graph used at the instance level.
//!
//! [`SimpleGraph`] is the immutable representation of a parsed instance: the
//! solver core copies it into its own mutable store before reducing, and the
//! test suite uses it (together with the named constructors) to build known
//! topologies and to verify that emitted sets actually dominate.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A simple unweighted undirected graph, backed by petgraph's `UnGraph`.
///
/// Vertices are `0..num_vertices`; self-loops and duplicate edges are not
/// representable by the constructors below.
///
/// # Example
///
/// ```
/// use domsetsolver::topology::SimpleGraph;
///
/// let graph = SimpleGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.has_edge(0, 1));
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleGraph {
    inner: UnGraph<(), ()>,
}

impl SimpleGraph {
    /// Creates a graph with `num_vertices` vertices and the given edges.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a vertex index >= `num_vertices`.
    pub fn new(num_vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut inner = UnGraph::new_undirected();
        for _ in 0..num_vertices {
            inner.add_node(());
        }
        for (u, v) in edges {
            assert!(
                u < num_vertices && v < num_vertices,
                "edge ({}, {}) references vertex >= num_vertices ({})",
                u,
                v,
                num_vertices
            );
            inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        Self { inner }
    }

    /// Creates an edgeless graph with the given number of vertices.
    pub fn empty(num_vertices: usize) -> Self {
        Self::new(num_vertices, vec![])
    }

    /// Creates a complete graph (all vertices connected).
    pub fn complete(num_vertices: usize) -> Self {
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                edges.push((i, j));
            }
        }
        Self::new(num_vertices, edges)
    }

    /// Creates a path graph (0-1-2-...-n).
    pub fn path(num_vertices: usize) -> Self {
        let edges: Vec<_> = (0..num_vertices.saturating_sub(1))
            .map(|i| (i, i + 1))
            .collect();
        Self::new(num_vertices, edges)
    }

    /// Creates a cycle graph (0-1-2-...-n-0).
    pub fn cycle(num_vertices: usize) -> Self {
        if num_vertices < 3 {
            return Self::path(num_vertices);
        }
        let mut edges: Vec<_> = (0..num_vertices - 1).map(|i| (i, i + 1)).collect();
        edges.push((num_vertices - 1, 0));
        Self::new(num_vertices, edges)
    }

    /// Creates a star graph (vertex 0 connected to all others).
    pub fn star(num_vertices: usize) -> Self {
        let edges: Vec<_> = (1..num_vertices).map(|i| (0, i)).collect();
        Self::new(num_vertices, edges)
    }

    /// Creates a grid graph with the given dimensions.
    ///
    /// Vertices are numbered row by row: vertex `r * cols + c` is at row `r`,
    /// column `c`.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let num_vertices = rows * cols;
        let mut edges = Vec::new();

        for r in 0..rows {
            for c in 0..cols {
                let v = r * cols + c;
                if c + 1 < cols {
                    edges.push((v, v + 1));
                }
                if r + 1 < rows {
                    edges.push((v, v + cols));
                }
            }
        }

        Self::new(num_vertices, edges)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns all edges as (u, v) pairs, each edge once.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    /// Checks if an edge exists between `u` and `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    /// Returns all neighbors of vertex `v`.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.inner
            .neighbors(NodeIndex::new(v))
            .map(|n| n.index())
            .collect()
    }

    /// Returns the degree of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.inner.neighbors(NodeIndex::new(v)).count()
    }

    /// Checks whether `selected` (indexed by vertex) is a dominating set:
    /// every vertex is selected or adjacent to a selected vertex.
    ///
    /// # Panics
    ///
    /// Panics if `selected.len() != num_vertices`.
    pub fn is_dominated_by(&self, selected: &[bool]) -> bool {
        assert_eq!(
            selected.len(),
            self.num_vertices(),
            "selected length must match num_vertices"
        );
        for v in 0..self.num_vertices() {
            if selected[v] {
                continue;
            }
            if !self.neighbors(v).iter().any(|&u| selected[u]) {
                return false;
            }
        }
        true
    }
}

impl PartialEq for SimpleGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() || self.num_edges() != other.num_edges() {
            return false;
        }
        let normalize = |mut edges: Vec<(usize, usize)>| {
            for e in &mut edges {
                if e.0 > e.1 {
                    *e = (e.1, e.0);
                }
            }
            edges.sort_unstable();
            edges
        };
        normalize(self.edges()) == normalize(other.edges())
    }
}

impl Eq for SimpleGraph {}

#[cfg(test)]
#[path = "../unit_tests/topology/graph.rs"]
mod tests;
