//! Brute force solver that enumerates all vertex subsets.
//!
//! Exponential in the number of vertices; its purpose is to certify the
//! heuristics on small instances, not to compete with them.

use crate::topology::SimpleGraph;

/// Checks whether `selected` (indexed by vertex) is a dominating set of the
/// graph.
///
/// # Panics
///
/// Panics if `selected.len() != graph.num_vertices()`.
pub fn is_dominating_set(graph: &SimpleGraph, selected: &[bool]) -> bool {
    graph.is_dominated_by(selected)
}

/// An exact minimum dominating set solver by exhaustive enumeration.
///
/// # Example
///
/// ```
/// use domsetsolver::solvers::BruteForce;
/// use domsetsolver::topology::SimpleGraph;
///
/// // A star is dominated by its center alone.
/// let graph = SimpleGraph::star(5);
/// assert_eq!(BruteForce::new().minimum_size(&graph), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForce;

impl BruteForce {
    /// Creates a new brute force solver.
    pub fn new() -> Self {
        Self
    }

    /// The size of a minimum dominating set. 0 for the empty graph.
    ///
    /// # Panics
    ///
    /// Panics if the graph has more than 30 vertices; enumeration beyond
    /// that is hopeless anyway.
    pub fn minimum_size(&self, graph: &SimpleGraph) -> usize {
        self.find_best(graph)
            .first()
            .map(|best| best.iter().filter(|&&s| s).count())
            .unwrap_or(0)
    }

    /// All minimum dominating sets, as selection masks indexed by vertex.
    /// Empty only for the empty graph.
    pub fn find_best(&self, graph: &SimpleGraph) -> Vec<Vec<bool>> {
        let n = graph.num_vertices();
        assert!(n <= 30, "brute force is limited to 30 vertices");
        if n == 0 {
            return vec![];
        }

        let mut best_size = usize::MAX;
        let mut best: Vec<Vec<bool>> = vec![];
        for mask in 0u64..(1u64 << n) {
            let size = mask.count_ones() as usize;
            if size > best_size {
                continue;
            }
            let selected: Vec<bool> = (0..n).map(|v| mask & (1 << v) != 0).collect();
            if !graph.is_dominated_by(&selected) {
                continue;
            }
            if size < best_size {
                best_size = size;
                best.clear();
            }
            best.push(selected);
        }
        best
    }
}

#[cfg(test)]
#[path = "../unit_tests/solvers/brute_force.rs"]
mod tests;
