//! The full solving pipeline: reduce, then iterate greedy until told to
//! stop.

use crate::reduction::{reduce, ReductionBudget};
use crate::solvers::IteratedGreedy;
use crate::store::GraphStore;
use crate::termination::TerminationFlag;
use tracing::debug;

/// Composes the reduction engine and the iterated greedy metaheuristic into
/// the competition pipeline.
///
/// Graphs that the reduction shrinks to at most 3 active vertices are
/// finished off by one more short reduction run instead of the
/// metaheuristic; the rules always eliminate such leftovers.
///
/// # Example
///
/// ```
/// use domsetsolver::prelude::*;
///
/// let instance = parse_pace("p ds 3 2\n\t1 2\n\t2 3\n".as_bytes())?;
/// let mut graph = GraphStore::from_instance(&instance);
/// let solver = HeuristicSolver::default();
/// let solution = solver.solve(&mut graph, &TerminationFlag::new());
/// assert_eq!(solution, vec![2]);
/// # Ok::<(), domsetsolver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicSolver {
    /// Budgets for the reduction phase.
    pub budget: ReductionBudget,
    /// Parameters of the iterated greedy phase.
    pub greedy: IteratedGreedy,
}

impl HeuristicSolver {
    /// Creates a solver with the default budgets and parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves the instance held by `g` and returns the chosen vertex ids in
    /// output order. Runs until `stop` is set (or the configured iteration
    /// bound is reached) once the reduction budgets are spent.
    pub fn solve(&self, g: &mut GraphStore, stop: &TerminationFlag) -> Vec<u32> {
        debug!(n = g.active_len(), m = g.num_edges(), "starting reduction");
        reduce(g, &self.budget);
        debug!(
            n = g.active_len(),
            m = g.num_edges(),
            fixed = g.fixed().len(),
            "reduction done"
        );

        if g.active_len() <= 3 {
            // The budget may have expired just short of the last rule
            // application; a fresh short run always clears a trivial tail.
            if g.active_len() != 0 {
                reduce(g, &ReductionBudget::cleanup());
            }
            debug_assert_eq!(g.active_len(), 0);
            return g.solution();
        }

        self.greedy.run(g, stop);
        g.solution()
    }
}

#[cfg(test)]
#[path = "../unit_tests/solvers/heuristic.rs"]
mod tests;
