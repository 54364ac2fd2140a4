//! # domsetsolver
//!
//! A heuristic solver for the minimum dominating set problem on undirected
//! simple graphs, aimed at large sparse instances under a competition-style
//! time limit.
//!
//! The pipeline has two phases:
//!
//! 1. **Data reduction** ([`reduction`]): provably safe kernelization rules
//!    (degree rules, a redundancy sweep, and the Alber–Fellows–Niedermeier
//!    neighborhood rules for single vertices and pairs) shrink the instance
//!    under a wall-clock budget, committing forced vertices to the output.
//! 2. **Iterated greedy** ([`solvers`]): a vote-weighted greedy constructor
//!    builds a dominating set of the reduced graph, and a
//!    deconstruct/reconstruct loop with an adaptive choice of deconstruction
//!    strategy improves it until a termination signal arrives.
//!
//! Instances are exchanged in the PACE `p ds` format ([`io`]); termination
//! is requested through a shared flag ([`termination`]) that a signal
//! handler can set.
//!
//! ## Example
//!
//! ```
//! use domsetsolver::prelude::*;
//!
//! let input = "c tiny star\np ds 5 4\n\t1 2\n\t1 3\n\t1 4\n\t1 5\n";
//! let instance = parse_pace(input.as_bytes())?;
//! let mut graph = GraphStore::from_instance(&instance);
//!
//! let mut solver = HeuristicSolver::default();
//! solver.greedy = solver.greedy.with_max_iterations(100);
//! let solution = solver.solve(&mut graph, &TerminationFlag::new());
//! assert_eq!(solution, vec![1]);
//! # Ok::<(), domsetsolver::SolverError>(())
//! ```

pub mod error;
pub mod heap;
pub mod io;
pub mod reduction;
pub mod solvers;
pub mod store;
pub mod termination;
pub mod topology;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, SolverError};
    pub use crate::io::{parse_pace, write_solution, PaceInstance};
    pub use crate::reduction::{reduce, ReductionBudget};
    pub use crate::solvers::{BruteForce, HeuristicSolver, IteratedGreedy};
    pub use crate::store::{FixedVertex, GraphStore, VertexRef};
    pub use crate::termination::TerminationFlag;
    pub use crate::topology::SimpleGraph;
}

// Re-export commonly used items at crate root
pub use error::{Result, SolverError};
pub use reduction::{reduce, ReductionBudget};
pub use solvers::{BruteForce, HeuristicSolver, IteratedGreedy};
pub use store::GraphStore;
pub use termination::TerminationFlag;
