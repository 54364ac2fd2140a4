//! Solvers for the dominating set problem.
//!
//! The production path is [`HeuristicSolver`]: data reduction, then the
//! iterated-greedy metaheuristic until a termination signal. [`BruteForce`]
//! is an exact reference for small instances, used to certify the heuristics
//! in tests.

mod brute_force;
pub mod greedy;
mod heuristic;
mod iterated_greedy;

pub use brute_force::{is_dominating_set, BruteForce};
pub use heuristic::HeuristicSolver;
pub use iterated_greedy::IteratedGreedy;
