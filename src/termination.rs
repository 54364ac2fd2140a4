//! Cooperative termination flag shared between a signal handler and the
//! solver loop.
//!
//! The contract is a single process-wide boolean: the handler sets it, the
//! iterated-greedy loop polls it once per iteration and exits with the best
//! solution found so far. The flag is clonable; all clones observe the same
//! state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared boolean that requests orderly termination of the solver.
///
/// # Example
///
/// ```
/// use domsetsolver::termination::TerminationFlag;
///
/// let flag = TerminationFlag::new();
/// assert!(!flag.is_set());
/// flag.set();
/// assert!(flag.is_set());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TerminationFlag(Arc<AtomicBool>);

impl TerminationFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Request termination. Safe to call from a signal handler context via
    /// the inner atomic (see [`TerminationFlag::as_arc`]).
    pub fn set(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Has termination been requested?
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// The underlying atomic, in the shape signal registration APIs expect
    /// (e.g. `signal_hook::flag::register`).
    pub fn as_arc(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}
