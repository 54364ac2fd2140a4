//! Error types for the domsetsolver library.

use thiserror::Error;

/// Errors that can occur while reading problem instances.
///
/// Algorithmic invariants are enforced with debug assertions instead; a
/// violated invariant is a bug, not a recoverable condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The input ended before a `p ds <n> <m>` problem line was found.
    #[error("missing problem line: expected `p ds <n> <m>`")]
    MissingProblemLine,

    /// The problem line was present but could not be parsed.
    #[error("malformed problem line: {0}")]
    MalformedProblemLine(String),

    /// An edge line could not be parsed.
    #[error("malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    /// An edge endpoint was outside the declared vertex range.
    #[error("vertex id {id} out of range 1..={num_vertices}")]
    VertexOutOfRange { id: u64, num_vertices: usize },

    /// An edge connected a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(u32),

    /// Fewer edge lines than the problem line declared.
    #[error("expected {expected} edges, input ended after {got}")]
    TruncatedEdgeList { expected: usize, got: usize },

    /// An underlying I/O operation failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// JSON (de)serialization of an instance failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SolverError {
    fn from(e: std::io::Error) -> Self {
        SolverError::Io(e.to_string())
    }
}

/// Result type alias for domsetsolver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
