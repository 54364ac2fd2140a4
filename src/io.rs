//! Reading and writing the PACE dominating-set exchange format.
//!
//! The input is line oriented: any number of comment lines starting with
//! `c`, one problem line `p ds <n> <m>`, then `m` edge lines of the form
//! `\t<u> <v>` with 1-based endpoints. The output is the chosen set size
//! followed by one vertex id per line.

use crate::error::{Result, SolverError};
use crate::topology::SimpleGraph;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufRead, Write};

/// A parsed problem instance: `num_vertices` vertices with ids
/// `1..=num_vertices` and undirected edges over those ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceInstance {
    /// Declared number of vertices.
    pub num_vertices: usize,
    /// Edges as (u, v) id pairs, each at most once.
    pub edges: Vec<(u32, u32)>,
}

impl PaceInstance {
    /// Converts to the 0-indexed instance-level graph representation.
    pub fn to_graph(&self) -> SimpleGraph {
        let edges = self
            .edges
            .iter()
            .map(|&(u, v)| (u as usize - 1, v as usize - 1))
            .collect();
        SimpleGraph::new(self.num_vertices, edges)
    }
}

/// Parses an instance from a reader.
///
/// Comment and blank lines are skipped anywhere. Endpoint range and
/// self-loops are rejected; duplicate edges are trusted to be absent per the
/// format contract.
///
/// # Example
///
/// ```
/// use domsetsolver::io::parse_pace;
///
/// let instance = parse_pace("c a path\np ds 3 2\n\t1 2\n\t2 3\n".as_bytes()).unwrap();
/// assert_eq!(instance.num_vertices, 3);
/// assert_eq!(instance.edges, vec![(1, 2), (2, 3)]);
/// ```
pub fn parse_pace<R: BufRead>(reader: R) -> Result<PaceInstance> {
    let mut lines = reader.lines().enumerate();

    let (num_vertices, num_edges) = loop {
        let (lineno, line) = lines.next().ok_or(SolverError::MissingProblemLine)?;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        if tokens.next() != Some("p") {
            return Err(SolverError::MalformedProblemLine(format!(
                "line {}: expected `p`, got {:?}",
                lineno + 1,
                trimmed
            )));
        }
        if tokens.next() != Some("ds") {
            return Err(SolverError::MalformedProblemLine(format!(
                "line {}: expected problem descriptor `ds`",
                lineno + 1
            )));
        }
        let n: usize = parse_count(tokens.next(), lineno)?;
        let m: usize = parse_count(tokens.next(), lineno)?;
        if tokens.next().is_some() {
            return Err(SolverError::MalformedProblemLine(format!(
                "line {}: trailing tokens",
                lineno + 1
            )));
        }
        break (n, m);
    };

    let mut edges = Vec::with_capacity(num_edges);
    while edges.len() < num_edges {
        let (lineno, line) = lines.next().ok_or(SolverError::TruncatedEdgeList {
            expected: num_edges,
            got: edges.len(),
        })?;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        let u = parse_endpoint(tokens.next(), lineno, num_vertices)?;
        let v = parse_endpoint(tokens.next(), lineno, num_vertices)?;
        if tokens.next().is_some() {
            return Err(SolverError::MalformedEdge {
                line: lineno + 1,
                reason: "trailing tokens".into(),
            });
        }
        if u == v {
            return Err(SolverError::SelfLoop(u));
        }
        edges.push((u, v));
    }

    Ok(PaceInstance {
        num_vertices,
        edges,
    })
}

fn parse_count(token: Option<&str>, lineno: usize) -> Result<usize> {
    let token = token.ok_or_else(|| {
        SolverError::MalformedProblemLine(format!("line {}: missing count", lineno + 1))
    })?;
    token.parse().map_err(|_| {
        SolverError::MalformedProblemLine(format!("line {}: bad count {:?}", lineno + 1, token))
    })
}

fn parse_endpoint(token: Option<&str>, lineno: usize, num_vertices: usize) -> Result<u32> {
    let token = token.ok_or_else(|| SolverError::MalformedEdge {
        line: lineno + 1,
        reason: "missing endpoint".into(),
    })?;
    let id: u64 = token.parse().map_err(|_| SolverError::MalformedEdge {
        line: lineno + 1,
        reason: format!("bad endpoint {:?}", token),
    })?;
    if id == 0 || id > num_vertices as u64 {
        return Err(SolverError::VertexOutOfRange { id, num_vertices });
    }
    Ok(id as u32)
}

/// Serializes an instance or graph to a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SolverError::Serialization(e.to_string()))
}

/// Deserializes an instance or graph from a JSON string.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| SolverError::Serialization(e.to_string()))
}

/// Writes a solution: the set size, then one id per line.
pub fn write_solution<W: Write>(mut writer: W, solution: &[u32]) -> Result<()> {
    writeln!(writer, "{}", solution.len())?;
    for id in solution {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "unit_tests/io.rs"]
mod tests;
