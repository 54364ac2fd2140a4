//! Command line definition for the `domset` binary.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "domset",
    version,
    about = "Heuristic minimum dominating set solver",
    long_about = "Reads a graph in the PACE `p ds` format, reduces it under a time budget, \
                  then improves a greedy dominating set until SIGTERM arrives and prints the \
                  best solution found."
)]
pub struct Cli {
    /// Instance file in PACE `p ds` format; stdin when omitted.
    pub input: Option<PathBuf>,

    /// Wall-clock budget in seconds for the whole reduction phase.
    #[arg(long, default_value_t = 13.0)]
    pub reduction_budget: f64,

    /// Wall-clock budget in seconds for the pair reduction rule.
    #[arg(long, default_value_t = 7.5)]
    pub rule2_budget: f64,

    /// Stop after this many iterations instead of waiting for SIGTERM.
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Seed for the random source; defaults to process time.
    #[arg(long)]
    pub seed: Option<u64>,
}
