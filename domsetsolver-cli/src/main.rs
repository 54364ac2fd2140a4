mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use domsetsolver::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        cli.reduction_budget >= cli.rule2_budget && cli.rule2_budget >= 0.0,
        "--reduction-budget must be at least --rule2-budget, and both non-negative"
    );

    let instance = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            parse_pace(BufReader::new(file))?
        }
        None => parse_pace(io::stdin().lock())?,
    };
    let mut graph = GraphStore::from_instance(&instance);

    let stop = TerminationFlag::new();
    signal_hook::flag::register(signal_hook::consts::SIGTERM, stop.as_arc())
        .context("registering the SIGTERM handler")?;
    // Ctrl+C is a convenience only; don't fail if it cannot be registered.
    let _ = signal_hook::flag::register(signal_hook::consts::SIGINT, stop.as_arc());

    let mut solver = HeuristicSolver::new();
    solver.budget = ReductionBudget::from_secs(cli.reduction_budget, cli.rule2_budget);
    solver.greedy.max_iterations = cli.max_iterations;
    solver.greedy.seed = cli.seed;

    let solution = solver.solve(&mut graph, &stop);
    write_solution(io::stdout().lock(), &solution)?;
    Ok(())
}
