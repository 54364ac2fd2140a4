//! Property-based tests using proptest.
//!
//! These drive random small instances through the public API and compare
//! against exhaustive enumeration.

use domsetsolver::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for random graphs with between 2 and `max_vertices` vertices.
/// Self-loops are remapped to the always-valid edge (0, 1).
fn graph_strategy(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2..=max_vertices).prop_flat_map(|n| {
        let edge_strategy = (0..n, 0..n).prop_map(|(u, v)| {
            if u < v {
                (u, v)
            } else if v < u {
                (v, u)
            } else {
                (0, 1)
            }
        });

        prop::collection::vec(edge_strategy, 0..n * 2).prop_map(move |edges| {
            let unique: HashSet<_> = edges.into_iter().collect();
            (n, unique.into_iter().collect())
        })
    })
}

fn solve(graph: &SimpleGraph, seed: u64) -> Vec<u32> {
    let mut store = GraphStore::from_graph(graph);
    let mut solver = HeuristicSolver::new();
    solver.budget = ReductionBudget::from_secs(2.0, 2.0);
    solver.greedy = IteratedGreedy::new().with_seed(seed).with_max_iterations(30);
    solver.solve(&mut store, &TerminationFlag::new())
}

fn as_mask(graph: &SimpleGraph, solution: &[u32]) -> Vec<bool> {
    let mut selected = vec![false; graph.num_vertices()];
    for &id in solution {
        selected[id as usize - 1] = true;
    }
    selected
}

proptest! {
    /// The pipeline always emits a feasible dominating set.
    #[test]
    fn solution_is_always_feasible((n, edges) in graph_strategy(10), seed in any::<u64>()) {
        let graph = SimpleGraph::new(n, edges);
        let solution = solve(&graph, seed);

        let selected = as_mask(&graph, &solution);
        prop_assert!(graph.is_dominated_by(&selected));

        // No duplicates: the mask popcount equals the emitted length.
        let emitted: usize = selected.iter().filter(|&&s| s).count();
        prop_assert_eq!(emitted, solution.len());
    }

    /// The heuristic can never beat the exact optimum, and on these sizes it
    /// should land within two vertices of it.
    #[test]
    fn solution_size_brackets_the_optimum((n, edges) in graph_strategy(8), seed in any::<u64>()) {
        let graph = SimpleGraph::new(n, edges);
        let optimum = BruteForce::new().minimum_size(&graph);
        let solution = solve(&graph, seed);

        prop_assert!(solution.len() >= optimum);
        prop_assert!(solution.len() <= optimum + 2);
    }

    /// Reduction leaves a state that a second run does not change.
    #[test]
    fn reduction_is_a_fixed_point((n, edges) in graph_strategy(10)) {
        let graph = SimpleGraph::new(n, edges);
        let mut store = GraphStore::from_graph(&graph);
        let budget = ReductionBudget::from_secs(2.0, 2.0);

        reduce(&mut store, &budget);
        let state = (
            store.active_len(),
            store.num_edges(),
            store.fixed().len(),
        );
        reduce(&mut store, &budget);
        prop_assert_eq!(
            state,
            (store.active_len(), store.num_edges(), store.fixed().len())
        );
    }

    /// Everything the reduction fixes extends to an exact optimum.
    #[test]
    fn fixed_vertices_extend_to_an_optimum((n, edges) in graph_strategy(8)) {
        let graph = SimpleGraph::new(n, edges);
        let optimum = BruteForce::new().minimum_size(&graph);

        let mut store = GraphStore::from_graph(&graph);
        reduce(&mut store, &ReductionBudget::from_secs(2.0, 2.0));

        let forced: Vec<usize> =
            store.fixed().iter().map(|f| f.id as usize - 1).collect();
        let mut best_with_forced = usize::MAX;
        for mask in 0u64..(1u64 << n) {
            if forced.iter().any(|&f| mask & (1u64 << f) == 0) {
                continue;
            }
            let selected: Vec<bool> = (0..n).map(|v| mask & (1u64 << v) != 0).collect();
            if graph.is_dominated_by(&selected) {
                best_with_forced = best_with_forced.min(mask.count_ones() as usize);
            }
        }
        prop_assert_eq!(best_with_forced, optimum);
    }

    /// Parsing accepts exactly what the writer and format contract promise.
    #[test]
    fn parse_accepts_generated_instances((n, edges) in graph_strategy(10)) {
        let mut input = format!("c generated\np ds {} {}\n", n, edges.len());
        for &(u, v) in &edges {
            input.push_str(&format!("\t{} {}\n", u + 1, v + 1));
        }
        let instance = parse_pace(input.as_bytes()).unwrap();
        prop_assert_eq!(instance.num_vertices, n);
        prop_assert_eq!(instance.edges.len(), edges.len());
        prop_assert_eq!(instance.to_graph(), SimpleGraph::new(n, edges));
    }
}
