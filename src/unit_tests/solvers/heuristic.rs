use super::*;
use crate::solvers::BruteForce;
use crate::topology::SimpleGraph;

fn quick_solver() -> HeuristicSolver {
    let mut solver = HeuristicSolver::new();
    solver.budget = ReductionBudget::from_secs(2.0, 2.0);
    solver.greedy = IteratedGreedy::new().with_seed(17).with_max_iterations(50);
    solver
}

fn verify_feasible(graph: &SimpleGraph, solution: &[u32]) {
    let mut selected = vec![false; graph.num_vertices()];
    for &id in solution {
        assert!(!selected[id as usize - 1], "vertex {} emitted twice", id);
        selected[id as usize - 1] = true;
    }
    assert!(graph.is_dominated_by(&selected), "solution is not dominating");
}

#[test]
fn test_empty_graph_yields_empty_solution() {
    let mut g = GraphStore::from_edges(0, &[]);
    let solution = quick_solver().solve(&mut g, &TerminationFlag::new());
    assert!(solution.is_empty());
}

#[test]
fn test_single_vertex_is_emitted() {
    let mut g = GraphStore::from_edges(1, &[]);
    let solution = quick_solver().solve(&mut g, &TerminationFlag::new());
    assert_eq!(solution, vec![1]);
}

#[test]
fn test_trivial_instances_are_solved_by_reduction_alone() {
    // (graph, expected size); all of these resolve before the greedy phase.
    let cases = [
        (SimpleGraph::path(3), 1),
        (SimpleGraph::path(4), 2),
        (SimpleGraph::complete(4), 1),
        (SimpleGraph::new(4, vec![(0, 1), (2, 3)]), 2),
        (SimpleGraph::star(5), 1),
        (SimpleGraph::cycle(5), 2),
    ];
    for (graph, expected) in cases {
        let mut g = GraphStore::from_graph(&graph);
        let solution = quick_solver().solve(&mut g, &TerminationFlag::new());
        assert_eq!(solution.len(), expected, "wrong size on {:?}", graph);
        verify_feasible(&graph, &solution);
        assert_eq!(g.active_len(), 0);
    }
}

#[test]
fn test_irreducible_instance_runs_the_greedy_phase() {
    let graph = SimpleGraph::cycle(7);
    let mut g = GraphStore::from_graph(&graph);
    let solution = quick_solver().solve(&mut g, &TerminationFlag::new());
    verify_feasible(&graph, &solution);
    assert_eq!(solution.len(), BruteForce::new().minimum_size(&graph));
}

#[test]
fn test_solution_matches_optimum_on_small_graphs() {
    let solver = BruteForce::new();
    for graph in [
        SimpleGraph::grid(3, 3),
        SimpleGraph::cycle(8),
        SimpleGraph::path(8),
        SimpleGraph::new(6, vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (3, 5)]),
    ] {
        let optimum = solver.minimum_size(&graph);
        let mut g = GraphStore::from_graph(&graph);
        let solution = quick_solver().solve(&mut g, &TerminationFlag::new());
        verify_feasible(&graph, &solution);
        assert!(
            solution.len() >= optimum,
            "better than optimal on {:?}",
            graph
        );
        assert!(
            solution.len() <= optimum + 1,
            "far from optimal on {:?}",
            graph
        );
    }
}

#[test]
fn test_preset_flag_still_yields_feasible_output() {
    let graph = SimpleGraph::grid(4, 4);
    let mut g = GraphStore::from_graph(&graph);
    let flag = TerminationFlag::new();
    flag.set();
    let mut solver = quick_solver();
    solver.greedy.max_iterations = None;
    let solution = solver.solve(&mut g, &flag);
    verify_feasible(&graph, &solution);
}
