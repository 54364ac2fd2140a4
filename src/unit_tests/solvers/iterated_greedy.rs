use super::*;
use crate::solvers::greedy;
use crate::topology::SimpleGraph;

fn counts_consistent(g: &GraphStore) -> bool {
    g.active().iter().all(|&v| {
        let expected = usize::from(g[v].in_ds)
            + g[v]
                .neighbors()
                .iter()
                .filter(|&&u| g[u].in_ds)
                .count();
        g[v].dominated_count as usize == expected
    })
}

fn constructed(graph: &SimpleGraph) -> (GraphStore, usize) {
    let mut g = GraphStore::from_graph(graph);
    greedy::init_votes(&mut g);
    let size = greedy::construct(&mut g, 0);
    (g, size)
}

#[test]
fn test_random_deconstruction_probability_zero_is_noop() {
    let (mut g, size) = constructed(&SimpleGraph::grid(4, 4));
    let mut rng = SmallRng::seed_from_u64(3);
    let removed = random_deconstruction(&mut g, 0.0, &mut rng);
    assert_eq!(removed, 0);
    assert_eq!(g.selected_len(), size);
    assert!(counts_consistent(&g));
}

#[test]
fn test_random_deconstruction_probability_one_clears_selection() {
    let (mut g, size) = constructed(&SimpleGraph::grid(4, 4));
    let mut rng = SmallRng::seed_from_u64(3);
    let removed = random_deconstruction(&mut g, 1.0, &mut rng);
    assert_eq!(removed, size);
    assert_eq!(g.selected_len(), 0);
    assert!(g.active().iter().all(|&v| g[v].dominated_count == 0));
}

#[test]
fn test_local_deconstruction_respects_cap() {
    let (mut g, size) = constructed(&SimpleGraph::grid(6, 6));
    assert!(size > 2);
    let mut rng = SmallRng::seed_from_u64(11);
    let mut epoch = 0;
    let removed = local_deconstruction(&mut g, 2, &mut epoch, &mut rng);
    assert!(removed <= 2);
    assert_eq!(g.selected_len(), size - removed);
    assert!(counts_consistent(&g));
    assert_eq!(epoch, 1);
}

#[test]
fn test_local_deconstruction_epochs_do_not_need_clearing() {
    let (mut g, _) = constructed(&SimpleGraph::grid(6, 6));
    let mut rng = SmallRng::seed_from_u64(5);
    let mut epoch = 0;
    for expected in 1..=5u32 {
        local_deconstruction(&mut g, 1, &mut epoch, &mut rng);
        assert_eq!(epoch, expected);
        let selected_len = g.selected_len();
        greedy::construct(&mut g, selected_len);
    }
    assert!(counts_consistent(&g));
}

#[test]
fn test_snapshot_round_trip() {
    let (mut g, _) = constructed(&SimpleGraph::grid(3, 5));
    let n = g.active_len();
    let mut in_ds = bitvec![0; n];
    let mut dominated = vec![0u32; n];
    save_snapshot(&g, &mut in_ds, &mut dominated);

    // Wreck the state, then restore.
    let mut rng = SmallRng::seed_from_u64(2);
    random_deconstruction(&mut g, 1.0, &mut rng);
    assert_eq!(g.selected_len(), 0);

    restore_snapshot(&mut g, &in_ds, &dominated);
    assert!(counts_consistent(&g));
    assert!(g.active().iter().all(|&v| g[v].dominated_count > 0));
}

#[test]
fn test_run_never_worsens_the_greedy_start() {
    let graph = SimpleGraph::grid(5, 5);
    let (mut reference, greedy_size) = constructed(&graph);
    reference.check_invariants();

    let mut g = GraphStore::from_graph(&graph);
    let solver = IteratedGreedy::new().with_seed(42).with_max_iterations(60);
    let best = solver.run(&mut g, &TerminationFlag::new());
    assert!(best <= greedy_size);
    assert_eq!(best, g.selected_len());
    assert!(g.active().iter().all(|&v| g[v].dominated_count > 0));
    assert!(counts_consistent(&g));
}

#[test]
fn test_run_is_deterministic_given_a_seed() {
    let graph = SimpleGraph::grid(4, 6);
    let solver = IteratedGreedy::new().with_seed(9).with_max_iterations(40);

    let mut a = GraphStore::from_graph(&graph);
    let mut b = GraphStore::from_graph(&graph);
    let size_a = solver.run(&mut a, &TerminationFlag::new());
    let size_b = solver.run(&mut b, &TerminationFlag::new());
    assert_eq!(size_a, size_b);
    assert_eq!(a.solution(), b.solution());
}

#[test]
fn test_run_honors_preset_termination_flag() {
    // A set flag skips all iterations; the initial construction still
    // delivers a feasible solution.
    let mut g = GraphStore::from_graph(&SimpleGraph::cycle(9));
    let flag = TerminationFlag::new();
    flag.set();
    let best = IteratedGreedy::new().with_seed(1).run(&mut g, &flag);
    assert!(best > 0);
    assert!(g.active().iter().all(|&v| g[v].dominated_count > 0));
}

#[test]
fn test_parameter_builders() {
    let solver = IteratedGreedy::new().with_seed(5).with_max_iterations(10);
    assert_eq!(solver.seed, Some(5));
    assert_eq!(solver.max_iterations, Some(10));
    assert_eq!(solver.local_removal_cap, 40);
    assert_eq!(solver.removal_probability, 0.006);
}
