use super::*;
use crate::solvers::BruteForce;
use crate::topology::SimpleGraph;

fn generous() -> ReductionBudget {
    ReductionBudget::from_secs(10.0, 10.0)
}

fn no_budget() -> ReductionBudget {
    ReductionBudget::from_secs(0.0, 0.0)
}

fn fixed_ids(g: &GraphStore) -> Vec<u32> {
    g.fixed().iter().map(|f| f.id).collect()
}

#[test]
fn test_budget_ordering_enforced() {
    let b = ReductionBudget::from_secs(2.0, 1.0);
    assert!(b.total > b.rule2);
}

#[test]
#[should_panic(expected = "total >= rule2")]
fn test_budget_rejects_rule2_exceeding_total() {
    ReductionBudget::from_secs(1.0, 2.0);
}

#[test]
fn test_zero_budget_changes_nothing() {
    let mut g = GraphStore::from_graph(&SimpleGraph::cycle(5));
    reduce(&mut g, &no_budget());
    assert_eq!(g.active_len(), 5);
    assert_eq!(g.num_edges(), 5);
    assert!(g.fixed().is_empty());
    g.check_invariants();
}

#[test]
fn test_isolated_undominated_vertex_is_fixed() {
    let mut g = GraphStore::from_edges(1, &[]);
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(fixed_ids(&g), vec![1]);
}

#[test]
fn test_isolated_dominated_vertex_is_dropped() {
    let mut g = GraphStore::from_edges(1, &[]);
    g[0].dominated_count = 1;
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert!(g.fixed().is_empty());
}

#[test]
fn test_leaf_fixes_its_neighbor() {
    // Path 1-2-3: either leaf forces 2 into the solution.
    let mut g = GraphStore::from_edges(3, &[(1, 2), (2, 3)]);
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(fixed_ids(&g), vec![2]);
}

#[test]
fn test_dominated_leaf_is_dropped() {
    // 1-2 with 1 already covered from elsewhere: 1 has no further use.
    let mut g = GraphStore::from_edges(2, &[(1, 2)]);
    g[0].dominated_count = 1;
    reduce(&mut g, &generous());
    // 1 is removed as a dominated leaf, then 2 is a lone undominated vertex.
    assert_eq!(fixed_ids(&g), vec![2]);
    assert_eq!(g.active_len(), 0);
}

#[test]
fn test_path4_reduces_to_two() {
    let mut g = GraphStore::from_edges(4, &[(1, 2), (2, 3), (3, 4)]);
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(g.fixed().len(), 2);
    // Whatever pair was chosen must dominate the path.
    let graph = SimpleGraph::path(4);
    let mut selected = vec![false; 4];
    for f in g.fixed() {
        selected[f.id as usize - 1] = true;
    }
    assert!(graph.is_dominated_by(&selected));
}

#[test]
fn test_two_disjoint_edges() {
    let mut g = GraphStore::from_edges(4, &[(1, 2), (3, 4)]);
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(g.fixed().len(), 2);
}

#[test]
fn test_star_fixes_center() {
    let mut g = GraphStore::from_edges(5, &[(1, 2), (1, 3), (1, 4), (1, 5)]);
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(fixed_ids(&g), vec![1]);
}

#[test]
fn test_complete_graph_fixes_one_vertex() {
    let mut g = GraphStore::from_graph(&SimpleGraph::complete(4));
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(g.fixed().len(), 1);
}

#[test]
fn test_five_cycle_needs_the_pair_rule() {
    // Without the pair rule the 5-cycle is irreducible.
    let mut g = GraphStore::from_graph(&SimpleGraph::cycle(5));
    reduce(&mut g, &ReductionBudget::from_secs(10.0, 0.0));
    assert_eq!(g.active_len(), 5);
    assert!(g.fixed().is_empty());

    // With it the whole cycle resolves into an optimal pair.
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert_eq!(g.fixed().len(), 2);
    let graph = SimpleGraph::cycle(5);
    let mut selected = vec![false; 5];
    for f in g.fixed() {
        selected[f.id as usize - 1] = true;
    }
    assert!(graph.is_dominated_by(&selected));
}

#[test]
fn test_redundant_dominated_vertex_is_removed() {
    // Triangle 1-2-3 where everything is already dominated: every vertex is
    // redundant and the component dissolves.
    let mut g = GraphStore::from_graph(&SimpleGraph::complete(3));
    for v in 0..3 {
        g[v].dominated_count = 1;
    }
    reduce(&mut g, &generous());
    assert_eq!(g.active_len(), 0);
    assert!(g.fixed().is_empty());
}

#[test]
fn test_reduction_reaches_fixed_point() {
    for graph in [
        SimpleGraph::grid(4, 4),
        SimpleGraph::path(9),
        SimpleGraph::cycle(8),
        SimpleGraph::star(6),
    ] {
        let mut g = GraphStore::from_graph(&graph);
        reduce(&mut g, &generous());
        let state = (g.active_len(), g.num_edges(), g.fixed().len());
        reduce(&mut g, &generous());
        assert_eq!(state, (g.active_len(), g.num_edges(), g.fixed().len()));
        g.check_invariants();
    }
}

#[test]
fn test_fixed_vertices_extend_to_an_optimal_solution() {
    // Joint soundness: forcing everything the engine fixed must still allow
    // an optimal dominating set of the original graph.
    let solver = BruteForce::new();
    for graph in [
        SimpleGraph::path(7),
        SimpleGraph::cycle(6),
        SimpleGraph::grid(2, 4),
        SimpleGraph::star(8),
        SimpleGraph::new(7, vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (4, 6)]),
    ] {
        let n = graph.num_vertices();
        let optimum = solver.minimum_size(&graph);

        let mut g = GraphStore::from_graph(&graph);
        reduce(&mut g, &generous());

        let forced: Vec<usize> = g.fixed().iter().map(|f| f.id as usize - 1).collect();
        let mut best_with_forced = usize::MAX;
        for mask in 0u64..(1 << n) {
            if forced.iter().any(|&f| mask & (1 << f) == 0) {
                continue;
            }
            let selected: Vec<bool> = (0..n).map(|v| mask & (1 << v) != 0).collect();
            if graph.is_dominated_by(&selected) {
                best_with_forced = best_with_forced.min(mask.count_ones() as usize);
            }
        }
        assert_eq!(
            best_with_forced, optimum,
            "fixed set is not extendable to an optimum on {:?}",
            graph
        );
    }
}

#[test]
fn test_invariants_after_partial_reduction() {
    // A graph the rules cannot fully resolve must still be left consistent.
    let mut g = GraphStore::from_graph(&SimpleGraph::grid(5, 5));
    reduce(&mut g, &generous());
    g.check_invariants();
    for &v in g.active() {
        assert!(!g[v].is_removed);
    }
}
