use super::*;

#[test]
fn test_empty_graph() {
    let solver = BruteForce::new();
    assert_eq!(solver.minimum_size(&SimpleGraph::empty(0)), 0);
    assert!(solver.find_best(&SimpleGraph::empty(0)).is_empty());
}

#[test]
fn test_single_vertex() {
    let solver = BruteForce::new();
    assert_eq!(solver.minimum_size(&SimpleGraph::empty(1)), 1);
    assert_eq!(solver.find_best(&SimpleGraph::empty(1)), vec![vec![true]]);
}

#[test]
fn test_star_center() {
    let solver = BruteForce::new();
    let graph = SimpleGraph::star(5);
    assert_eq!(solver.minimum_size(&graph), 1);
    let best = solver.find_best(&graph);
    assert!(best.contains(&vec![true, false, false, false, false]));
}

#[test]
fn test_known_optima() {
    let solver = BruteForce::new();
    assert_eq!(solver.minimum_size(&SimpleGraph::path(4)), 2);
    assert_eq!(solver.minimum_size(&SimpleGraph::complete(4)), 1);
    assert_eq!(solver.minimum_size(&SimpleGraph::cycle(5)), 2);
    assert_eq!(solver.minimum_size(&SimpleGraph::cycle(7)), 3);
    assert_eq!(solver.minimum_size(&SimpleGraph::path(7)), 3);
}

#[test]
fn test_all_optima_are_dominating() {
    let solver = BruteForce::new();
    let graph = SimpleGraph::grid(2, 3);
    let best = solver.find_best(&graph);
    assert!(!best.is_empty());
    let size = best[0].iter().filter(|&&s| s).count();
    for selected in &best {
        assert_eq!(selected.iter().filter(|&&s| s).count(), size);
        assert!(is_dominating_set(&graph, selected));
    }
}

#[test]
fn test_disconnected_components_add_up() {
    // Two disjoint edges need one endpoint each.
    let graph = SimpleGraph::new(4, vec![(0, 1), (2, 3)]);
    assert_eq!(BruteForce::new().minimum_size(&graph), 2);
}

#[test]
#[should_panic(expected = "limited to 30 vertices")]
fn test_size_limit() {
    BruteForce::new().minimum_size(&SimpleGraph::empty(31));
}
