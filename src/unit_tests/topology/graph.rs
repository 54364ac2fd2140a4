use super::*;

#[test]
fn test_simple_graph_new() {
    let graph = SimpleGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 3);
}

#[test]
fn test_simple_graph_empty() {
    let graph = SimpleGraph::empty(5);
    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_simple_graph_complete() {
    let graph = SimpleGraph::complete(4);
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 6); // C(4,2) = 6
}

#[test]
fn test_simple_graph_path() {
    let graph = SimpleGraph::path(5);
    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.num_edges(), 4);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(3, 4));
    assert!(!graph.has_edge(0, 4));
}

#[test]
fn test_simple_graph_cycle() {
    let graph = SimpleGraph::cycle(4);
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 4);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(3, 0)); // Cycle edge
}

#[test]
fn test_simple_graph_star() {
    let graph = SimpleGraph::star(5);
    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.num_edges(), 4);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(0, 4));
    assert!(!graph.has_edge(1, 2));
}

#[test]
fn test_simple_graph_grid() {
    let graph = SimpleGraph::grid(2, 3);
    assert_eq!(graph.num_vertices(), 6);
    // 2 rows with 2 horizontal edges each, 3 columns with 1 vertical edge each
    assert_eq!(graph.num_edges(), 7);
}

#[test]
fn test_neighbors_and_degree() {
    let graph = SimpleGraph::new(4, vec![(0, 1), (0, 2), (1, 2)]);
    let nbrs = graph.neighbors(0);
    assert!(nbrs.contains(&1));
    assert!(nbrs.contains(&2));
    assert!(!nbrs.contains(&3));
    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(3), 0);
}

#[test]
#[should_panic(expected = "references vertex >= num_vertices")]
fn test_edge_out_of_range_panics() {
    SimpleGraph::new(2, vec![(0, 2)]);
}

#[test]
fn test_is_dominated_by() {
    let graph = SimpleGraph::star(4);

    // Center dominates all
    assert!(graph.is_dominated_by(&[true, false, false, false]));
    // All leaves dominate (each leaf covers the center)
    assert!(graph.is_dominated_by(&[false, true, true, true]));
    // A single leaf leaves the other leaves uncovered
    assert!(!graph.is_dominated_by(&[false, true, false, false]));
    assert!(!graph.is_dominated_by(&[false, false, false, false]));
}

#[test]
#[should_panic(expected = "selected length must match num_vertices")]
fn test_is_dominated_by_wrong_len() {
    SimpleGraph::new(3, vec![(0, 1)]).is_dominated_by(&[true, false]);
}

#[test]
fn test_eq_ignores_edge_order() {
    let a = SimpleGraph::new(3, vec![(0, 1), (1, 2)]);
    let b = SimpleGraph::new(3, vec![(2, 1), (1, 0)]);
    assert_eq!(a, b);
    let c = SimpleGraph::new(3, vec![(0, 1), (0, 2)]);
    assert_ne!(a, c);
}

#[test]
fn test_serde_round_trip() {
    let graph = SimpleGraph::cycle(5);
    let json = serde_json::to_string(&graph).unwrap();
    let back: SimpleGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(graph, back);
}
