use super::*;
use crate::topology::SimpleGraph;

fn path4() -> GraphStore {
    GraphStore::from_edges(4, &[(1, 2), (2, 3), (3, 4)])
}

#[test]
fn test_from_edges() {
    let g = path4();
    assert_eq!(g.active_len(), 4);
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g[0].id(), 1);
    assert_eq!(g[0].degree(), 1);
    assert_eq!(g[1].degree(), 2);
    assert!(!g[0].is_dominated());
    g.check_invariants();
}

#[test]
fn test_from_graph_assigns_one_based_ids() {
    let g = GraphStore::from_graph(&SimpleGraph::star(4));
    assert_eq!(g.active_len(), 4);
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g[0].id(), 1);
    assert_eq!(g[0].degree(), 3);
    g.check_invariants();
}

#[test]
#[should_panic(expected = "self-loop")]
fn test_self_loop_panics() {
    GraphStore::from_edges(2, &[(1, 1)]);
}

#[test]
#[should_panic(expected = "outside 1..=")]
fn test_out_of_range_edge_panics() {
    GraphStore::from_edges(2, &[(1, 3)]);
}

#[test]
fn test_mark_removed_cleans_up_adjacency() {
    let mut g = path4();
    g.mark_removed(1); // vertex with id 2
    assert!(g[1].is_removed);
    assert_eq!(g[1].degree(), 0);
    assert_eq!(g.num_edges(), 1); // only 3-4 survives
    assert!(!g[0].neighbors().contains(&1));
    assert!(!g[2].neighbors().contains(&1));
    // The active sequence is compacted lazily, not by mark_removed.
    assert_eq!(g.active_len(), 4);
}

#[test]
fn test_delete_slot_swaps_in_tail() {
    let mut g = path4();
    g.mark_removed(0);
    g.delete_slot(0);
    assert_eq!(g.active_len(), 3);
    assert_eq!(g.active()[0], 3); // the former tail fills the hole
    g.check_invariants();
}

#[test]
fn test_edge_count_matches_degree_sum() {
    let mut g = GraphStore::from_graph(&SimpleGraph::complete(5));
    assert_eq!(g.num_edges(), 10);
    for v in 0..3 {
        g.mark_removed(v);
        let degree_sum: usize = g
            .active()
            .iter()
            .filter(|&&u| !g[u].is_removed)
            .map(|&u| g[u].degree())
            .sum();
        assert_eq!(degree_sum, 2 * g.num_edges());
    }
}

#[test]
fn test_solution_order_fixed_first() {
    let mut g = path4();
    g.add_to_fixed(2, 1);
    g.add_to_fixed(7, 0); // ids need not be active anywhere
    g[3].in_ds = true;
    g[0].in_ds = true;
    // Active order is 1, 2, 3, 4, so selected actives emit as 1 then 4.
    assert_eq!(g.solution(), vec![2, 7, 1, 4]);
    assert_eq!(g.selected_len(), 2);
}

#[test]
fn test_fixed_records_keep_domination_count() {
    let mut g = path4();
    g.add_to_fixed(3, 2);
    assert_eq!(g.fixed(), &[FixedVertex { id: 3, dominated_count: 2 }]);
}

#[test]
fn test_mark_neighbors_dominated() {
    let mut g = path4();
    g.mark_neighbors_dominated(1);
    assert_eq!(g[0].dominated_count, 1);
    assert_eq!(g[2].dominated_count, 1);
    assert_eq!(g[1].dominated_count, 0); // the vertex itself is untouched
}

#[test]
fn test_to_dot_mentions_edges_and_fixed() {
    let mut g = GraphStore::from_edges(2, &[(1, 2)]);
    g.add_to_fixed(9, 0);
    let dot = g.to_dot(true, Some("test"));
    assert!(dot.starts_with("graph test {"));
    assert!(dot.contains("1 -- 2") || dot.contains("2 -- 1"));
    assert!(dot.contains("9[style=filled, fillcolor=cyan]"));
}
