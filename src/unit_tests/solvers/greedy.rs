use super::*;
use crate::topology::SimpleGraph;

fn dominated_everywhere(g: &GraphStore) -> bool {
    g.active().iter().all(|&v| g[v].dominated_count > 0)
}

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

#[test]
fn test_init_votes() {
    let mut g = GraphStore::from_graph(&SimpleGraph::star(5));
    init_votes(&mut g);
    assert_eq!(g[0].vote, 1.0 / 5.0); // center, degree 4
    assert_eq!(g[1].vote, 1.0 / 2.0); // leaf, degree 1
}

#[test]
fn test_construct_star_picks_center() {
    let mut g = GraphStore::from_graph(&SimpleGraph::star(6));
    init_votes(&mut g);
    let size = construct(&mut g, 0);
    assert_eq!(size, 1);
    assert!(g[0].in_ds);
    assert!(dominated_everywhere(&g));
    assert!(counts_consistent(&g));
}

#[test]
fn test_construct_path4() {
    let mut g = GraphStore::from_graph(&SimpleGraph::path(4));
    init_votes(&mut g);
    let size = construct(&mut g, 0);
    assert_eq!(size, 2);
    assert_eq!(g.selected_len(), 2);
    assert!(dominated_everywhere(&g));
    assert!(counts_consistent(&g));
}

#[test]
fn test_construct_respects_preexisting_domination() {
    // Mark everything dominated: nothing needs selecting.
    let mut g = GraphStore::from_graph(&SimpleGraph::path(5));
    init_votes(&mut g);
    for i in 0..g.active_len() {
        let v = g.active()[i];
        g[v].dominated_count = 1;
    }
    let size = construct(&mut g, 0);
    assert_eq!(size, 0);
    assert_eq!(g.selected_len(), 0);
}

#[test]
fn test_construct_completes_partial_selection() {
    let mut g = GraphStore::from_graph(&SimpleGraph::path(6));
    init_votes(&mut g);
    let size = construct(&mut g, 0);
    assert!(dominated_everywhere(&g));

    // Knock one selected vertex out, then rebuild.
    let victim = (0..g.active_len())
        .map(|i| g.active()[i])
        .find(|&v| g[v].in_ds)
        .unwrap();
    remove_from_ds(&mut g, victim);
    assert!(counts_consistent(&g));

    let rebuilt = construct(&mut g, size - 1);
    assert!(dominated_everywhere(&g));
    assert!(counts_consistent(&g));
    assert_eq!(rebuilt, g.selected_len());
}

#[test]
fn test_constructed_solution_is_minimal() {
    // No selected vertex may be removable without uncovering something.
    let mut g = GraphStore::from_graph(&SimpleGraph::grid(3, 4));
    init_votes(&mut g);
    construct(&mut g, 0);
    for i in 0..g.active_len() {
        let v = g.active()[i];
        if !g[v].in_ds {
            continue;
        }
        let has_private = g[v].dominated_count == 1
            || g[v]
                .neighbors()
                .iter()
                .any(|&u| g[u].dominated_count == 1);
        assert!(has_private, "vertex {} is removable", g[v].id());
    }
}

#[test]
fn test_make_minimal_drops_redundant_and_is_idempotent() {
    // Path 1-2-3 with both 1 and 2 selected: 1 is redundant.
    let mut g = GraphStore::from_graph(&SimpleGraph::path(3));
    init_votes(&mut g);
    g[0].in_ds = true;
    g[1].in_ds = true;
    g[0].dominated_count = 2;
    g[1].dominated_count = 2;
    g[2].dominated_count = 1;

    let size = make_minimal(&mut g, 2);
    assert_eq!(size, 1);
    assert!(!g[0].in_ds);
    assert!(g[1].in_ds);
    assert!(counts_consistent(&g));

    let again = make_minimal(&mut g, size);
    assert_eq!(again, 1);
    assert!(g[1].in_ds);
}

#[test]
fn test_remove_from_ds_updates_neighborhood() {
    let mut g = GraphStore::from_graph(&SimpleGraph::star(4));
    init_votes(&mut g);
    construct(&mut g, 0);
    assert!(g[0].in_ds);

    remove_from_ds(&mut g, 0);
    assert!(!g[0].in_ds);
    assert_eq!(g[0].dominated_count, 0);
    for v in 1..4 {
        assert_eq!(g[v].dominated_count, 0);
    }
}
