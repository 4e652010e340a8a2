use super::Graph;

#[test]
fn fresh_vertex_has_no_edges() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v = g.add_vertex(42);

    assert_eq!(g.vertex_count(), 1);
    assert!(g.contains_vertex(v));
    assert!(g.edges_all(v).is_empty());
    assert!(g.edges_in(v).is_empty());
    assert!(g.edges_out(v).is_empty());
}

#[test]
fn payload_equality_is_not_identity() {
    let mut g: Graph<i32, ()> = Graph::new();
    let a = g.add_vertex(7);
    let b = g.add_vertex(7);

    assert_ne!(a, b);
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn detached_edge_matches_no_query() {
    let mut g: Graph<(), i32> = Graph::new();
    let v = g.add_vertex(());
    let e = g.add_edge_detached(1);
    let half = g.add_edge_between(Some(v), None, 2);

    assert_eq!(g.edge_count(), 2);
    // Unset endpoints match nothing, not even each other's unset endpoints.
    assert!(g.edges_in(v).is_empty());
    assert_eq!(g.edges_out(v), vec![half]);
    assert!(g.edge(e).unwrap().start.is_none());
    assert!(g.edge(e).unwrap().end.is_none());
}

#[test]
fn connect_detached_edge_later() {
    let mut g: Graph<&str, i32> = Graph::new();
    let v1 = g.add_vertex("a");
    let v2 = g.add_vertex("b");
    let e = g.add_edge_detached(101);

    let edge = g.edge_mut(e).unwrap();
    edge.start = Some(v1);
    edge.end = Some(v2);

    assert_eq!(g.edges_out(v1), vec![e]);
    assert_eq!(g.edges_in(v2), vec![e]);
}

#[test]
fn remove_vertex_cascades() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v1 = g.add_vertex(1);
    let v2 = g.add_vertex(2);
    let v3 = g.add_vertex(3);
    let e1 = g.add_edge(v1, v2, 112);
    let e2 = g.add_edge(v1, v3, 113);
    let e3 = g.add_edge(v3, v1, 131);
    let e4 = g.add_edge(v2, v3, 123);
    let e5 = g.add_edge(v2, v2, 122);

    g.remove_vertex(v1);

    assert_eq!(g.vertex_count(), 2);
    assert!(!g.contains_vertex(v1));
    assert!(g.contains_vertex(v2));
    assert!(g.contains_vertex(v3));

    for dead in [e1, e2, e3] {
        assert!(!g.contains_edge(dead));
    }
    assert!(g.contains_edge(e4));
    assert!(g.contains_edge(e5));

    // Queries against the removed handle come back empty.
    assert!(g.edges_in(v1).is_empty());
    assert!(g.edges_out(v1).is_empty());
    assert!(g.edges_all(v1).is_empty());
}

#[test]
fn removal_is_idempotent() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v = g.add_vertex(1);
    let w = g.add_vertex(2);
    let e = g.add_edge(v, w, 10);

    g.remove_edge(e);
    assert_eq!(g.edge_count(), 0);
    g.remove_edge(e);
    assert_eq!(g.edge_count(), 0);

    g.remove_vertex(v);
    assert_eq!(g.vertex_count(), 1);
    g.remove_vertex(v);
    assert_eq!(g.vertex_count(), 1);
}

#[test]
fn self_loop_counted_once_in_edges_all() {
    let mut g: Graph<(), ()> = Graph::new();
    let v = g.add_vertex(());
    let e = g.add_edge(v, v, ());

    assert_eq!(g.edges_in(v), vec![e]);
    assert_eq!(g.edges_out(v), vec![e]);
    assert_eq!(g.edges_all(v), vec![e]);
}

#[test]
fn parallel_edges_are_distinct() {
    let mut g: Graph<(), i32> = Graph::new();
    let v = g.add_vertex(());
    let w = g.add_vertex(());
    let e1 = g.add_edge(v, w, 5);
    let e2 = g.add_edge(v, w, 5);

    assert_ne!(e1, e2);
    assert_eq!(g.edges_out(v), vec![e1, e2]);
    assert_eq!(g.edges_in(w), vec![e1, e2]);
}

#[test]
fn queries_follow_insertion_order() {
    let mut g: Graph<(), i32> = Graph::new();
    let v = g.add_vertex(());
    let a = g.add_vertex(());
    let b = g.add_vertex(());

    let e1 = g.add_edge(v, a, 1);
    let e2 = g.add_edge(b, v, 2);
    let e3 = g.add_edge(v, b, 3);
    let e4 = g.add_edge(a, v, 4);

    assert_eq!(g.edges_out(v), vec![e1, e3]);
    assert_eq!(g.edges_in(v), vec![e2, e4]);
    assert_eq!(g.edges_all(v), vec![e1, e2, e3, e4]);

    // Removal keeps the relative order of the survivors.
    g.remove_edge(e2);
    assert_eq!(g.edges_all(v), vec![e1, e3, e4]);
}

#[test]
fn snapshots_survive_mutation() {
    let mut g: Graph<(), i32> = Graph::new();
    let v = g.add_vertex(());
    let w = g.add_vertex(());
    let e1 = g.add_edge(v, w, 1);
    let e2 = g.add_edge(v, w, 2);

    let snapshot = g.edges_out(v);
    g.remove_edge(e1);

    // The snapshot is unchanged; its stale entry just resolves to nothing.
    assert_eq!(snapshot, vec![e1, e2]);
    assert!(g.edge(snapshot[0]).is_none());
    assert_eq!(g.edge(snapshot[1]).unwrap().data, 2);
}

#[test]
fn stale_vertex_handle_reads_as_absent() {
    let mut g: Graph<i32, ()> = Graph::new();
    let v = g.add_vertex(1);
    g.remove_vertex(v);

    // Slot reuse must not resurrect the old handle.
    let w = g.add_vertex(2);
    assert_eq!(v.index(), w.index());
    assert!(g.vertex(v).is_none());
    assert_eq!(g.vertex(w), Some(&2));
    assert!(g.edges_all(v).is_empty());
}

#[test]
fn iteration_in_insertion_order() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(10);
    let b = g.add_vertex(20);
    let c = g.add_vertex(30);
    g.remove_vertex(b);

    let seen: Vec<_> = g.vertices().map(|(id, data)| (id, *data)).collect();
    assert_eq!(seen, vec![(a, 10), (c, 30)]);

    let e1 = g.add_edge(a, c, 1);
    let e2 = g.add_edge_detached(2);
    let seen: Vec<_> = g.edges().map(|(id, edge)| (id, edge.data)).collect();
    assert_eq!(seen, vec![(e1, 1), (e2, 2)]);
}

#[test]
fn first_and_last_follow_order() {
    let mut g: Graph<i32, i32> = Graph::new();
    assert!(g.first_vertex().is_none());
    assert!(g.last_edge().is_none());

    let v1 = g.add_vertex(1);
    let v2 = g.add_vertex(2);
    let e1 = g.add_edge(v1, v2, 100);
    let e2 = g.add_edge_detached(101);

    assert_eq!(g.first_vertex(), Some(v1));
    assert_eq!(g.last_vertex(), Some(v2));
    assert_eq!(g.first_edge(), Some(e1));
    assert_eq!(g.last_edge(), Some(e2));

    g.remove_vertex(v1);
    assert_eq!(g.first_vertex(), Some(v2));
    assert_eq!(g.first_edge(), Some(e2));
}

#[test]
fn clear_empties_and_invalidates() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v = g.add_vertex(1);
    let w = g.add_vertex(2);
    let e = g.add_edge(v, w, 3);

    g.clear();
    assert!(g.is_empty());
    assert!(g.vertex(v).is_none());
    assert!(g.edge(e).is_none());

    // Handles from before the clear stay dead after slot reuse.
    let v2 = g.add_vertex(9);
    assert_eq!(v.index(), v2.index());
    assert!(g.vertex(v).is_none());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "did not issue it")]
fn foreign_handle_fails_fast_in_debug() {
    let mut g1: Graph<i32, ()> = Graph::new();
    let g2: Graph<i32, ()> = Graph::new();
    let v = g1.add_vertex(1);

    let _ = g2.vertex(v);
}
