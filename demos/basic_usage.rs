//! Basic multigraph usage example

use tangle::Graph;

fn main() {
    println!("Multigraph Basic Usage Example");
    println!("==============================");

    let mut g: Graph<i32, i32> = Graph::new();

    // Vertices hold caller payloads; handles are plain Copy keys.
    let v1 = g.add_vertex(7);
    let v2 = g.add_vertex(2);
    let v3 = g.add_vertex(3);
    println!("first vertex payload: {}", g.vertex(g.first_vertex().unwrap()).unwrap());

    // Connect two vertices at creation time.
    g.add_edge(v1, v2, 100);

    // Or add an edge first and connect it to vertices later.
    let e = g.add_edge_detached(101);
    let edge = g.edge_mut(e).unwrap();
    edge.start = Some(v2);
    edge.end = Some(v3);

    // Update vertex payload through the handle.
    *g.vertex_mut(v1).unwrap() = 1;
    println!("first vertex payload: {}", g.vertex(g.first_vertex().unwrap()).unwrap());

    println!(
        "{} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    for (_id, edge) in g.edges() {
        println!(
            "  edge {:>3}: {:?} -> {:?}",
            edge.data,
            edge.start.map(tangle::VertexId::index),
            edge.end.map(tangle::VertexId::index),
        );
    }

    // Removing v2 cascades to both edges that touch it.
    g.remove_vertex(v2);
    println!(
        "after removing v2: {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );

    // Stale handles read as absent rather than failing.
    assert!(g.vertex(v2).is_none());
    assert!(g.edge(e).is_none());
    println!("stale handles resolve to None");
}
