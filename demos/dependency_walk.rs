//! Consumer-side traversal example.
//!
//! The container deliberately ships no traversal algorithms; a caller that
//! wants one writes it against the adjacency queries. This demo walks a
//! small task graph with a worklist and an explicit visited set, so it
//! terminates even when the graph has cycles.

use std::collections::HashSet;

use tangle::{Graph, VertexId};

fn reachable(g: &Graph<&str, ()>, start: VertexId) -> Vec<VertexId> {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut worklist = vec![start];
    let mut order = Vec::new();

    while let Some(v) = worklist.pop() {
        if !visited.insert(v) {
            continue;
        }
        order.push(v);
        for e in g.edges_out(v) {
            // Every edge in an edges_out snapshot has a set start; the end
            // may still be unconnected.
            if let Some(next) = g.edge(e).and_then(|edge| edge.end) {
                worklist.push(next);
            }
        }
    }

    order
}

fn main() {
    println!("Dependency Walk Example");
    println!("=======================");

    let mut g: Graph<&str, ()> = Graph::new();

    let fetch = g.add_vertex("fetch");
    let parse = g.add_vertex("parse");
    let check = g.add_vertex("check");
    let emit = g.add_vertex("emit");
    let cache = g.add_vertex("cache");

    g.add_edge(fetch, parse, ());
    g.add_edge(parse, check, ());
    g.add_edge(check, emit, ());
    g.add_edge(emit, cache, ());
    // A cycle: the walk must still terminate.
    g.add_edge(cache, fetch, ());

    let order = reachable(&g, fetch);
    println!("reachable from 'fetch' ({} vertices):", order.len());
    for v in &order {
        println!("  {}", g.vertex(*v).unwrap());
    }

    // Cutting the middle of the pipeline shrinks the reachable set.
    g.remove_vertex(check);
    let order = reachable(&g, fetch);
    println!("after removing 'check' ({} vertices):", order.len());
    for v in &order {
        println!("  {}", g.vertex(*v).unwrap());
    }
}
