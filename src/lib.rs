//! # `tangle` - Mutable Directed Multigraph Container
//!
//! A reusable graph container in the spirit of the standard-library
//! collections: attach arbitrary payloads to vertices and edges, connect and
//! disconnect them freely, and query adjacency in insertion order. The
//! container is the whole crate — no traversal algorithms, no serialization
//! of graph structure, no built-in thread safety.
//!
//! ## Ownership Model
//!
//! - **Graph-owned storage**: The [`Graph`] is the sole owner of every
//!   vertex and edge it creates. Entities live until explicitly removed or
//!   until the graph is dropped.
//! - **Generational handles**: Callers hold [`VertexId`] / [`EdgeId`] —
//!   plain `Copy` keys pairing an arena slot with the generation it was
//!   issued under. A removed entity's handle can never be confused with the
//!   slot's next occupant (ABA protection).
//! - **Absent, not undefined**: A stale handle reads as absent everywhere.
//!   Lookups return `None`, removals no-op, adjacency queries skip it. No
//!   operation turns a stale handle into undefined behavior.
//! - **Instance separation**: Every handle carries the tag of the graph
//!   that issued it. Using it on another instance fails fast in debug
//!   builds and reads as absent in release builds.
//!
//! ## Key Features
//!
//! - **Multigraph semantics**: parallel edges and self-loops, no payload
//!   dedup, identity is allocation identity.
//! - **Detachable endpoints**: edges carry `Option<VertexId>` endpoints and
//!   can be created unconnected, then wired up through
//!   [`edge_mut`](Graph::edge_mut).
//! - **Cascading removal**: removing a vertex removes every edge naming it,
//!   as one explicit mutation.
//! - **Insertion order**: both collections preserve it; queries and
//!   iterators report it.
//!
//! ## Example
//!
//! ```rust
//! use tangle::Graph;
//!
//! let mut g: Graph<&str, u32> = Graph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let ab = g.add_edge(a, b, 7);
//!
//! assert_eq!(g.edges_out(a), vec![ab]);
//!
//! // Removing `a` cascades to the edge; both handles now read as absent.
//! g.remove_vertex(a);
//! assert!(g.vertex(a).is_none());
//! assert!(g.edge(ab).is_none());
//! assert_eq!(g.vertex(b), Some(&"b"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the handle types (and only
//!   those — graph structure itself is deliberately not serializable).
//! - `tracing`: trace-level events on structural mutation.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod arena;
pub mod graph;

pub use arena::{Arena, ArenaIndex};
pub use graph::{Edge, EdgeId, Edges, Graph, Vertices, VertexId};

// Compile-time layout checks: handles are small plain data, and the graph
// tag's niche keeps `Option<VertexId>` (an edge endpoint) the same size as
// the handle itself.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<ArenaIndex>() == 8);
    assert!(mem::size_of::<VertexId>() == 12);
    assert!(mem::size_of::<EdgeId>() == 12);
    assert!(mem::size_of::<Option<VertexId>>() == mem::size_of::<VertexId>());
    assert!(mem::size_of::<Option<EdgeId>>() == mem::size_of::<EdgeId>());
};
