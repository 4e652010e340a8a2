//! A mutable directed multigraph with payload-carrying vertices and edges.
//!
//! The graph owns every vertex and edge it creates; callers hold [`VertexId`]
//! and [`EdgeId`] handles — plain `Copy` keys into generational arena
//! storage. A handle stays valid exactly until its entity is removed, after
//! which it reads as absent everywhere (lookups return `None`, removals
//! no-op, queries skip it). Both collections preserve insertion order, which
//! is the order adjacency queries and iterators report.
//!
//! Design notes:
//! - Edges reference their endpoints; vertices know nothing about their
//!   edges. Removing a vertex therefore scans the edge list and drops every
//!   edge naming it — one explicit, atomic cascade rather than any implicit
//!   cleanup.
//! - Endpoints are *optional*. An edge can be created detached and wired up
//!   (or re-wired) later through [`edge_mut`](Graph::edge_mut); an unset
//!   endpoint never matches any adjacency query.
//! - Parallel edges and self-loops are permitted; payload equality plays no
//!   role in identity.
//!
//! # Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` / `add_edge` | O(1) amortized | Arena insert + order append |
//! | `remove_edge` | O(edges) | Order-list scan |
//! | `remove_vertex` | O(edges) | Single cascade pass |
//! | `edges_in` / `edges_out` / `edges_all` | O(edges) | Materialized snapshot |
//! | `vertex` / `edge` lookup | O(1) | Generation-checked arena access |
//!
//! The container is not internally synchronized. Callers needing
//! multi-thread access must serialize externally (e.g. a mutex around the
//! whole graph).

use core::fmt;
use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::arena::{Arena, ArenaIndex};

mod iter;
#[cfg(test)]
mod tests;

pub use iter::{Edges, Vertices};

/// Process-global source of graph tags, so handles can be told apart across
/// instances.
static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(1);

fn next_graph_tag() -> NonZeroU32 {
    let raw = NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed);
    NonZeroU32::new(raw).expect("graph tag counter wrapped")
}

/// Handle to a vertex owned by a [`Graph`].
///
/// Plain `Copy` data: slot index, generation, and the tag of the graph that
/// issued it. Two handles are equal iff they name the same allocation of the
/// same graph — payload equality is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId {
    pub(crate) slot: ArenaIndex,
    pub(crate) graph: NonZeroU32,
}

impl VertexId {
    /// The arena slot position behind this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.slot.index()
    }

    /// The slot generation this handle was issued under.
    #[inline]
    pub fn generation(self) -> u32 {
        self.slot.generation()
    }
}

/// Handle to an edge owned by a [`Graph`].
///
/// Same identity rules as [`VertexId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId {
    pub(crate) slot: ArenaIndex,
    pub(crate) graph: NonZeroU32,
}

impl EdgeId {
    /// The arena slot position behind this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.slot.index()
    }

    /// The slot generation this handle was issued under.
    #[inline]
    pub fn generation(self) -> u32 {
        self.slot.generation()
    }
}

/// A graph-owned edge: payload plus two optional endpoints.
///
/// The fields are public so callers can wire a detached edge up after
/// creation, the same way they reach the payload:
///
/// ```
/// use tangle::Graph;
///
/// let mut g = Graph::new();
/// let v1 = g.add_vertex("a");
/// let v2 = g.add_vertex("b");
/// let e = g.add_edge_detached(1);
/// let edge = g.edge_mut(e).unwrap();
/// edge.start = Some(v1);
/// edge.end = Some(v2);
/// assert_eq!(g.edges_out(v1), vec![e]);
/// ```
///
/// No membership validation happens on assignment: storing a stale handle,
/// or one issued by a different graph, is a caller error. Such an endpoint
/// is not covered by the cascade invariant and its query behavior is
/// unspecified.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// Source endpoint, or `None` while unconnected.
    pub start: Option<VertexId>,
    /// Target endpoint, or `None` while unconnected.
    pub end: Option<VertexId>,
    /// Caller payload.
    pub data: E,
}

/// A mutable directed multigraph container, generic over vertex payload `V`
/// and edge payload `E`.
///
/// Payload types are opaque: no `Eq`, `Ord`, or `Hash` bounds are imposed,
/// they only need to be storable. See the [module docs](self) for the
/// ownership and identity model.
pub struct Graph<V, E> {
    tag: NonZeroU32,
    vertices: Arena<V>,
    edges: Arena<Edge<E>>,
    /// Live vertex handles in insertion order.
    vertex_order: Vec<VertexId>,
    /// Live edge handles in insertion order.
    edge_order: Vec<EdgeId>,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            tag: next_graph_tag(),
            vertices: Arena::new(),
            edges: Arena::new(),
            vertex_order: Vec::new(),
            edge_order: Vec::new(),
        }
    }

    /// Creates an empty graph with storage reserved for `vertices` vertices
    /// and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            tag: next_graph_tag(),
            vertices: Arena::with_capacity(vertices),
            edges: Arena::with_capacity(edges),
            vertex_order: Vec::with_capacity(vertices),
            edge_order: Vec::with_capacity(edges),
        }
    }

    /// Resolves a vertex handle to its arena slot, rejecting handles issued
    /// by a different graph. Debug builds fail fast on the mismatch; release
    /// builds treat the foreign handle as absent.
    #[inline]
    fn vertex_slot(&self, v: VertexId) -> Option<ArenaIndex> {
        debug_assert_eq!(
            v.graph, self.tag,
            "vertex handle used on a graph that did not issue it"
        );
        (v.graph == self.tag).then_some(v.slot)
    }

    #[inline]
    fn edge_slot(&self, e: EdgeId) -> Option<ArenaIndex> {
        debug_assert_eq!(
            e.graph, self.tag,
            "edge handle used on a graph that did not issue it"
        );
        (e.graph == self.tag).then_some(e.slot)
    }

    /// Adds a vertex holding `data` and returns its handle.
    ///
    /// Always succeeds; equal payloads still make distinct vertices.
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId {
            slot: self.vertices.insert(data),
            graph: self.tag,
        };
        self.vertex_order.push(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(index = id.index(), generation = id.generation(), "add_vertex");
        id
    }

    /// Removes a vertex and, atomically from the caller's perspective, every
    /// edge that names it as an endpoint.
    ///
    /// A stale handle (already removed) is a no-op, so calling this twice
    /// with the same handle is safe.
    pub fn remove_vertex(&mut self, v: VertexId) {
        let Some(slot) = self.vertex_slot(v) else { return };
        if !self.vertices.contains(slot) {
            return;
        }

        // Cascade first: drop every incident edge, keeping the order list in
        // step with the arena.
        let gone = Some(v);
        let edges = &mut self.edges;
        self.edge_order.retain(|&e| {
            let incident = edges
                .get(e.slot)
                .is_some_and(|edge| edge.start == gone || edge.end == gone);
            if incident {
                edges.remove(e.slot);
            }
            !incident
        });

        self.vertices.remove(slot);
        self.vertex_order.retain(|&u| u != v);
        #[cfg(feature = "tracing")]
        tracing::trace!(index = v.index(), "remove_vertex");
    }

    /// Adds an edge from `start` to `end` holding `data`.
    ///
    /// Endpoints are stored as given, without membership validation — passing
    /// a stale handle or one from another graph is a caller error (see
    /// [`Edge`]). `start` and `end` may be the same vertex (self-loop), and
    /// any number of edges may connect the same pair.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId, data: E) -> EdgeId {
        self.add_edge_between(Some(start), Some(end), data)
    }

    /// Adds an edge with both endpoints unset.
    ///
    /// Connect it later by assigning through [`edge_mut`](Self::edge_mut).
    /// While detached (or half-connected), the edge counts toward
    /// [`edge_count`](Self::edge_count) but matches no adjacency query.
    pub fn add_edge_detached(&mut self, data: E) -> EdgeId {
        self.add_edge_between(None, None, data)
    }

    /// Adds an edge with each endpoint independently set or unset.
    pub fn add_edge_between(
        &mut self,
        start: Option<VertexId>,
        end: Option<VertexId>,
        data: E,
    ) -> EdgeId {
        let id = EdgeId {
            slot: self.edges.insert(Edge { start, end, data }),
            graph: self.tag,
        };
        self.edge_order.push(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(index = id.index(), generation = id.generation(), "add_edge");
        id
    }

    /// Removes an edge. Vertices are unaffected.
    ///
    /// A stale handle is a no-op; calling this twice with the same handle is
    /// safe.
    pub fn remove_edge(&mut self, e: EdgeId) {
        let Some(slot) = self.edge_slot(e) else { return };
        if self.edges.remove(slot).is_none() {
            return;
        }
        self.edge_order.retain(|&x| x != e);
        #[cfg(feature = "tracing")]
        tracing::trace!(index = e.index(), "remove_edge");
    }

    /// Returns the payload of a live vertex.
    pub fn vertex(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(self.vertex_slot(v)?)
    }

    /// Mutable access to the payload of a live vertex.
    pub fn vertex_mut(&mut self, v: VertexId) -> Option<&mut V> {
        let slot = self.vertex_slot(v)?;
        self.vertices.get_mut(slot)
    }

    /// Returns a live edge: payload plus endpoints.
    pub fn edge(&self, e: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(self.edge_slot(e)?)
    }

    /// Mutable access to a live edge, including its endpoint fields.
    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut Edge<E>> {
        let slot = self.edge_slot(e)?;
        self.edges.get_mut(slot)
    }

    /// True if `v` names a live vertex of this graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex(v).is_some()
    }

    /// True if `e` names a live edge of this graph.
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edge(e).is_some()
    }

    /// Every edge ending at `v`, in edge-insertion order.
    ///
    /// The result is a snapshot: a freshly collected list of handles that
    /// stays usable across later structural mutation. An edge with an unset
    /// `end` never appears.
    pub fn edges_in(&self, v: VertexId) -> Vec<EdgeId> {
        if self.vertex_slot(v).is_none() {
            return Vec::new();
        }
        let target = Some(v);
        self.edge_order
            .iter()
            .copied()
            .filter(|&e| self.edges.get(e.slot).is_some_and(|edge| edge.end == target))
            .collect()
    }

    /// Every edge starting at `v`, in edge-insertion order. Snapshot
    /// semantics as in [`edges_in`](Self::edges_in).
    pub fn edges_out(&self, v: VertexId) -> Vec<EdgeId> {
        if self.vertex_slot(v).is_none() {
            return Vec::new();
        }
        let target = Some(v);
        self.edge_order
            .iter()
            .copied()
            .filter(|&e| {
                self.edges
                    .get(e.slot)
                    .is_some_and(|edge| edge.start == target)
            })
            .collect()
    }

    /// Every edge touching `v` at either endpoint, in edge-insertion order.
    ///
    /// A self-loop on `v` appears exactly once.
    pub fn edges_all(&self, v: VertexId) -> Vec<EdgeId> {
        if self.vertex_slot(v).is_none() {
            return Vec::new();
        }
        let target = Some(v);
        self.edge_order
            .iter()
            .copied()
            .filter(|&e| {
                self.edges
                    .get(e.slot)
                    .is_some_and(|edge| edge.start == target || edge.end == target)
            })
            .collect()
    }

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    /// Number of live edges, detached ones included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// True iff the graph holds no vertices and no edges.
    pub fn is_empty(&self) -> bool {
        self.vertex_order.is_empty() && self.edge_order.is_empty()
    }

    /// Handle of the oldest live vertex.
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertex_order.first().copied()
    }

    /// Handle of the newest live vertex.
    pub fn last_vertex(&self) -> Option<VertexId> {
        self.vertex_order.last().copied()
    }

    /// Handle of the oldest live edge.
    pub fn first_edge(&self) -> Option<EdgeId> {
        self.edge_order.first().copied()
    }

    /// Handle of the newest live edge.
    pub fn last_edge(&self) -> Option<EdgeId> {
        self.edge_order.last().copied()
    }

    /// Iterates live vertices as `(handle, &payload)` in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(&self.vertex_order, &self.vertices)
    }

    /// Iterates live edges as `(handle, &edge)` in insertion order.
    pub fn edges(&self) -> Edges<'_, E> {
        Edges::new(&self.edge_order, &self.edges)
    }

    /// Drops every vertex and edge.
    ///
    /// Handles issued before the clear stay invalid afterwards, including
    /// across slot reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.vertex_order.clear();
        self.edge_order.clear();
        #[cfg(feature = "tracing")]
        tracing::trace!("clear");
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
