//! Incrementally built adjacency-list graph.
//!
//! Vertical split:
//! - `edges`: the edge-record arena
//! - `iter`: incidence-list and whole-graph iteration
//! - `tests`: module tests
//!
//! Vertices are implicit: a vertex is an index into the per-vertex head array and it
//! exists once it has been the endpoint of an inserted edge. Each vertex owns a singly
//! linked incidence list threaded through the shared arena, newest record first.
//!
//! ```text
//! heads
//!   0 -> { target: 1 } -> { target: 3 }
//!   1 -> { target: 2 } -> { target: 3 }
//!   2 -> { target: 0 }
//! ```
//!
//! # Performance
//! - `add_edge`: amortized O(1), plus O(k) when the vertex range grows by k slots
//! - `vertex_count` / `edge_count`: O(1)
//! - `neighbors`: O(degree)

mod edges;
mod iter;
#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

use core::fmt;

use crate::error::{GraphError, Result};
use crate::graph::render::{self, RenderOptions};
use edges::{EdgeArena, EdgeId};
pub use iter::{EdgeRef, Edges, EdgesFrom, Neighbors, Vertices};

/// A grow-only adjacency list with a direction mode fixed at construction.
///
/// In undirected mode every insertion stores two physical records, `x -> y` and
/// `y -> x`, and both count towards [`edge_count`](Self::edge_count).
#[derive(Debug, Clone)]
pub struct AdjList {
    edges: EdgeArena,
    heads: Vec<Option<EdgeId>>,
    present: Vec<bool>,
    directed: bool,
    edge_count: usize,
    vertex_count: usize,
}

impl AdjList {
    /// Creates an empty graph in the requested mode.
    pub fn new(directed: bool) -> Self {
        Self {
            edges: EdgeArena::default(),
            heads: Vec::new(),
            present: Vec::new(),
            directed,
            edge_count: 0,
            vertex_count: 0,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `vertices` slots and `edges` physical records.
    pub fn with_capacity(directed: bool, vertices: usize, edges: usize) -> Self {
        Self {
            edges: EdgeArena::with_capacity(edges),
            heads: Vec::with_capacity(vertices),
            present: Vec::with_capacity(vertices),
            directed,
            edge_count: 0,
            vertex_count: 0,
        }
    }

    /// Builds a graph from a list of `(x, y)` pairs, inserted in order.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(directed);
        graph.extend(edges);
        graph
    }

    /// Direction mode chosen at construction.
    #[inline(always)]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of distinct indices that have appeared as an endpoint.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of physical edge records.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Length of the vertex range, i.e. one past the largest endpoint seen.
    ///
    /// Indices below this bound that never appeared as an endpoint are valid slots
    /// with no edges.
    #[inline(always)]
    pub fn slot_count(&self) -> usize {
        self.heads.len()
    }

    /// Whether `v` has appeared as an endpoint.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.present.get(v).copied().unwrap_or(false)
    }

    /// Inserts `x -> y` with weight 0 (and `y -> x` in undirected mode).
    pub fn add_edge(&mut self, x: usize, y: usize) {
        self.add_weighted_edge(x, y, 0);
    }

    /// Inserts `x -> y` carrying `weight` (and the mirror record in undirected mode).
    pub fn add_weighted_edge(&mut self, x: usize, y: usize, weight: i64) {
        self.insert_record(x, y, weight);
        if !self.directed {
            self.insert_record(y, x, weight);
        }
    }

    /// Signed entry point: rejects negative endpoints without touching the graph.
    pub fn try_add_edge(&mut self, x: i64, y: i64) -> Result<()> {
        let x = Self::checked_vertex(x)?;
        let y = Self::checked_vertex(y)?;
        self.add_edge(x, y);
        Ok(())
    }

    fn checked_vertex(v: i64) -> Result<usize> {
        usize::try_from(v).map_err(|_| GraphError::InvalidVertex { vertex: v })
    }

    fn insert_record(&mut self, x: usize, y: usize, weight: i64) {
        let needed = x.max(y);
        if needed >= self.heads.len() {
            self.grow_to(needed);
        }

        let new_head = self.edges.push_front(self.heads[x], y, weight);
        self.heads[x] = Some(new_head);
        self.edge_count += 1;

        self.mark_present(x);
        self.mark_present(y);
    }

    /// Grows both slot arrays so that `max_index` is addressable.
    fn grow_to(&mut self, max_index: usize) {
        let new_len = max_index
            .checked_add(1)
            .expect("vertex index usize::MAX cannot be addressed");
        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.heads.len(), to = new_len, "growing vertex slots");
        self.heads.resize(new_len, None);
        self.present.resize(new_len, false);
        debug_assert_eq!(self.heads.len(), self.present.len());
    }

    #[inline]
    fn mark_present(&mut self, v: usize) {
        if !self.present[v] {
            self.present[v] = true;
            self.vertex_count += 1;
        }
    }

    /// Number of outgoing records stored for `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.edges_from(v).count()
    }

    /// Outgoing records of `v`, most recently inserted first. Empty for unknown `v`.
    #[inline]
    pub fn edges_from(&self, v: usize) -> EdgesFrom<'_> {
        let head = self.heads.get(v).copied().flatten();
        EdgesFrom::new(&self.edges, v, head)
    }

    /// Targets of `v`'s outgoing records, in list order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> Neighbors<'_> {
        Neighbors::new(self.edges_from(v))
    }

    /// Every record, by ascending source and then list order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self)
    }

    /// Indices that have appeared as an endpoint, ascending.
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices::new(&self.present)
    }

    /// Renders the graph as DOT text with default options.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Renders the graph as DOT text with the given options.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        render::to_dot(self, options)
    }

    #[cfg(test)]
    pub(crate) fn record_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for AdjList {
    fn default() -> Self {
        Self::undirected()
    }
}

impl Extend<(usize, usize)> for AdjList {
    fn extend<I: IntoIterator<Item = (usize, usize)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.add_edge(x, y);
        }
    }
}

impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_dot(f, self, &RenderOptions::default())
    }
}
