//! # `adjgraph` - Incremental Adjacency-List Graphs
//!
//! A small in-memory graph: edges are added one at a time, vertices appear implicitly
//! as edge endpoints, and the store can report its counts, label connected
//! components, and render itself as Graphviz DOT.
//!
//! ## Key Features
//!
//! - **Implicit vertices**: vertices are `usize` indices; the vertex range grows on demand
//! - **Incidence lists**: per-vertex singly linked edge lists in a shared arena, newest first
//! - **Literal undirected storage**: an undirected edge is stored as two directed records
//! - **Components**: BFS-based labelling, ids dense from 0 in smallest-vertex order
//! - **DOT output**: `digraph`/`graph` text with optional `strict` header
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::AdjList;
//!
//! let mut graph = AdjList::undirected();
//! graph.add_edge(0, 1);
//! graph.add_edge(2, 3);
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//!
//! let comps = graph.components();
//! assert!(comps.same_component(0, 1));
//! assert!(!comps.same_component(1, 2));
//!
//! assert_eq!(
//!     graph.render(),
//!     "graph {\n  0 -- 1;\n  1 -- 0;\n  2 -- 3;\n  3 -- 2;\n}"
//! );
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `tracing` events on vertex-range growth and component labelling
//! - `proptest`: expose `graph::adj_list::strategy` for property tests in downstream crates

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{AdjList, Components, EdgeRef, RenderOptions};

