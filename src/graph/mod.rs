//! Graph store, traversal, and rendering.
//!
//! - `adj_list`: the incrementally built adjacency list
//! - `algorithms`: BFS and connected components
//! - `components`: component labelling result
//! - `render`: Graphviz DOT output

pub mod adj_list;
pub mod algorithms;
pub mod components;
pub mod render;

pub use adj_list::{AdjList, EdgeRef};
pub use algorithms::{connected_components, Bfs};
pub use components::Components;
pub use render::RenderOptions;
