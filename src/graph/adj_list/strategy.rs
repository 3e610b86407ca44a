//! `proptest` strategies for generating insertion sequences.

use proptest::prelude::*;

/// Edge lists over vertices `0..max_vertex`, with up to `max_edges` pairs.
pub fn edge_list(max_vertex: usize, max_edges: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..max_vertex, 0..max_vertex), 0..max_edges)
}

