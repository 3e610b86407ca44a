//! Breadth-first traversal and connected-component labelling for [`AdjList`].
//!
//! Components are always computed over the undirected reading of the graph. An
//! undirected store already holds both directions of every edge; for a directed store
//! a reverse index is built first so that arcs are walked both ways.

use std::collections::VecDeque;

use crate::graph::adj_list::AdjList;
use crate::graph::components::Components;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex indices in BFS layer order. The discovered set is kept across
/// [`seed`](Bfs::seed) calls, so one `Bfs` can sweep several components without
/// revisiting anything.
pub struct Bfs<'a> {
    graph: &'a AdjList,
    reverse: Option<&'a [Vec<usize>]>,
    discovered: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// Creates a BFS over outgoing records, starting from `start`.
    ///
    /// An out-of-range `start` yields nothing.
    pub fn new(graph: &'a AdjList, start: usize) -> Self {
        let mut bfs = Self::unseeded(graph, None);
        bfs.seed(start);
        bfs
    }

    fn unseeded(graph: &'a AdjList, reverse: Option<&'a [Vec<usize>]>) -> Self {
        Self {
            graph,
            reverse,
            discovered: vec![false; graph.slot_count()],
            queue: VecDeque::new(),
        }
    }

    /// Queues `v` if it is in range and not yet discovered. Returns whether it was queued.
    pub fn seed(&mut self, v: usize) -> bool {
        match self.discovered.get_mut(v) {
            Some(seen) if !*seen => {
                *seen = true;
                self.queue.push_back(v);
                true
            }
            _ => false,
        }
    }

    /// Whether `v` has been queued by this traversal.
    pub fn is_discovered(&self, v: usize) -> bool {
        self.discovered.get(v).copied().unwrap_or(false)
    }

    #[inline]
    fn discover(&mut self, v: usize) {
        if v < self.discovered.len() && !self.discovered[v] {
            self.discovered[v] = true;
            self.queue.push_back(v);
        }
    }
}

impl<'a> Iterator for Bfs<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        let graph = self.graph;
        for v in graph.neighbors(u) {
            self.discover(v);
        }
        if let Some(reverse) = self.reverse {
            for &v in &reverse[u] {
                self.discover(v);
            }
        }

        Some(u)
    }
}

/// Sources of the arcs entering each vertex.
fn reverse_index(graph: &AdjList) -> Vec<Vec<usize>> {
    let mut reverse = vec![Vec::new(); graph.slot_count()];
    for edge in graph.edges() {
        reverse[edge.target].push(edge.source);
    }
    reverse
}

/// Labels every slot `0..graph.slot_count()` with a component id.
///
/// Slots are scanned in ascending order; each undiscovered slot seeds a BFS whose
/// reach gets the next id, so ids start at 0 and follow each component's smallest
/// index.
pub fn connected_components(graph: &AdjList) -> Components {
    let len = graph.slot_count();
    let reverse = if graph.is_directed() {
        Some(reverse_index(graph))
    } else {
        None
    };

    let mut labels = vec![0usize; len];
    let mut walk = Bfs::unseeded(graph, reverse.as_deref());
    let mut next_id = 0usize;

    for v in 0..len {
        if !walk.seed(v) {
            continue;
        }
        for u in walk.by_ref() {
            labels[u] = next_id;
        }
        next_id += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(slots = len, components = next_id, "labelled connected components");

    Components::from_labels(labels, next_id)
}

impl AdjList {
    /// Vertices reachable from `seed` along outgoing records, in BFS order.
    ///
    /// For an undirected store this is exactly `seed`'s component. Empty if `seed`
    /// is out of range.
    pub fn bfs(&self, seed: usize) -> Vec<usize> {
        Bfs::new(self, seed).collect()
    }

    /// Partitions the vertex range into connected components.
    pub fn components(&self) -> Components {
        connected_components(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_visits_in_layer_order() {
        // 0 - 1, 0 - 2, 1 - 3
        let graph = AdjList::from_edges(false, [(0, 1), (0, 2), (1, 3)]);
        let order = graph.bfs(0);

        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 0);
        // Layer one before layer two.
        let pos = |v| order.iter().position(|&x| x == v).unwrap();
        assert!(pos(1) < pos(3));
        assert!(pos(2) < pos(3));
    }

    #[test]
    fn bfs_out_of_range_seed_is_empty() {
        let graph = AdjList::from_edges(false, [(0, 1)]);
        assert!(graph.bfs(7).is_empty());
        assert!(AdjList::undirected().bfs(0).is_empty());
    }

    #[test]
    fn bfs_follows_direction_in_directed_store() {
        let graph = AdjList::from_edges(true, [(0, 1), (2, 1)]);
        let mut reach = graph.bfs(0);
        reach.sort_unstable();
        assert_eq!(reach, vec![0, 1]);
        assert_eq!(graph.bfs(1), vec![1]);
    }

    #[test]
    fn bfs_handles_cycles_and_self_loops() {
        let graph = AdjList::from_edges(false, [(0, 1), (1, 2), (2, 0), (1, 1)]);
        let mut reach = graph.bfs(2);
        reach.sort_unstable();
        assert_eq!(reach, vec![0, 1, 2]);
    }

    #[test]
    fn seed_ignores_discovered_vertices() {
        let graph = AdjList::from_edges(false, [(0, 1)]);
        let mut walk = Bfs::new(&graph, 0);
        assert!(!walk.seed(0));
        assert_eq!(walk.by_ref().count(), 2);
        assert!(walk.is_discovered(1));
        assert!(!walk.seed(1));
    }

    #[test]
    fn directed_components_are_weak() {
        // 1 -> 0 is only reachable from 0 by walking the arc backwards.
        let graph = AdjList::from_edges(true, [(1, 0), (2, 3)]);
        let comps = graph.components();
        assert_eq!(comps.as_slice(), &[0, 0, 1, 1]);
    }

    #[test]
    fn unseen_slots_are_singletons() {
        let mut graph = AdjList::undirected();
        graph.add_edge(0, 3);
        let comps = graph.components();
        assert_eq!(comps.as_slice(), &[0, 1, 2, 0]);
        assert_eq!(comps.count(), 3);
    }
}
