use super::edges::{EdgeArena, EdgeId};
use super::AdjList;

/// A borrowed view of one physical edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    /// Vertex whose list holds the record.
    pub source: usize,
    /// Vertex the record points at.
    pub target: usize,
    /// Weight stored with the record; 0 unless inserted with a weight.
    pub weight: i64,
}

/// Walks one vertex's incidence list, most recently inserted record first.
pub struct EdgesFrom<'a> {
    arena: &'a EdgeArena,
    source: usize,
    current: Option<EdgeId>,
}

impl<'a> EdgesFrom<'a> {
    #[inline]
    pub(super) fn new(arena: &'a EdgeArena, source: usize, head: Option<EdgeId>) -> Self {
        Self {
            arena,
            source,
            current: head,
        }
    }
}

impl<'a> Iterator for EdgesFrom<'a> {
    type Item = EdgeRef;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.arena.get(id);
        self.current = node.next;
        Some(EdgeRef {
            source: self.source,
            target: node.target,
            weight: node.weight,
        })
    }
}

/// Targets of one vertex's outgoing records, in list order.
pub struct Neighbors<'a> {
    inner: EdgesFrom<'a>,
}

impl<'a> Neighbors<'a> {
    #[inline]
    pub(super) fn new(inner: EdgesFrom<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| e.target)
    }
}

/// Every record in the store: ascending source, then list order.
pub struct Edges<'a> {
    graph: &'a AdjList,
    source: usize,
    current: EdgesFrom<'a>,
}

impl<'a> Edges<'a> {
    pub(super) fn new(graph: &'a AdjList) -> Self {
        Self {
            graph,
            source: 0,
            current: graph.edges_from(0),
        }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = EdgeRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.next() {
                return Some(edge);
            }
            self.source += 1;
            if self.source >= self.graph.slot_count() {
                return None;
            }
            self.current = self.graph.edges_from(self.source);
        }
    }
}

/// Indices that have appeared as an endpoint, ascending.
pub struct Vertices<'a> {
    present: core::iter::Enumerate<core::slice::Iter<'a, bool>>,
}

impl<'a> Vertices<'a> {
    #[inline]
    pub(super) fn new(present: &'a [bool]) -> Self {
        Self {
            present: present.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Vertices<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.present
            .by_ref()
            .find_map(|(v, &seen)| if seen { Some(v) } else { None })
    }
}
