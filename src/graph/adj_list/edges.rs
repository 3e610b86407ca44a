/// Index of an edge record inside an [`EdgeArena`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(usize);

impl EdgeId {
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

const _: () = assert!(core::mem::size_of::<EdgeId>() == core::mem::size_of::<usize>());

/// One physical edge record: a link in its source vertex's incidence list.
#[derive(Debug, Clone)]
pub(crate) struct EdgeNode {
    pub(crate) target: usize,
    pub(crate) weight: i64,
    pub(crate) next: Option<EdgeId>,
}

/// Append-only storage for edge records.
///
/// Records are never freed, so an `EdgeId` stays valid for the lifetime of the arena.
/// Lists are threaded through `next`; the arena itself knows nothing about heads.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeArena {
    nodes: Vec<EdgeNode>,
}

impl EdgeArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a record whose successor is `next` and returns its id.
    #[inline]
    pub(crate) fn push_front(&mut self, next: Option<EdgeId>, target: usize, weight: i64) -> EdgeId {
        let id = EdgeId(self.nodes.len());
        self.nodes.push(EdgeNode {
            target,
            weight,
            next,
        });
        id
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: EdgeId) -> &EdgeNode {
        &self.nodes[id.index()]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
