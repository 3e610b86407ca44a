//! Connected-component labelling result.

use serde::{Deserialize, Serialize};

/// A component id for every vertex slot of a graph.
///
/// Ids are dense, `0..count()`, numbered in order of each component's smallest
/// vertex index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    pub(crate) fn from_labels(labels: Vec<usize>, count: usize) -> Self {
        debug_assert!(labels.iter().all(|&id| id < count));
        Self { labels, count }
    }

    /// Component id per vertex index.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.labels
    }

    /// Consumes the result, returning the per-vertex ids.
    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.labels
    }

    /// Number of labelled vertex slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// `true` for a graph with no vertex slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct components.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, or `None` if `v` is out of range.
    #[inline]
    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.labels.get(v).copied()
    }

    /// `true` iff both vertices are in range and share a component.
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Vertices labelled `id`, ascending.
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| if c == id { Some(v) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Components {
        Components::from_labels(vec![0, 1, 0, 2, 1], 3)
    }

    #[test]
    fn queries() {
        let comps = sample();
        assert_eq!(comps.len(), 5);
        assert_eq!(comps.count(), 3);
        assert_eq!(comps.component_of(3), Some(2));
        assert_eq!(comps.component_of(5), None);
        assert!(comps.same_component(0, 2));
        assert!(!comps.same_component(0, 1));
        assert!(!comps.same_component(0, 9));
        assert_eq!(comps.members(1), vec![1, 4]);
        assert!(comps.members(7).is_empty());
    }

    #[test]
    fn serializes_as_labels_and_count() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"labels":[0,1,0,2,1],"count":3}"#);
        let back: Components = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
