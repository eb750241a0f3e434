//! Read-only enumeration of the graph
//!
//! `Nodes` borrows the store immutably, so no mutation can interleave with
//! an enumeration in progress. Call `GraphStore::nodes` again to restart, or
//! clone an iterator to replay it from its current position.

use super::types::NodeIndex;
use std::iter::FusedIterator;

/// A single node as seen by an enumeration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEntry<'a> {
    pub index: NodeIndex,
    pub value: f64,
    /// Outgoing targets in insertion order
    pub targets: &'a [NodeIndex],
}

/// Iterator over all nodes in index order
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    values: &'a [f64],
    adjacency: &'a [Vec<NodeIndex>],
    front: usize,
    back: usize,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(values: &'a [f64], adjacency: &'a [Vec<NodeIndex>]) -> Self {
        debug_assert_eq!(values.len(), adjacency.len());
        Nodes {
            values,
            adjacency,
            front: 0,
            back: values.len(),
        }
    }

    fn entry(&self, i: usize) -> NodeEntry<'a> {
        NodeEntry {
            index: NodeIndex::new(i),
            value: self.values[i],
            targets: &self.adjacency[i],
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.entry(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Nodes<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry(self.back))
    }
}

impl ExactSizeIterator for Nodes<'_> {}

impl FusedIterator for Nodes<'_> {}
