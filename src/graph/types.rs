//! Core type definitions for the graph store

use std::fmt;

/// Positional identifier for a node
///
/// A node has no identity beyond its position in the store. Removing a node
/// shifts every later node down by one, so any index held by a caller is
/// invalidated by a `remove_node` call with a smaller-or-equal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

impl From<NodeIndex> for usize {
    fn from(index: NodeIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_index() {
        let idx = NodeIndex::new(42);
        assert_eq!(idx.as_usize(), 42);
        assert_eq!(format!("{}", idx), "NodeIndex(42)");

        let idx2: NodeIndex = 100.into();
        assert_eq!(usize::from(idx2), 100);
    }

    #[test]
    fn test_index_ordering() {
        let a = NodeIndex::new(1);
        let b = NodeIndex::new(2);
        assert!(a < b);
    }
}
