//! In-memory graph storage implementation
//!
//! The store keeps two parallel vectors: one scalar value per node and one
//! ordered list of outgoing targets per node. Nodes are addressed purely by
//! position, so removing a node renumbers everything after it.

use super::iter::Nodes;
use super::types::NodeIndex;
use crate::config::GraphConfig;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid parent {parent} for new node {node}")]
    InvalidParent { parent: NodeIndex, node: NodeIndex },

    #[error("Node {0} not found")]
    InvalidNode(NodeIndex),

    #[error("Invalid edge: {from} -> {to}")]
    InvalidEdge { from: NodeIndex, to: NodeIndex },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed multigraph
///
/// - values: one `f64` per node, indexed by position
/// - adjacency: per-node ordered target list (duplicates and self-loops allowed)
///
/// `values.len() == adjacency.len()` and every stored target is below the
/// node count after every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    /// Node values, position is identity
    values: Vec<f64>,

    /// Outgoing targets for each node
    adjacency: Vec<Vec<NodeIndex>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        GraphStore {
            values: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Append a node, optionally linking it from an existing parent
    ///
    /// The node is always committed. When the parent does not precede the
    /// new node the result is `InvalidParent` but the insertion is kept; only
    /// the parent edge is skipped.
    pub fn add_node(&mut self, value: f64, parent: Option<NodeIndex>) -> (NodeIndex, GraphResult<()>) {
        let node = NodeIndex::new(self.values.len());
        self.values.push(value);
        self.adjacency.push(Vec::new());

        let result = match parent {
            None => Ok(()),
            Some(parent) if parent < node => {
                self.adjacency[parent.as_usize()].push(node);
                Ok(())
            }
            Some(parent) => Err(GraphError::InvalidParent { parent, node }),
        };

        match &result {
            Ok(()) => debug!(node = node.as_usize(), value, parent = ?parent, "added node"),
            Err(e) => warn!(node = node.as_usize(), value, error = %e, "added node without parent edge"),
        }

        (node, result)
    }

    /// Append `to` to the target list of `from`
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> GraphResult<()> {
        let n = self.values.len();
        if from.as_usize() >= n || to.as_usize() >= n {
            warn!(from = from.as_usize(), to = to.as_usize(), node_count = n, "rejected edge");
            return Err(GraphError::InvalidEdge { from, to });
        }

        self.adjacency[from.as_usize()].push(to);
        debug!(from = from.as_usize(), to = to.as_usize(), "added edge");
        Ok(())
    }

    /// Remove the first occurrence of `to` from the target list of `from`
    ///
    /// Further copies of the same edge are left in place.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> GraphResult<()> {
        let Some(targets) = self.adjacency.get_mut(from.as_usize()) else {
            warn!(from = from.as_usize(), to = to.as_usize(), "edge source not found");
            return Err(GraphError::InvalidEdge { from, to });
        };

        match targets.iter().position(|t| *t == to) {
            Some(pos) => {
                targets.remove(pos);
                debug!(from = from.as_usize(), to = to.as_usize(), "removed edge");
                Ok(())
            }
            None => {
                warn!(from = from.as_usize(), to = to.as_usize(), "edge not found");
                Err(GraphError::InvalidEdge { from, to })
            }
        }
    }

    /// Remove a node and every edge pointing at it, then reindex
    ///
    /// All occurrences of `node` are dropped from the remaining target lists
    /// and every target above it is shifted down by one, in a single pass
    /// over each list.
    pub fn remove_node(&mut self, node: NodeIndex) -> GraphResult<()> {
        let idx = node.as_usize();
        if idx >= self.values.len() {
            warn!(node = idx, node_count = self.values.len(), "node not found");
            return Err(GraphError::InvalidNode(node));
        }

        self.values.remove(idx);
        self.adjacency.remove(idx);

        let mut dropped = 0usize;
        for targets in &mut self.adjacency {
            targets.retain_mut(|target| {
                if *target == node {
                    dropped += 1;
                    return false;
                }
                if *target > node {
                    target.0 -= 1;
                }
                true
            });
        }

        debug!(node = idx, dropped_incoming = dropped, "removed node");
        Ok(())
    }

    /// Get the value stored at a node
    pub fn value(&self, node: NodeIndex) -> Option<f64> {
        self.values.get(node.as_usize()).copied()
    }

    /// Get the ordered outgoing targets of a node
    pub fn targets(&self, node: NodeIndex) -> Option<&[NodeIndex]> {
        self.adjacency.get(node.as_usize()).map(Vec::as_slice)
    }

    pub fn out_degree(&self, node: NodeIndex) -> Option<usize> {
        self.adjacency.get(node.as_usize()).map(Vec::len)
    }

    /// Check if a node exists
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.as_usize() < self.values.len()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// Get total number of edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Enumerate nodes in index order
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.values, &self.adjacency)
    }

    /// Clear all data
    pub fn clear(&mut self) {
        self.values.clear();
        self.adjacency.clear();
    }
}

impl<'a> IntoIterator for &'a GraphStore {
    type Item = super::iter::NodeEntry<'a>;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}
