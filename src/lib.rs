//! Adjgraph
//!
//! A dense, index-addressed, in-memory directed multigraph. Every node
//! carries one `f64` value and an ordered list of outgoing targets.
//!
//! # Model
//!
//! - Nodes are identified by position only; indices always form `0..n`
//! - Edges are not deduplicated and self-loops are allowed
//! - Removing a node drops every edge into it and shifts later indices down
//! - Every operation reports its outcome as a value, never by panicking
//!
//! ## Example Usage
//!
//! ```rust
//! use adjgraph::graph::{GraphStatus, GraphStore};
//!
//! let mut store = GraphStore::new();
//!
//! let (root, status) = store.add_node(1.23, None);
//! assert!(status.is_ok());
//!
//! let (child, _) = store.add_node(4.56, Some(root));
//! store.add_edge(root, child).unwrap();
//! assert_eq!(store.targets(root).unwrap().len(), 2);
//!
//! store.remove_edge(root, child).unwrap();
//! let result = store.remove_node(child);
//! assert_eq!(GraphStatus::from(&result), GraphStatus::Success);
//! assert_eq!(store.node_count(), 1);
//! assert!(store.targets(root).unwrap().is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, GraphConfig};
pub use graph::{
    GraphError, GraphResult, GraphStatus, GraphStore, Listing, NodeEntry, NodeIndex, Nodes,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
