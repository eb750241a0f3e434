//! Core graph implementation
//!
//! This module implements a dense directed multigraph:
//! - Nodes addressed by position, each carrying one `f64` value
//! - Ordered outgoing target lists (duplicates and self-loops allowed)
//! - Node removal with reindexing of every surviving edge
//! - Read-only enumeration for presentation layers

pub mod iter;
pub mod render;
pub mod status;
pub mod store;
pub mod types;

// Re-export main types
pub use iter::{NodeEntry, Nodes};
pub use render::Listing;
pub use status::GraphStatus;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::NodeIndex;
