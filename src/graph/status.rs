//! Closed status taxonomy reported by the graph mutators

use super::store::{GraphError, GraphResult};
use std::fmt;

/// Outcome of a mutating graph operation
///
/// Mirrors `GraphResult` for callers that want to branch on a plain value.
/// `code()` yields a stable number in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphStatus {
    Success,
    /// Only reported by `add_node`
    InvalidParent,
    /// Only reported by `remove_node`
    InvalidNode,
    /// Only reported by `add_edge` and `remove_edge`
    InvalidEdge,
}

impl GraphStatus {
    pub fn code(&self) -> u8 {
        match self {
            GraphStatus::Success => 0,
            GraphStatus::InvalidParent => 1,
            GraphStatus::InvalidNode => 2,
            GraphStatus::InvalidEdge => 3,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GraphStatus::Success)
    }
}

impl fmt::Display for GraphStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphStatus::Success => "Success",
            GraphStatus::InvalidParent => "InvalidParent",
            GraphStatus::InvalidNode => "InvalidNode",
            GraphStatus::InvalidEdge => "InvalidEdge",
        };
        f.write_str(name)
    }
}

impl GraphError {
    /// Status variant corresponding to this error
    pub fn status(&self) -> GraphStatus {
        match self {
            GraphError::InvalidParent { .. } => GraphStatus::InvalidParent,
            GraphError::InvalidNode(_) => GraphStatus::InvalidNode,
            GraphError::InvalidEdge { .. } => GraphStatus::InvalidEdge,
        }
    }
}

impl From<&GraphError> for GraphStatus {
    fn from(err: &GraphError) -> Self {
        err.status()
    }
}

impl<T> From<&GraphResult<T>> for GraphStatus {
    fn from(result: &GraphResult<T>) -> Self {
        match result {
            Ok(_) => GraphStatus::Success,
            Err(e) => e.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeIndex;

    #[test]
    fn test_status_codes() {
        assert_eq!(GraphStatus::Success.code(), 0);
        assert_eq!(GraphStatus::InvalidParent.code(), 1);
        assert_eq!(GraphStatus::InvalidNode.code(), 2);
        assert_eq!(GraphStatus::InvalidEdge.code(), 3);
    }

    #[test]
    fn test_status_from_result() {
        let ok: GraphResult<()> = Ok(());
        assert_eq!(GraphStatus::from(&ok), GraphStatus::Success);
        assert!(GraphStatus::from(&ok).is_success());

        let err: GraphResult<()> = Err(GraphError::InvalidNode(NodeIndex::new(7)));
        assert_eq!(GraphStatus::from(&err), GraphStatus::InvalidNode);

        let err = GraphError::InvalidEdge {
            from: NodeIndex::new(0),
            to: NodeIndex::new(9),
        };
        assert_eq!(err.status(), GraphStatus::InvalidEdge);
        assert!(!err.status().is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GraphStatus::InvalidParent.to_string(), "InvalidParent");
        assert_eq!(format!("{}", GraphStatus::Success), "Success");
    }
}
