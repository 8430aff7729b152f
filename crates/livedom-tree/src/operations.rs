//! DOM Node Operations
//!
//! Errors raised by tree mutation.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    /// Node is not a child of the given parent
    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Element-only operation applied to another node kind
    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    /// Text-only operation applied to another node kind
    #[error("Node {0} is not a text node")]
    NotText(NodeId),

    /// Hierarchy error (e.g., inserting an ancestor, or into a text node)
    #[error("Hierarchy request error: cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomError::NotAChild { parent: NodeId(1), child: NodeId(4) };
        assert_eq!(err.to_string(), "Node #4 is not a child of #1");
        assert_eq!(DomError::NotFound(NodeId::NONE).to_string(), "Node not found: #none");
    }
}
