//! livedom tree - Live host tree
//!
//! Arena-allocated tree that the reconciler patches in place. Nodes are
//! addressed by `NodeId` and linked through parent/sibling indices.

mod attributes;
mod node;
mod operations;
mod serializer;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use node::{ElementData, Node, NodeData, TextData};
pub use operations::{DomError, DomResult};
pub use serializer::HtmlSerializer;
pub use tree::{ChildIterator, DomTree, MutationStats};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#none")
        }
    }
}
