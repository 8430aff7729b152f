//! Host tree seam
//!
//! The mutation API the reconciler needs from whoever owns the live tree.

use livedom_tree::{DomError, DomTree, NodeId};

/// Mutable live tree addressed by opaque handles
pub trait HostTree {
    type Handle: Copy + Eq + std::fmt::Debug;

    fn create_element(&mut self, tag: &str) -> Self::Handle;

    fn create_text(&mut self, content: &str) -> Self::Handle;

    fn set_attribute(&mut self, handle: Self::Handle, name: &str, value: &str) -> Result<(), DomError>;

    fn remove_attribute(&mut self, handle: Self::Handle, name: &str) -> Result<(), DomError>;

    /// Write the in-memory boolean property `name`
    fn set_flag(&mut self, handle: Self::Handle, name: &str, value: bool) -> Result<(), DomError>;

    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> Result<(), DomError>;

    fn remove_child(&mut self, parent: Self::Handle, child: Self::Handle) -> Result<(), DomError>;

    fn replace_child(
        &mut self,
        parent: Self::Handle,
        new_child: Self::Handle,
        old_child: Self::Handle,
    ) -> Result<(), DomError>;

    /// Live child at `index`, if any
    fn child_at(&self, parent: Self::Handle, index: usize) -> Option<Self::Handle>;

    /// Live sibling following `handle`, if any
    fn next_sibling(&self, handle: Self::Handle) -> Option<Self::Handle>;
}

impl HostTree for DomTree {
    type Handle = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        DomTree::create_element(self, tag)
    }

    fn create_text(&mut self, content: &str) -> NodeId {
        DomTree::create_text(self, content)
    }

    fn set_attribute(&mut self, handle: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        DomTree::set_attribute(self, handle, name, value)
    }

    fn remove_attribute(&mut self, handle: NodeId, name: &str) -> Result<(), DomError> {
        DomTree::remove_attribute(self, handle, name).map(drop)
    }

    fn set_flag(&mut self, handle: NodeId, name: &str, value: bool) -> Result<(), DomError> {
        DomTree::set_flag(self, handle, name, value)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        DomTree::append_child(self, parent, child).map(drop)
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        DomTree::remove_child(self, parent, child).map(drop)
    }

    fn replace_child(&mut self, parent: NodeId, new_child: NodeId, old_child: NodeId) -> Result<(), DomError> {
        DomTree::replace_child(self, parent, new_child, old_child).map(drop)
    }

    fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        DomTree::child_at(self, parent, index)
    }

    fn next_sibling(&self, handle: NodeId) -> Option<NodeId> {
        DomTree::next_sibling(self, handle)
    }
}
