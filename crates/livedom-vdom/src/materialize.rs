//! Materializer
//!
//! Builds a fresh live subtree from a snapshot node. Never reuses handles.
//! The result matches what diffing against an empty tree would produce.

use crate::{HostTree, Node, Reconciler, VdomResult};

impl<H: HostTree> Reconciler<'_, H> {
    /// Allocate the live subtree for `node`, detached from any parent
    pub fn materialize(&mut self, node: &Node) -> VdomResult<H::Handle> {
        let element = match node {
            Node::Text(content) => return Ok(self.host.create_text(content)),
            Node::Element(element) => element,
        };

        // Update from an empty prop set: a falsy value has nothing to remove
        // on a fresh element, so only truthy values are written
        let handle = self.host.create_element(&element.tag);
        for (name, value) in element.props.iter().filter(|(_, value)| value.is_truthy()) {
            self.set_property(handle, name, value)?;
        }
        for child in &element.children {
            let child_handle = self.materialize(child)?;
            self.host.append_child(handle, child_handle)?;
        }
        Ok(handle)
    }
}
