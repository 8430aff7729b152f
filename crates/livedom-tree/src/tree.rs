//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: removed or replaced subtrees stay in the arena,
//! detached from the root. Every mutation is counted in `MutationStats`.

use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Counters for host mutations since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStats {
    pub elements_created: u64,
    pub texts_created: u64,
    pub appends: u64,
    pub removals: u64,
    pub replacements: u64,
    pub attribute_sets: u64,
    pub attribute_removals: u64,
    pub flag_writes: u64,
}

impl MutationStats {
    /// Nodes allocated (elements and text)
    pub fn created(&self) -> u64 {
        self.elements_created + self.texts_created
    }

    /// Structural edits: create, append, remove, replace
    pub fn structural(&self) -> u64 {
        self.created() + self.appends + self.removals + self.replacements
    }
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    focused: NodeId,
    stats: MutationStats,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the mount root
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(Node::root());
        Self {
            nodes,
            focused: NodeId::NONE,
            stats: MutationStats::default(),
        }
    }

    /// The mount root
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (only the root exists)
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::element(tag));
        self.stats.elements_created += 1;
        tracing::trace!("createElement <{}> -> {}", tag, id);
        id
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::text(content));
        self.stats.texts_created += 1;
        tracing::trace!("createTextNode {:?} -> {}", content, id);
        id
    }

    /// Append `child` as last child of `parent`, moving it if attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
            self.nodes[child.index()].prev_sibling = last;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        self.nodes[child.index()].parent = parent;

        self.stats.appends += 1;
        Ok(child)
    }

    /// Detach `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.node(parent)?;
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        self.stats.removals += 1;
        Ok(child)
    }

    /// Put `new_child` at the position of `old_child`, returning the old one
    pub fn replace_child(&mut self, parent: NodeId, new_child: NodeId, old_child: NodeId) -> DomResult<NodeId> {
        if self.node(old_child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child: old_child });
        }
        self.check_insert(parent, new_child)?;
        if new_child == old_child {
            return Ok(old_child);
        }
        self.detach(new_child);

        // Read neighbours after detaching: new_child may have been one of them
        let prev = self.nodes[old_child.index()].prev_sibling;
        let next = self.nodes[old_child.index()].next_sibling;

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = new_child;
        } else {
            self.nodes[parent.index()].first_child = new_child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = new_child;
        } else {
            self.nodes[parent.index()].last_child = new_child;
        }

        let new_node = &mut self.nodes[new_child.index()];
        new_node.parent = parent;
        new_node.prev_sibling = prev;
        new_node.next_sibling = next;

        let old_node = &mut self.nodes[old_child.index()];
        old_node.parent = NodeId::NONE;
        old_node.prev_sibling = NodeId::NONE;
        old_node.next_sibling = NodeId::NONE;

        self.stats.replacements += 1;
        Ok(old_child)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.node(child)?;
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        while node.is_valid() {
            if node == ancestor {
                return true;
            }
            node = self.nodes[node.index()].parent;
        }
        false
    }

    /// Unlink a node from its parent and siblings (no-op when detached)
    fn detach(&mut self, id: NodeId) {
        let node = &self.nodes[id.index()];
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate over the children of a node
    pub fn children(&self, parent: NodeId) -> ChildIterator<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        ChildIterator { tree: self, current: first }
    }

    /// Child at a position, if any
    pub fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.children(parent).nth(index).map(|(id, _)| id)
    }

    /// Following sibling of an attached node
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.next_sibling).filter(|n| n.is_valid())
    }

    /// Number of children
    pub fn child_count(&self, parent: NodeId) -> usize {
        self.children(parent).count()
    }

    /// Parent of an attached node
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Element data, or an error for other node kinds
    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Tag name of an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Content of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_text()
    }

    /// Attribute value of an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.attrs.set_attribute(name, value);
        self.stats.attribute_sets += 1;
        tracing::trace!("setAttribute {} {}={:?}", id, name, value);
        Ok(())
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let removed = self.element_mut(id)?.attrs.remove_named_item(name);
        self.stats.attribute_removals += 1;
        tracing::trace!("removeAttribute {} {}", id, name);
        Ok(removed.map(|a| a.value))
    }

    /// Read a boolean property
    pub fn flag(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.flag(name))
    }

    /// Write a boolean property
    pub fn set_flag(&mut self, id: NodeId, name: &str, value: bool) -> DomResult<()> {
        self.element_mut(id)?.flags.insert(name.to_string(), value);
        self.stats.flag_writes += 1;
        Ok(())
    }

    /// Current form value of an element
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element()?.value.as_deref()
    }

    /// Set the form value of an element
    pub fn set_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        self.element_mut(id)?.value = Some(value.to_string());
        Ok(())
    }

    /// Move focus to an element
    pub fn focus(&mut self, id: NodeId) -> DomResult<()> {
        self.element(id)?;
        self.focused = id;
        Ok(())
    }

    /// Currently focused element
    pub fn focused(&self) -> Option<NodeId> {
        Some(self.focused).filter(|id| id.is_valid())
    }

    /// Find the first descendant element (document order) whose attribute `name` equals `value`
    pub fn find_by_attribute(&self, start: NodeId, name: &str, value: &str) -> Option<NodeId> {
        for (id, node) in self.children(start) {
            if node.as_element().and_then(|e| e.get_attr(name)) == Some(value) {
                return Some(id);
            }
            if let Some(found) = self.find_by_attribute(id, name, value) {
                return Some(found);
            }
        }
        None
    }

    /// Mutation counters since creation or the last reset
    pub fn stats(&self) -> &MutationStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = MutationStats::default();
    }
}

/// Iterator over a node's children, in order
pub struct ChildIterator<'a> {
    tree: &'a DomTree,
    current: NodeId,
}

impl<'a> Iterator for ChildIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.current.is_valid() {
            return None;
        }
        let id = self.current;
        let node = self.tree.get(id)?;
        self.current = node.next_sibling;
        Some((id, node))
    }
}
