//! DOM Node - Arena representation
//!
//! Nodes use `NodeId` links instead of pointers:
//! - parent, first/last child, prev/next sibling
//! - `NodeId::NONE` marks a missing link

use std::collections::HashMap;

use crate::{NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create the mount root
    pub fn root() -> Self {
        Self::with_data(NodeData::Root)
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(TextData { content: content.to_string() }))
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Whether this node may hold children
    #[inline]
    pub fn is_container(&self) -> bool {
        !self.is_text()
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Mount root owned by the embedder
    Root,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Default)]
pub struct ElementData {
    /// Tag name
    pub tag: String,
    /// Reflected attributes
    pub attrs: NamedNodeMap,
    /// In-memory boolean properties (`checked`, `disabled`, ...)
    pub flags: HashMap<String, bool>,
    /// Current form value, separate from the `value` attribute
    pub value: Option<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    /// Read a boolean property; unset reads as `false`
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kinds() {
        assert!(Node::element("div").is_element());
        assert!(Node::text("hi").is_text());
        assert!(Node::root().is_container());
        assert!(!Node::text("hi").is_container());
        assert_eq!(Node::text("hi").as_text(), Some("hi"));
    }

    #[test]
    fn test_unset_flag_is_false() {
        let elem = ElementData::new("input");
        assert!(!elem.flag("checked"));
    }
}
