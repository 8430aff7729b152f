//! Snapshot Node Model
//!
//! Immutable description of a UI state. A snapshot is either a text leaf or
//! an element with a tag, a property map and ordered children. Position in
//! `children` is the only identity a node has.

use std::collections::BTreeMap;
use std::fmt;

use crate::{ReconcileConfig, VdomError, VdomResult};

/// Property map of an element
pub type Props = BTreeMap<String, PropValue>;

/// Snapshot node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Text leaf
    Text(String),
    /// Element with props and children
    Element(Element),
}

/// Element-typed node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub props: Props,
    pub children: Vec<Node>,
}

/// Property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    /// Opaque value consumed by the event layer (handler references and the like)
    Custom,
}

/// How a property is reflected onto the live tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropClass {
    /// Never reflected
    Custom,
    /// Attribute plus in-memory flag
    Boolean,
    /// String attribute
    Generic,
}

impl PropValue {
    /// `false` and the empty string are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Custom => true,
        }
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, PropValue::Bool(_))
    }
}

/// Attribute string form
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Str(s) => f.write_str(s),
            PropValue::Custom => Ok(()),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }
}

impl Node {
    /// Text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Element with no props or children
    pub fn element(tag: &str) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Builder: add a property (no-op on text nodes)
    pub fn prop(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        if let Node::Element(e) = &mut self {
            e.props.insert(name.to_string(), value.into());
        }
        self
    }

    /// Builder: append a child (no-op on text nodes)
    pub fn child(mut self, child: Node) -> Self {
        if let Node::Element(e) = &mut self {
            e.children.push(child);
        }
        self
    }

    /// Builder: append several children
    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        children.into_iter().fold(self, Node::child)
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Children of an element; empty for text
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Text(_) => &[],
        }
    }

    /// Check structural invariants of the whole subtree
    pub fn validate(&self) -> VdomResult<()> {
        self.validate_at("$")
    }

    fn validate_at(&self, path: &str) -> VdomResult<()> {
        let Node::Element(element) = self else {
            return Ok(());
        };
        if element.tag.is_empty() {
            return Err(VdomError::malformed(path, "element has an empty tag"));
        }
        for (i, child) in element.children.iter().enumerate() {
            child.validate_at(&format!("{}.children[{}]", path, i))?;
        }
        Ok(())
    }
}

/// Check if a node is text-typed
pub fn is_text(node: &Node) -> bool {
    node.is_text()
}

/// Check if a node is element-typed
pub fn is_element(node: &Node) -> bool {
    node.is_element()
}

/// Event bindings (`on*`) and `forceUpdate` are custom
pub fn is_custom_property(name: &str) -> bool {
    ReconcileConfig::DEFAULT.is_custom_property(name)
}

pub fn is_boolean_valued(value: &PropValue) -> bool {
    value.is_boolean()
}

/// Classify a property under the default naming conventions
pub fn classify(name: &str, value: &PropValue) -> PropClass {
    ReconcileConfig::DEFAULT.classify(name, value)
}
