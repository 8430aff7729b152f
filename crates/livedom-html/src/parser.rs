//! Markup to snapshot conversion
//!
//! Uses html5ever's RcDom and walks it into `livedom_vdom::Node`s.
//! An element with element children keeps only those; an element without
//! them gets its text, if any, as a single text child.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use livedom_vdom::{Element, Node, PropValue};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// Snapshot parser
pub struct SnapshotParser;

impl SnapshotParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse markup; the first element inside `<body>` becomes the root
    pub fn parse(&self, html: &str) -> Result<Node, ParseError> {
        tracing::debug!("Parsing snapshot markup ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let body = find_element(&dom.document, "body").ok_or(ParseError::NoRootElement)?;
        let root = element_children(&body)
            .into_iter()
            .next()
            .ok_or(ParseError::NoRootElement)?;

        let node = self.convert_element(&root);
        tracing::debug!("Parsed snapshot rooted at <{}>", tag_of(&root).unwrap_or_default());
        Ok(node)
    }

    fn convert_element(&self, handle: &Handle) -> Node {
        let RcNodeData::Element { name, attrs, .. } = &handle.data else {
            return Node::Text(text_of(handle));
        };

        let props = attrs
            .borrow()
            .iter()
            .map(|attr| (attr.name.local.to_string(), PropValue::Str(attr.value.to_string())))
            .collect();

        let elements = element_children(handle);
        let children = if elements.is_empty() {
            let text = text_of(handle);
            if text.is_empty() { Vec::new() } else { vec![Node::Text(text)] }
        } else {
            elements.iter().map(|child| self.convert_element(child)).collect()
        };

        Node::Element(Element {
            tag: name.local.to_string(),
            props,
            children,
        })
    }
}

impl Default for SnapshotParser {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_of(handle: &Handle) -> Option<String> {
    match &handle.data {
        RcNodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, RcNodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated direct text children; comments between runs are dropped
fn text_of(handle: &Handle) -> String {
    let mut text = String::new();
    for child in handle.children.borrow().iter() {
        if let RcNodeData::Text { contents } = &child.data {
            text.push_str(&contents.borrow());
        }
    }
    text
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if tag_of(child).as_deref() == Some(tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}
