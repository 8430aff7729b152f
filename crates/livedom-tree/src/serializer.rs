//! HTML Serialization (innerHTML/outerHTML)
//!
//! Renders the live tree back to markup. Attributes keep insertion order,
//! so two trees built by the same mutation sequence serialize identically.

use crate::{DomTree, NodeData, NodeId};

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// HTML serializer
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        for (child, _) in tree.children(node_id) {
            self.serialize_node(tree, child, &mut output);
        }
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output);
        output
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Root => {
                for (child, _) in tree.children(node_id) {
                    self.serialize_node(tree, child, output);
                }
            }
            NodeData::Text(text) => escape_text(&text.content, output),
            NodeData::Element(elem) => {
                output.push('<');
                output.push_str(&elem.tag);
                for attr in elem.attrs.iter() {
                    output.push(' ');
                    output.push_str(&attr.name);
                    output.push_str("=\"");
                    escape_attr(&attr.value, output);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&elem.tag.as_str()) && !node.first_child.is_valid() {
                    return;
                }
                for (child, _) in tree.children(node_id) {
                    self.serialize_node(tree, child, output);
                }
                output.push_str("</");
                output.push_str(&elem.tag);
                output.push('>');
            }
        }
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn escape_attr(value: &str, output: &mut String) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("a < b");
        let br = tree.create_element("br");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, text).unwrap();
        tree.append_child(div, br).unwrap();
        tree.set_attribute(div, "title", "say \"hi\"").unwrap();

        let html = HtmlSerializer::new().serialize_inner(&tree, tree.root());
        assert_eq!(html, "<div title=\"say &quot;hi&quot;\">a &lt; b<br></div>");
    }
}
