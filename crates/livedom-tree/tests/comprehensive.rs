//! Comprehensive tests for livedom-tree
//!
//! Structure, mutation counters and serialization working together.

use livedom_tree::{DomTree, HtmlSerializer, NodeId};

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    // div > span > text
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4); // root + div + span + text

    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, tree.root());
    assert_eq!(div_node.first_child, span);

    let span_node = tree.get(span).unwrap();
    assert_eq!(span_node.parent, div);
    assert_eq!(span_node.first_child, text);
}

#[test]
fn test_dom_tree_siblings() {
    let mut tree = DomTree::new();

    let div = tree.create_element("div");
    let child1 = tree.create_element("p");
    let child2 = tree.create_element("p");
    let child3 = tree.create_element("p");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, child1).unwrap();
    tree.append_child(div, child2).unwrap();
    tree.append_child(div, child3).unwrap();

    let node1 = tree.get(child1).unwrap();
    assert_eq!(node1.next_sibling, child2);
    assert!(!node1.prev_sibling.is_valid());

    let node3 = tree.get(child3).unwrap();
    assert_eq!(node3.prev_sibling, child2);
    assert!(!node3.next_sibling.is_valid());
    assert_eq!(tree.child_count(div), 3);
}

#[test]
fn test_moving_node_between_parents() {
    let mut tree = DomTree::new();
    let left = tree.create_element("ul");
    let right = tree.create_element("ul");
    let item = tree.create_element("li");
    tree.append_child(tree.root(), left).unwrap();
    tree.append_child(tree.root(), right).unwrap();
    tree.append_child(left, item).unwrap();

    tree.append_child(right, item).unwrap();

    assert_eq!(tree.child_count(left), 0);
    assert_eq!(tree.child_at(right, 0), Some(item));
    assert_eq!(
        HtmlSerializer::new().serialize_inner(&tree, tree.root()),
        "<ul></ul><ul><li></li></ul>"
    );
}

#[test]
fn test_mutation_stats() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let a = tree.create_text("a");
    let b = tree.create_text("b");
    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, a).unwrap();
    tree.replace_child(div, b, a).unwrap();
    tree.remove_child(div, b).unwrap();
    tree.set_attribute(div, "id", "x").unwrap();

    let stats = *tree.stats();
    assert_eq!(stats.elements_created, 1);
    assert_eq!(stats.texts_created, 2);
    assert_eq!(stats.appends, 2);
    assert_eq!(stats.replacements, 1);
    assert_eq!(stats.removals, 1);
    assert_eq!(stats.attribute_sets, 1);
    assert_eq!(stats.structural(), 7);

    tree.reset_stats();
    assert_eq!(tree.stats().structural(), 0);
}

#[test]
fn test_lookup_of_missing_node() {
    let tree = DomTree::new();
    assert!(tree.get(NodeId::NONE).is_none());
    assert_eq!(tree.child_count(NodeId::NONE), 0);
    assert!(!tree.flag(NodeId::ROOT, "checked"));
}
