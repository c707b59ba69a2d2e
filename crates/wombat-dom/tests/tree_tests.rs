//! Tests for tree construction and traversal: append_child link
//! maintenance, document order, and attribute lookup.

use wombat_dom::{DomTree, ElementData, NodeId, NodeKind};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeKind::Element(ElementData::new(tag, &[])))
}

// ========== construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.kind),
        Some(NodeKind::Document)
    ));
    assert_eq!(tree.parent(NodeId::ROOT), None);
}

#[test]
fn test_append_child_sets_parent_and_order() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "li");
    let b = alloc_element(&mut tree, "li");
    let c = alloc_element(&mut tree, "li");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.parent(b), Some(parent));
    assert_eq!(tree.parent(c), Some(parent));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));
}

#[test]
fn test_append_child_maintains_sibling_links() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_mixed_node_kinds() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, p);

    let text = tree.alloc(NodeKind::Text("hello".to_string()));
    tree.append_child(p, text);
    let comment = tree.alloc(NodeKind::Comment("note".to_string()));
    tree.append_child(p, comment);

    assert_eq!(tree.as_text(text), Some("hello"));
    assert_eq!(tree.as_text(comment), None);
    assert!(tree.as_element(text).is_none());
    assert_eq!(tree.as_element(p).map(|e| e.tag_name.as_str()), Some("p"));
    assert_eq!(tree.children(p), &[text, comment]);
}

#[test]
fn test_document_element() {
    let mut tree = DomTree::new();
    let comment = tree.alloc(NodeKind::Comment("doctype-ish".to_string()));
    tree.append_child(NodeId::ROOT, comment);
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);

    // First element child of the document, skipping the comment.
    assert_eq!(tree.document_element(), Some(html));
}

// ========== attribute lookup ==========

#[test]
fn test_attr_lookup_is_key_case_insensitive() {
    let element = ElementData::new("input", &[("TyPe", "text")]);
    assert_eq!(element.attr("type"), Some("text"));
    assert_eq!(element.attr("TYPE"), Some("text"));
    assert!(element.has_attr("Type"));
    assert!(!element.has_attr("value"));
    assert_eq!(element.attr("value"), None);
}

#[test]
fn test_attr_lookup_preserves_value_case() {
    let element = ElementData::new("div", &[("class", "AbC")]);
    assert_eq!(element.attr("class"), Some("AbC"));
}

#[test]
fn test_attr_lookup_first_pair_wins() {
    let element = ElementData::new("div", &[("data-x", "first"), ("data-x", "second")]);
    assert_eq!(element.attr("data-x"), Some("first"));
}

#[test]
fn test_attrs_keep_document_order() {
    let element = ElementData::new("a", &[("href", "#"), ("title", "t"), ("rel", "nofollow")]);
    let keys: Vec<&str> = element.attrs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["href", "title", "rel"]);
}
