//! Common utilities shared by the declaration detectors
//!
//! Helpers for AST traversal and text extraction that do not depend on a
//! particular grammar.

use tree_sitter::Node;

// ============================================================================
// Text Extraction
// ============================================================================

/// Get text content of a node
pub fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or("")
        .to_string()
}

/// Get text content of a node, normalized to single line (collapse whitespace)
pub fn get_node_text_normalized(node: &Node, source: &str) -> String {
    normalize_whitespace(&get_node_text(node, source))
}

/// Normalize whitespace: collapse multiple spaces/newlines to single space
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the named field of a node, if present
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| get_node_text_normalized(&child, source))
        .filter(|text| !text.is_empty())
}

// ============================================================================
// AST Traversal
// ============================================================================

/// Direct children of a node with one of the given kinds
pub fn children_of_kind<'tree>(node: &Node<'tree>, kinds: &[&str]) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| kinds.contains(&child.kind()))
        .collect()
}

/// First direct child with one of the given kinds
pub fn first_child_of_kind<'tree>(node: &Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    children_of_kind(node, kinds).into_iter().next()
}
