//! x-yarm key filtering.
//!
//! Keys starting with `x-yarm` mark tool-internal metadata, in the style of
//! OpenAPI `x-` vendor extensions. They are stripped from YAML → JSON output
//! unless the caller opts out.
//!
//! # Scope
//!
//! - [`FilterScope::Root`] strips matching keys from the root mapping only.
//!   A nested `x-yarm-*` key under a surviving parent is kept.
//! - [`FilterScope::Recursive`] strips matching keys from every mapping in the
//!   tree, including mappings inside sequences.
//!
//! Matching is a case-sensitive prefix test, so `x-yarm` and
//! `x-yarm-very-ignored` both match while `X-Yarm` does not.

use crate::types::Node;

/// The reserved key prefix.
pub const XYARM_PREFIX: &str = "x-yarm";

/// How deep the x-yarm filter reaches into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterScope {
    /// Only the root mapping's own keys are inspected.
    #[default]
    Root,
    /// Every mapping at every depth is inspected.
    Recursive,
}

/// Returns true when `key` carries the x-yarm prefix.
pub fn is_x_yarm_key(key: &str) -> bool {
    key.starts_with(XYARM_PREFIX)
}

/// Strip x-yarm keys from `node` in place.
///
/// A root that is not a mapping has no keys of its own; with
/// [`FilterScope::Root`] it is left untouched.
///
/// # Examples
///
/// ```
/// use yarm_core::{filter_x_yarm, FilterScope, Node};
///
/// let mut node = Node::Mapping(vec![
///     ("x-yarm".to_string(), Node::from("meta")),
///     ("name".to_string(), Node::from("api")),
/// ]);
/// filter_x_yarm(&mut node, FilterScope::Root);
/// assert_eq!(node.keys().collect::<Vec<_>>(), vec!["name"]);
/// ```
pub fn filter_x_yarm(node: &mut Node, scope: FilterScope) {
    match scope {
        FilterScope::Root => {
            if let Node::Mapping(entries) = node {
                strip_x_yarm_entries(entries);
            }
        }
        FilterScope::Recursive => filter_recursive(node),
    }
}

/// Like [`filter_x_yarm`], but leaves the input alone and returns a filtered copy.
pub fn filtered(node: &Node, scope: FilterScope) -> Node {
    let mut copy = node.clone();
    filter_x_yarm(&mut copy, scope);
    copy
}

/// Removal happens before descent, so a stripped subtree is never walked.
fn filter_recursive(node: &mut Node) {
    match node {
        Node::Mapping(entries) => {
            strip_x_yarm_entries(entries);
            for (_, child) in entries.iter_mut() {
                filter_recursive(child);
            }
        }
        Node::Sequence(items) => {
            for item in items.iter_mut() {
                filter_recursive(item);
            }
        }
        Node::Scalar(_) => {}
    }
}

fn strip_x_yarm_entries(entries: &mut Vec<(String, Node)>) {
    entries.retain(|(key, _)| {
        let strip = is_x_yarm_key(key);
        if strip {
            tracing::trace!(key = %key, "stripping x-yarm key");
        }
        !strip
    });
}
