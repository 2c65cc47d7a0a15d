//! Read-only queries over parsed trees.
//!
//! An editor re-parses the text on every change and compares the new tree
//! with the previous one. [`is_structurally_changed`] tells it whether a new
//! `if` statement with a non-empty braced body has appeared, which it uses to
//! annotate its log.

use crate::ast::Node;

/// Counts the direct children of `node` that satisfy `predicate`.
pub fn count_children(node: &Node, predicate: impl Fn(&Node) -> bool) -> usize {
    node.children()
        .into_iter()
        .filter(|child| predicate(*child))
        .count()
}

/// Counts every node below `node` that satisfies `predicate`.
///
/// `node` itself is not tested.
///
/// ## Example
/// ```
/// use quill::{analysis::count_descendants, ast::NodeType, parse};
///
/// let program = parse("1; 2; if (1) 3;");
/// let statements = count_descendants(&program, |n| n.node_type() == NodeType::ExpressionStatement);
/// assert_eq!(statements, 3);
/// ```
pub fn count_descendants(node: &Node, predicate: impl Fn(&Node) -> bool) -> usize {
    node.descendants().filter(|node| predicate(*node)).count()
}

/// Returns `true` for an `if` statement whose consequent is a braced block
/// holding at least one statement.
///
/// `STATEMENT` wrappers around the consequent are looked through.
#[must_use]
pub fn is_if_with_block(node: &Node) -> bool {
    let Node::IfStatement { consequent, .. } = node else {
        return false;
    };

    let mut consequent = &**consequent;
    while let Node::Statement { inner } = consequent {
        consequent = inner;
    }

    matches!(consequent,
             Node::BlockStatement { body }
             if matches!(&**body, Node::StatementList { statements } if !statements.is_empty()))
}

/// Reports whether `new` contains more if-with-block statements than `old`.
///
/// Both trees are typically successive parses of the same evolving text.
///
/// ## Example
/// ```
/// use quill::{is_structurally_changed, parse};
///
/// let before = parse("if () 10 * 2; 13 + 7;");
/// let after = parse("if () { 10 * 2; 13 + 7; }");
/// assert!(is_structurally_changed(&before, &after));
/// assert!(!is_structurally_changed(&after, &before));
/// ```
#[must_use]
pub fn is_structurally_changed(old: &Node, new: &Node) -> bool {
    count_descendants(new, is_if_with_block) > count_descendants(old, is_if_with_block)
}
