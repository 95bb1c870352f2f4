//! Structural and ordering invariants, re-derived from a fresh
//! [`Metadata`] sweep rather than trusted from bookkeeping.
//!
//! A failure here means a mutation corrupted the tree. That is a bug, not
//! something a caller can recover from, so [`validate`] panics.

use std::collections::HashSet;

use thiserror::Error;

use crate::metadata::{compute_metadata, Metadata, NodeId, NodeKey, Traversal};
use crate::tree::Tree;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Violation {
    #[error("expected exactly one root node, found {0}")]
    RootCount(usize),
    #[error("node {id} has {children} children")]
    TooManyChildren { id: NodeId, children: usize },
    #[error("multiple root nodes detected ({0} nodes without a parent)")]
    ParentCount(usize),
    #[error("tree is disconnected: {recorded} nodes recorded, {reached} reached")]
    Disconnected { recorded: usize, reached: usize },
    #[error("edge count mismatch: {edges} edges for {nodes} nodes")]
    EdgeCount { edges: usize, nodes: usize },
    #[error("BST ordering broken: in-order position {0} is smaller than its predecessor")]
    Ordering(usize),
}

/// Sweeps `tree` and panics if any invariant fails.
pub(crate) fn validate<T: Ord>(tree: &Tree<T>) {
    let metadata = compute_metadata(tree);
    if let Err(violation) = check(&metadata) {
        tracing::error!(%violation, "tree invariant violated");
        panic!("invariant violation: {violation}");
    }
    tracing::trace!(size = metadata.size(), "tree invariants hold");
}

/// Runs the checks in order and stops at the first failure. An empty tree
/// passes trivially.
pub(crate) fn check<T: Ord>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    if metadata.is_empty() {
        return Ok(());
    }

    single_root(metadata)?;
    binary(metadata)?;
    // Parents come from a sweep out of one root, so this is the root count
    // again seen from the other side.
    single_parent(metadata)?;
    connected(metadata)?;
    edge_count(metadata)?;
    ordered(metadata)
}

fn orphans<T>(metadata: &Metadata<'_, T>) -> usize {
    (0..metadata.size())
        .filter(|&id| metadata.parent(id).is_none())
        .count()
}

fn single_root<T>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    match orphans(metadata) {
        1 => Ok(()),
        roots => Err(Violation::RootCount(roots)),
    }
}

fn binary<T>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    match (0..metadata.size()).find(|&id| metadata.children(id).len() > 2) {
        Some(id) => Err(Violation::TooManyChildren {
            id,
            children: metadata.children(id).len(),
        }),
        None => Ok(()),
    }
}

fn single_parent<T>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    match orphans(metadata) {
        1 => Ok(()),
        roots => Err(Violation::ParentCount(roots)),
    }
}

fn connected<T>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    let recorded: HashSet<NodeKey> = metadata.keys().collect();
    let reached: HashSet<NodeKey> = metadata
        .order(Traversal::Inorder)
        .iter()
        .map(|&node| NodeKey::of(node))
        .collect();

    if recorded.len() == metadata.size() && recorded == reached {
        Ok(())
    } else {
        Err(Violation::Disconnected {
            recorded: recorded.len(),
            reached: reached.len(),
        })
    }
}

fn edge_count<T>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    let (edges, nodes) = (metadata.edge_count(), metadata.size());
    if edges + 1 == nodes {
        Ok(())
    } else {
        Err(Violation::EdgeCount { edges, nodes })
    }
}

fn ordered<T: Ord>(metadata: &Metadata<'_, T>) -> Result<(), Violation> {
    let inorder = metadata.order(Traversal::Inorder);
    match inorder.windows(2).position(|pair| pair[1].value() < pair[0].value()) {
        Some(position) => Err(Violation::Ordering(position + 1)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn empty_tree_is_valid() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(check(&compute_metadata(&tree)), Ok(()));
    }

    #[test]
    fn built_tree_is_valid() {
        let tree: Tree<i32> = [15, 10, 20, 8, 12, 11, 13, 15, 15].into_iter().collect();
        assert_eq!(check(&compute_metadata(&tree)), Ok(()));
    }

    #[test]
    fn detects_misordered_fixture() {
        //   5
        //  / \
        // 7   9
        let root = Node::with_children(5, Some(Node::new(7)), Some(Node::new(9)));
        let tree = Tree::from_root(root);

        assert_eq!(check(&compute_metadata(&tree)), Err(Violation::Ordering(1)));
    }

    #[test]
    fn detects_deep_misorder() {
        //     10
        //    /
        //   5
        //    \
        //     12
        let five = Node::with_children(5, None, Some(Node::new(12)));
        let tree = Tree::from_root(Node::with_children(10, Some(five), None));

        assert_eq!(check(&compute_metadata(&tree)), Err(Violation::Ordering(2)));
    }

    #[test]
    fn equal_left_child_breaks_nothing_in_order() {
        // Ties belong on the right, but the in-order sequence only requires
        // non-decreasing values so an equal value on the left still passes.
        let tree = Tree::from_root(Node::with_children(4, Some(Node::new(4)), None));
        assert_eq!(check(&compute_metadata(&tree)), Ok(()));
    }

    #[test]
    #[should_panic(expected = "BST ordering broken")]
    fn validate_panics_on_violation() {
        let root = Node::with_children(1, Some(Node::new(2)), None);
        validate(&Tree::from_root(root));
    }

    #[test]
    fn validate_is_idempotent() {
        let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
        let before = compute_metadata(&tree).summary();

        validate(&tree);
        validate(&tree);

        assert_eq!(compute_metadata(&tree).summary(), before);
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            Violation::RootCount(0).to_string(),
            "expected exactly one root node, found 0"
        );
        assert_eq!(
            Violation::EdgeCount { edges: 3, nodes: 3 }.to_string(),
            "edge count mismatch: 3 edges for 3 nodes"
        );
        assert_eq!(
            Violation::TooManyChildren { id: 2, children: 3 }.to_string(),
            "node 2 has 3 children"
        );
    }
}
