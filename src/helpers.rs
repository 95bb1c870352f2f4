//! Stateless structural helpers. The read-only ones answer questions about
//! the shape of a tree, the `pub(crate)` ones hand back the owned slots that
//! `delete` rewires. None of them aggregate anything.
//!
//! All of them navigate by comparison order (the same `<` / `>=` routing that
//! `insert` uses) rather than by scanning, so they run in `O(height)`.

use std::cmp::Ordering;
use std::ptr;

use crate::node::{Link, Node};
use crate::tree::Tree;

/// Whether the tree has no root.
pub fn is_empty<T>(tree: &Tree<T>) -> bool {
    tree.root.is_none()
}

/// Finds the node whose left or right slot holds `target`, comparing node
/// identity rather than value so duplicates are told apart.
///
/// The descent assumes `target` is reachable by ordered descent from `node`,
/// which is true of every node actually in the tree. Returns `None` for the
/// root itself and for nodes that aren't in the subtree.
///
/// # Examples
///
/// ```
/// use bst_engine::{helpers, Tree};
///
/// let tree: Tree<i32> = [5, 3, 8, 7].into_iter().collect();
/// let root = tree.root().unwrap();
/// let seven = tree.search(&7).unwrap();
///
/// assert_eq!(helpers::parent_of(root, seven).map(|n| *n.value()), Some(8));
/// assert!(helpers::parent_of(root, root).is_none());
/// ```
pub fn parent_of<'a, T: Ord>(node: &'a Node<T>, target: &Node<T>) -> Option<&'a Node<T>> {
    if holds(node.left(), target) || holds(node.right(), target) {
        return Some(node);
    }

    let next = if target.value < node.value {
        node.left()
    } else {
        node.right()
    };
    next.and_then(|next| parent_of(next, target))
}

fn holds<T>(child: Option<&Node<T>>, target: &Node<T>) -> bool {
    child.map_or(false, |child| ptr::eq(child, target))
}

/// The leftmost node of `node`'s right subtree, or `None` when there is no
/// right subtree. The result never has a left child.
pub fn inorder_successor<T>(node: &Node<T>) -> Option<&Node<T>> {
    let mut current = node.right()?;
    while let Some(left) = current.left() {
        current = left;
    }
    Some(current)
}

/// Returns the slot holding the first node equal to `value` along the search
/// path, i.e. the occurrence nearest the root.
pub(crate) fn locate_link<'a, T: Ord>(
    mut link: &'a mut Link<T>,
    value: &T,
) -> Option<&'a mut Link<T>> {
    loop {
        let ordering = value.cmp(&link.as_deref()?.value);
        if ordering == Ordering::Equal {
            return Some(link);
        }

        let node = link.as_deref_mut()?;
        link = match ordering {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }
}

/// Unlinks `node`'s in-order successor and returns it. The successor's right
/// subtree (it can't have a left one) takes its place.
///
/// The unlinked node is the one [`inorder_successor`] returns for `node`.
pub(crate) fn take_successor<T>(node: &mut Node<T>) -> Option<Box<Node<T>>> {
    let mut link = &mut node.right;
    while link.as_deref()?.left.is_some() {
        link = match link {
            Some(next) => &mut next.left,
            None => return None,
        };
    }

    let mut successor = link.take()?;
    *link = successor.right.take();
    Some(successor)
}
