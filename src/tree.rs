//! The tree container and its ordered mutations.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1).err(), Some(TreeError::NotFound));
//!
//! tree.insert(1);
//! assert_eq!(tree.search(&1).map(|n| *n.value()), Ok(1));
//!
//! // Inserting the same value again stores a second occurrence.
//! tree.insert(1);
//! assert_eq!(tree.compute_size(), 2);
//!
//! // Deleting removes one occurrence at a time and hands back its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::error::TreeError;
use crate::helpers;
use crate::invariants;
use crate::node::{Link, Node};
use crate::util::DeleteCase;

/// An unbalanced Binary Search Tree holding one value per node. Equal
/// values are always routed to the right, so the tree is a multiset.
///
/// Every `insert` and `delete` ends by re-validating the whole tree, which
/// makes them `O(size)` rather than `O(height)`.
///
/// `Drop` and `Clone` walk the tree with an explicit stack, so a degenerate
/// chain from sorted inserts is safe to drop and copy. `Debug`, the
/// validation sweep and a standalone [`Node`]'s derived impls recurse once
/// per level.
#[derive(Debug)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the root box directly would recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    // Post-order rebuild. Finished subtrees wait on `built` until their
    // parent is assembled, left before right.
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Visit(Option<&'a Node<T>>),
            Build(&'a Node<T>),
        }

        let mut built: Vec<Link<T>> = Vec::new();
        let mut pending = vec![Step::Visit(self.root())];
        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(None) => built.push(None),
                Step::Visit(Some(node)) => {
                    pending.push(Step::Build(node));
                    pending.push(Step::Visit(node.right()));
                    pending.push(Step::Visit(node.left()));
                }
                Step::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps a pre-built root. The structure is taken as is, without
    /// validation, so hand-built fixtures can be inspected (and checked) as
    /// they are.
    pub fn from_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// A tree holding a single node with the given value.
    pub fn with_root_value(value: T) -> Self {
        Self::from_root(Node::new(value))
    }

    /// The root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        helpers::is_empty(self)
    }

    /// Inserts `value` into the tree. Values smaller than a node go to its
    /// left and everything else, including equal values, goes to its right.
    /// Inserting never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.right().map(|n| *n.value()), Some(2));
    /// assert!(root.left().is_none());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0_usize;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(Box::new(Node::new(value)));

        tracing::trace!(depth, "inserted node");
        invariants::validate(self);
    }

    /// Finds the node holding `value` by comparison order. With duplicates,
    /// this is the occurrence nearest the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let tree: Tree<i32> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&2).map(|n| *n.value()), Ok(2));
    /// assert_eq!(tree.search(&42).err(), Some(TreeError::NotFound));
    /// ```
    pub fn search(&self, value: &T) -> Result<&Node<T>, TreeError>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(node),
                Ordering::Greater => node.right(),
            };
        }
        Err(TreeError::NotFound)
    }

    /// Deletes one occurrence of `value` (the one [`search`][Self::search]
    /// finds) and returns it.
    ///
    /// A node with two children isn't unlinked itself: it takes the value of
    /// its in-order successor and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Traversal, Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.traverse(Traversal::LevelOrder), vec![&3, &1]);
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        let root_slot: *const Link<T> = &self.root;
        let Some(link) = helpers::locate_link(&mut self.root, value) else {
            tracing::debug!("delete target not found");
            return Err(TreeError::NotFound);
        };
        let at_root = ptr::eq(&*link, root_slot);
        let (removed, case) = unlink(link).ok_or(TreeError::NotFound)?;

        tracing::debug!(?case, at_root, "deleted node");
        invariants::validate(self);
        Ok(removed)
    }

    /// Re-derives every structural and ordering invariant from scratch.
    ///
    /// # Panics
    ///
    /// When an invariant doesn't hold. Trees only built through `insert` and
    /// `delete` always pass; a failure means the tree is corrupt.
    pub fn validate(&self)
    where
        T: Ord,
    {
        invariants::validate(self);
    }
}

/// Removes the node in `link` according to its [`DeleteCase`] and returns
/// the value that left the tree.
fn unlink<T>(link: &mut Link<T>) -> Option<(T, DeleteCase)> {
    let node = link.as_deref_mut()?;
    let case = DeleteCase::of(node);
    if case == DeleteCase::TwoChildren {
        let successor = *helpers::take_successor(node)?;
        return Some((mem::replace(&mut node.value, successor.value), case));
    }

    let mut node = *link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some((node.value, case))
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
