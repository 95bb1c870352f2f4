//! Read-only queries. Each one takes a fresh [`Metadata`] sweep; none of
//! them walks the tree on its own.

use crate::error::TreeError;
use crate::metadata::{compute_metadata, Metadata, Summary, Traversal};
use crate::tree::Tree;

impl<T: Ord> Tree<T> {
    /// Everything derivable about the tree, in one sweep.
    pub fn metadata(&self) -> Metadata<'_, T> {
        compute_metadata(self)
    }

    /// The values in the given order. Empty for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Traversal, Tree};
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Traversal::Preorder), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Traversal::Inorder), vec![&1, &2, &3]);
    /// assert_eq!(tree.traverse(Traversal::Postorder), vec![&1, &3, &2]);
    /// assert_eq!(tree.traverse(Traversal::LevelOrder), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, kind: Traversal) -> Vec<&T> {
        self.metadata().sequence(kind)
    }

    /// Number of nodes.
    pub fn compute_size(&self) -> usize {
        self.metadata().size()
    }

    /// Number of parent/child links.
    pub fn compute_edges(&self) -> usize {
        self.metadata().edge_count()
    }

    /// Height in edges (an empty tree is -1, a lone root 0) or in levels
    /// (an empty tree is 0, a lone root 1).
    pub fn compute_height(&self, in_edges: bool) -> isize {
        self.metadata().height(in_edges)
    }

    /// Edges between the root and the occurrence of `value` that
    /// [`search`][Tree::search] finds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let tree: Tree<i32> = [15, 10, 20, 12].into_iter().collect();
    ///
    /// assert_eq!(tree.compute_depth(&15), Ok(0));
    /// assert_eq!(tree.compute_depth(&12), Ok(2));
    /// assert_eq!(tree.compute_depth(&99), Err(TreeError::NotFound));
    /// ```
    pub fn compute_depth(&self, value: &T) -> Result<usize, TreeError> {
        let node = self.search(value)?;
        let metadata = self.metadata();
        metadata
            .id_of(node)
            .map(|id| metadata.depth(id))
            .ok_or(TreeError::NotFound)
    }

    /// Depths of every occurrence of `value`, in level order. Empty when
    /// the value is absent.
    pub fn compute_depths(&self, value: &T) -> Vec<usize> {
        let metadata = self.metadata();
        (0..metadata.size())
            .filter(|&id| metadata.value(id) == value)
            .map(|id| metadata.depth(id))
            .collect()
    }

    /// The smallest value.
    pub fn compute_min_node(&self) -> Result<&T, TreeError> {
        self.metadata()
            .min_node()
            .map(|node| node.value())
            .ok_or(TreeError::EmptyTree)
    }

    /// The largest value.
    pub fn compute_max_node(&self) -> Result<&T, TreeError> {
        self.metadata()
            .max_node()
            .map(|node| node.value())
            .ok_or(TreeError::EmptyTree)
    }

    /// An owned snapshot of the tree's statistics.
    pub fn summary(&self) -> Result<Summary<T>, TreeError>
    where
        T: Clone,
    {
        self.metadata().summary().ok_or(TreeError::EmptyTree)
    }
}
