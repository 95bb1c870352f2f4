//! This crate exposes an ordered Binary Search Tree (BST) engine that
//! validates itself after every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The ordering invariant of this tree is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > The second rule means the tree is a multiset. Inserting a value that is
//! > already present adds another `Node` to the right of the existing one and
//! > `delete` removes one occurrence at a time.
//!
//! The tree never rebalances, so the `O(height)` cost of searching can grow
//! to `O(N)` when values arrive in sorted order. Derived facts (size, height,
//! depths, extrema and the four traversal orders) all come from a single
//! [`Metadata`] sweep, and the same sweep backs the invariant checks run
//! after every `insert` and `delete`.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Traversal, Tree, TreeError};
//!
//! let mut tree: Tree<i32> = [15, 10, 20, 8, 12, 11, 13].into_iter().collect();
//!
//! assert_eq!(tree.compute_size(), 7);
//! assert_eq!(tree.compute_height(true), 3);
//! assert_eq!(
//!     tree.traverse(Traversal::Inorder),
//!     vec![&8, &10, &11, &12, &13, &15, &20]
//! );
//!
//! // The root has two children so it takes its in-order successor's value.
//! assert_eq!(tree.delete(&15), Ok(15));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(20));
//!
//! assert_eq!(tree.search(&99).err(), Some(TreeError::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod helpers;
mod invariants;
pub mod metadata;
mod node;
mod state;
mod tree;
mod util;


pub use error::TreeError;
pub use metadata::{compute_metadata, Metadata, NodeId, Summary, Traversal};
pub use node::Node;
pub use tree::Tree;
