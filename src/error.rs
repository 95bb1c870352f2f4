use thiserror::Error;

/// The recoverable ways a query or mutation on a [`Tree`][crate::Tree] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The value is not stored in the tree (or the tree is empty).
    #[error("value not found in tree")]
    NotFound,
    /// The operation has no meaning for a tree without nodes.
    #[error("tree is empty")]
    EmptyTree,
}
