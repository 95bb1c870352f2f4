/// An owned, possibly empty child slot. A `Node` owns both of its slots
/// exclusively so there is no sharing and no way to build a cycle.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and at most two children. It never stores a
/// reference to its parent; parents are derived on demand with
/// [`parent_of`][crate::helpers::parent_of] or the parent map of
/// [`Metadata`][crate::Metadata].
///
/// The derived `Clone`, `PartialEq` and `Debug` impls, and dropping a node
/// outside of a [`Tree`][crate::Tree], recurse once per level below it. A
/// `Tree` clones and drops its nodes with an explicit stack instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children. Nothing checks that the
    /// children respect the ordering invariant so this is meant for building
    /// fixtures by hand; [`Tree::from_root`][crate::Tree::from_root] takes the
    /// result as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Node;
    ///
    /// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// assert_eq!(node.left().map(Node::value), Some(&1));
    /// assert_eq!(node.right().map(Node::value), Some(&3));
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many of the two child slots are occupied.
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}
