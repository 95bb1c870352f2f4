use crate::node::Node;

/// Which structural case `delete` hit, selected by the child count of the
/// node holding the value being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// No children. The parent's slot (or the root) becomes empty.
    Leaf,
    /// One child which is spliced into the deleted node's slot.
    OneChild,
    /// Two children. The node keeps its place and takes the value of its
    /// in-order successor, which is then unlinked instead.
    TwoChildren,
}

impl DeleteCase {
    pub(crate) fn of<T>(node: &Node<T>) -> Self {
        match node.child_count() {
            0 => Self::Leaf,
            1 => Self::OneChild,
            _ => Self::TwoChildren,
        }
    }
}
