//! The metadata aggregator. One breadth-first sweep over a tree records
//! every node together with its parent, children, depth and the running
//! extrema, then three recursive passes add the depth-first orders.
//!
//! Validation, the scalar queries on [`Tree`] and any external visualizer
//! all read their facts from a [`Metadata`] instead of walking the tree
//! themselves.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{compute_metadata, Traversal, Tree};
//!
//! let tree: Tree<char> = "dbfaceg".chars().collect();
//! let metadata = compute_metadata(&tree);
//!
//! assert_eq!(metadata.size(), 7);
//! assert_eq!(metadata.edge_count(), 6);
//! assert_eq!(metadata.height(false), 3);
//!
//! let root = metadata.root().unwrap();
//! let children: Vec<_> = metadata.children(root).iter().map(|&id| *metadata.value(id)).collect();
//! assert_eq!(children, vec!['b', 'f']);
//!
//! assert_eq!(
//!     metadata.sequence(Traversal::Postorder),
//!     vec![&'a', &'c', &'b', &'e', &'g', &'f', &'d']
//! );
//! ```

use std::collections::HashMap;

use crate::node::Node;
use crate::tree::Tree;

/// Identifies a node within one [`Metadata`]: its position in level order.
/// Ids are only meaningful for the `Metadata` that produced them.
pub type NodeId = usize;

/// The orders a tree can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree. Sorted for a valid tree.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
    /// Breadth first: the root, then each depth in turn, left to right.
    LevelOrder,
}

/// Node identity (its address) used to key the reverse index. Keeping the
/// address as an integer keeps `Metadata` as shareable as the `&Node`s in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey(usize);

impl NodeKey {
    pub(crate) fn of<T>(node: &Node<T>) -> Self {
        Self(node as *const Node<T> as usize)
    }
}

/// Everything derivable about a tree at one point in time. The borrow of the
/// tree guarantees the facts stay consistent with the structure they describe.
#[derive(Debug)]
pub struct Metadata<'a, T> {
    /// Every node reached by the sweep in level order. Indexed by [`NodeId`].
    nodes: Vec<&'a Node<T>>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    depths: Vec<usize>,
    index: HashMap<NodeKey, NodeId>,
    preorder: Vec<&'a Node<T>>,
    inorder: Vec<&'a Node<T>>,
    postorder: Vec<&'a Node<T>>,
    edge_count: usize,
    height_levels: usize,
    min: Option<NodeId>,
    max: Option<NodeId>,
}

/// Sweeps `tree` once breadth first and once per depth-first order.
/// An empty tree gives an empty `Metadata`.
pub fn compute_metadata<T: Ord>(tree: &Tree<T>) -> Metadata<'_, T> {
    let mut metadata = Metadata::empty();
    let Some(root) = tree.root() else {
        return metadata;
    };

    let mut level = vec![metadata.record(root, None, 0)];
    let mut depth = 0;
    while !level.is_empty() {
        metadata.height_levels = depth + 1;

        let mut next_level = Vec::new();
        for id in level {
            let node = metadata.nodes[id];
            for child in [node.left(), node.right()].into_iter().flatten() {
                let child_id = metadata.record(child, Some(id), depth + 1);
                metadata.children[id].push(child_id);
                metadata.edge_count += 1;
                next_level.push(child_id);
            }
        }

        level = next_level;
        depth += 1;
    }

    preorder(root, &mut metadata.preorder);
    inorder(root, &mut metadata.inorder);
    postorder(root, &mut metadata.postorder);

    metadata
}

impl<'a, T> Metadata<'a, T> {
    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            depths: Vec::new(),
            index: HashMap::new(),
            preorder: Vec::new(),
            inorder: Vec::new(),
            postorder: Vec::new(),
            edge_count: 0,
            height_levels: 0,
            min: None,
            max: None,
        }
    }

    /// Adds `node` to the level-order list and updates the extrema.
    fn record(&mut self, node: &'a Node<T>, parent: Option<NodeId>, depth: usize) -> NodeId
    where
        T: Ord,
    {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.parents.push(parent);
        self.children.push(Vec::new());
        self.depths.push(depth);
        self.index.insert(NodeKey::of(node), id);

        if self.min.map_or(true, |min| node.value < self.nodes[min].value) {
            self.min = Some(id);
        }
        if self.max.map_or(true, |max| node.value > self.nodes[max].value) {
            self.max = Some(id);
        }
        id
    }

    /// Whether the swept tree had no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of parent/child links.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Height of the tree, counted in edges or in levels. An empty tree is
    /// -1 edges and 0 levels high; a lone root is 0 edges and 1 level.
    pub fn height(&self, in_edges: bool) -> isize {
        let levels = self.height_levels as isize;
        if in_edges {
            levels - 1
        } else {
            levels
        }
    }

    /// The root's id, `None` when empty.
    pub fn root(&self) -> Option<NodeId> {
        (!self.is_empty()).then_some(0)
    }

    /// All nodes in level order; a node's position is its [`NodeId`].
    pub fn nodes(&self) -> &[&'a Node<T>] {
        &self.nodes
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this `Metadata`.
    pub fn node(&self, id: NodeId) -> &'a Node<T> {
        self.nodes[id]
    }

    /// Shorthand for `self.node(id).value()`.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this `Metadata`.
    pub fn value(&self, id: NodeId) -> &'a T {
        &self.nodes[id].value
    }

    /// The id of `node` if the sweep reached it. Lookup is by identity.
    pub fn id_of(&self, node: &Node<T>) -> Option<NodeId> {
        self.index.get(&NodeKey::of(node)).copied()
    }

    /// The parent of `id`, `None` for the root.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this `Metadata`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id]
    }

    /// The present children of `id`, left before right.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this `Metadata`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id]
    }

    /// Edges between the root and `id`.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this `Metadata`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.depths[id]
    }

    /// The node with the smallest value. Among equal values, the first one
    /// in level order.
    pub fn min_node(&self) -> Option<&'a Node<T>> {
        self.min.map(|id| self.nodes[id])
    }

    /// The node with the largest value. Among equal values, the first one
    /// in level order.
    pub fn max_node(&self) -> Option<&'a Node<T>> {
        self.max.map(|id| self.nodes[id])
    }

    /// The nodes in the given order.
    pub fn order(&self, kind: Traversal) -> &[&'a Node<T>] {
        match kind {
            Traversal::Preorder => &self.preorder,
            Traversal::Inorder => &self.inorder,
            Traversal::Postorder => &self.postorder,
            Traversal::LevelOrder => &self.nodes,
        }
    }

    /// The values in the given order.
    pub fn sequence(&self, kind: Traversal) -> Vec<&'a T> {
        self.order(kind).iter().map(|node| &node.value).collect()
    }

    /// An owned snapshot of the headline statistics. `None` when empty.
    pub fn summary(&self) -> Option<Summary<T>>
    where
        T: Clone,
    {
        let root = self.nodes.first()?;
        Some(Summary {
            root: root.value.clone(),
            size: self.size(),
            edges: self.edge_count,
            height_levels: self.height_levels,
            height_edges: self.height(true),
            min: self.min_node()?.value.clone(),
            max: self.max_node()?.value.clone(),
        })
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.index.keys().copied()
    }
}

/// Headline statistics of a non-empty tree, detached from the tree itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary<T> {
    /// The root's value.
    pub root: T,
    /// Number of nodes.
    pub size: usize,
    /// Number of edges.
    pub edges: usize,
    /// Height counted in levels.
    pub height_levels: usize,
    /// Height counted in edges.
    pub height_edges: isize,
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
}

// The three depth-first passes recurse, so their stack depth is the tree's
// height. A degenerate chain of N nodes recurses N deep.

fn preorder<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a Node<T>>) {
    out.push(node);
    if let Some(left) = node.left() {
        preorder(left, out);
    }
    if let Some(right) = node.right() {
        preorder(right, out);
    }
}

fn inorder<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a Node<T>>) {
    if let Some(left) = node.left() {
        inorder(left, out);
    }
    out.push(node);
    if let Some(right) = node.right() {
        inorder(right, out);
    }
}

fn postorder<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a Node<T>>) {
    if let Some(left) = node.left() {
        postorder(left, out);
    }
    if let Some(right) = node.right() {
        postorder(right, out);
    }
    out.push(node);
}
