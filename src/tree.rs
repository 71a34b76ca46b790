use crate::{ConstructionError, Fold};
use derive_more::{Display, From};
use std::ops::Index;

/// Identifies a node within the [Tree] that created it.
///
/// Ids are handed out sequentially starting at zero, so they double as indices into the tree.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From, Display)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of this node in the arena of its [Tree].
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labeled node of an ordered [Tree].
///
/// The [depth][TreeNode::depth], [preorder][TreeNode::preorder] and [sibling][TreeNode::sibling]
/// attributes are derived from the tree topology and only meaningful after
/// [Tree::compute_metadata] has run.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TreeNode<L> {
    id: NodeId,
    label: L,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
    preorder: usize,
    sibling: usize,
}

impl<L> TreeNode<L> {
    fn new(id: NodeId, label: L, parent: Option<NodeId>) -> Self {
        TreeNode {
            id,
            label,
            parent,
            children: Vec::new(),
            depth: 0,
            preorder: 0,
            sibling: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// The parent of this node, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The children of this node, from left to right.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Distance from the root, which has depth zero.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Rank of this node in a depth-first, left-to-right traversal, starting at zero.
    #[inline]
    pub fn preorder(&self) -> usize {
        self.preorder
    }

    /// Position of this node among its parent's children, starting at zero.
    #[inline]
    pub fn sibling(&self) -> usize {
        self.sibling
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An ordered, labeled tree stored as an arena of [TreeNode]s.
///
/// Trees are built incrementally, root first, with [Tree::add_node]. Every algorithm in this
/// crate reads the derived node attributes, so [Tree::compute_metadata] must be called once the
/// topology is final. Running an algorithm on a tree whose metadata is stale is not detected and
/// yields meaningless results.
///
/// # Example
///
/// ```rust
/// use constrained_tree_edit::Tree;
///
/// let mut t = Tree::new();
/// let a = t.add_node("A", None)?;
/// let b = t.add_node("B", Some(a))?;
/// let c = t.add_node("C", Some(a))?;
/// t.compute_metadata();
///
/// assert_eq!(t.children_of(a), &[b, c]);
/// assert_eq!(t[c].sibling(), 1);
/// # Ok::<(), constrained_tree_edit::ConstructionError>(())
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tree<L> {
    nodes: Vec<TreeNode<L>>,
    root: Option<NodeId>,
    preorder: Vec<NodeId>,
    fresh: bool,
}

impl<L> Default for Tree<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Tree<L> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: None,
            preorder: Vec::new(),
            fresh: true,
        }
    }

    /// Builds a tree from a parent array, one `(label, parent index)` entry per node.
    ///
    /// The node at position `i` receives the id `i`; the single entry without a parent becomes
    /// the root and children are ordered by ascending index. Metadata is computed on success.
    pub fn from_parents<I>(entries: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = (L, Option<usize>)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        let len = entries.len();
        let mut tree = Tree::new();

        for (i, (label, parent)) in entries.into_iter().enumerate() {
            let id = NodeId(i);
            let parent = parent.map(NodeId);

            match (parent, tree.root) {
                (Some(p), _) if p.0 >= len => return Err(ConstructionError::UnknownParent(p)),
                (Some(_), _) => {}
                (None, Some(root)) => return Err(ConstructionError::MultipleRoots(root)),
                (None, None) => tree.root = Some(id),
            }

            tree.nodes.push(TreeNode::new(id, label, parent));
        }

        if len > 0 && tree.root.is_none() {
            return Err(ConstructionError::MissingRoot);
        }

        for i in 0..len {
            if let Some(p) = tree.nodes[i].parent {
                tree.nodes[p.0].children.push(NodeId(i));
            }
        }

        tree.compute_metadata();

        if tree.preorder.len() < len {
            let mut reached = vec![false; len];
            for id in &tree.preorder {
                reached[id.0] = true;
            }

            if let Some(i) = reached.iter().position(|&r| !r) {
                return Err(ConstructionError::Unreachable(NodeId(i)));
            }
        }

        Ok(tree)
    }

    /// Adds a node labeled `label` below `parent`, or as the root if `parent` is `None`.
    ///
    /// New children are appended to the right of their siblings. Adding a node marks the
    /// metadata of the tree as stale.
    pub fn add_node(
        &mut self,
        label: L,
        parent: Option<NodeId>,
    ) -> Result<NodeId, ConstructionError> {
        let id = NodeId(self.nodes.len());

        match parent {
            Some(p) => {
                let parent = self
                    .nodes
                    .get_mut(p.0)
                    .ok_or(ConstructionError::UnknownParent(p))?;

                parent.children.push(id);
            }

            None => {
                if let Some(root) = self.root {
                    return Err(ConstructionError::MultipleRoots(root));
                }

                self.root = Some(id);
            }
        }

        self.nodes.push(TreeNode::new(id, label, parent));
        self.fresh = false;
        Ok(id)
    }

    /// Assigns depth, preorder index and sibling order to every node reachable from the root.
    pub fn compute_metadata(&mut self) {
        self.preorder.clear();

        if let Some(root) = self.root {
            let mut stack = vec![(root, 0, 0)];
            while let Some((id, depth, sibling)) = stack.pop() {
                let node = &mut self.nodes[id.0];
                node.depth = depth;
                node.sibling = sibling;
                node.preorder = self.preorder.len();
                self.preorder.push(id);

                let children = node.children.iter().copied().enumerate().rev();
                stack.extend(children.map(|(i, c)| (c, depth + 1, i)));
            }
        }

        self.fresh = true;
    }

    /// Whether the derived node attributes reflect the current topology.
    #[inline]
    pub fn has_fresh_metadata(&self) -> bool {
        self.fresh
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The number of nodes in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<L>> {
        self.nodes.get(id.0)
    }

    /// All nodes in ascending id order, i.e. in the order they were added.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &TreeNode<L>> {
        self.nodes.iter()
    }

    #[inline]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    #[inline]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    #[inline]
    pub fn label(&self, id: NodeId) -> &L {
        &self[id].label
    }

    /// Node ids in preorder, as of the last call to [Tree::compute_metadata].
    #[inline]
    pub fn preorder(&self) -> &[NodeId] {
        &self.preorder
    }

    /// Node ids in postorder: every node comes after all of its descendants.
    pub fn postorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend_from_slice(&self[id].children);
        }

        order.reverse();
        order
    }

    /// The number of edges on the longest path from the root down to a leaf.
    pub fn height(&self) -> Option<usize> {
        let mut heights = vec![0; self.len()];
        for id in self.postorder() {
            let h = self[id].children.iter().map(|c| heights[c.0] + 1).max();
            heights[id.0] = h.unwrap_or(0);
        }

        self.root.map(|r| heights[r.0])
    }

    /// The number of nodes in the subtree rooted at `id`, including `id` itself.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.subtree(id).count()
    }

    /// The leaves of the subtree rooted at `id`, from left to right.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        self.subtree(id).fold(Vec::new(), &mut |mut leaves, n| {
            if n.is_leaf() {
                leaves.push(n.id);
            }

            leaves
        })
    }

    pub(crate) fn subtree(&self, id: NodeId) -> Subtree<'_, L> {
        Subtree {
            tree: self,
            root: id,
        }
    }
}

impl<L> Index<NodeId> for Tree<L> {
    type Output = TreeNode<L>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// A view of the nodes below some node of a [Tree].
#[derive(Debug, Copy, Clone)]
pub(crate) struct Subtree<'t, L> {
    tree: &'t Tree<L>,
    root: NodeId,
}

impl<'t, L> Fold<TreeNode<L>> for Subtree<'t, L> {
    fn fold<R, Fn: FnMut(R, &TreeNode<L>) -> R>(&self, init: R, f: &mut Fn) -> R {
        let mut acc = init;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.tree[id];
            acc = f(acc, node);
            stack.extend(node.children.iter().rev());
        }

        acc
    }
}


#[cfg(test)]
pub(crate) use tests::{abdc, Label};
