use crate::NodeId;
use thiserror::Error;

/// The reasons why a [Tree][crate::Tree] cannot be built as requested.
///
/// A failed construction call leaves the tree exactly as it was.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ConstructionError {
    /// The requested parent is not a node of this tree.
    #[error("parent node {0} does not exist")]
    UnknownParent(NodeId),

    /// A node without a parent was added, but the tree already has a root.
    #[error("tree already has a root at node {0}")]
    MultipleRoots(NodeId),

    /// A non-empty parent array has no entry marked as the root.
    #[error("no node is marked as the root")]
    MissingRoot,

    /// The node cannot be reached from the root, i.e. it lies on a parent cycle.
    #[error("node {0} is not reachable from the root")]
    Unreachable(NodeId),
}
