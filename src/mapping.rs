use crate::{Breakdown, NodeId, Tree};
use std::collections::BTreeMap;
use std::fmt;

/// Where a node of the source tree goes.
///
/// [Target::Deleted] sorts before every node, so it always heads a candidate list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Target {
    /// The null-match: the source node is deleted.
    Deleted,

    /// The source node is matched with this node of the target tree.
    Node(NodeId),
}

impl Target {
    /// The matched node, unless deleted.
    #[inline]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Target::Deleted => None,
            Target::Node(w) => Some(w),
        }
    }

    #[inline]
    pub fn is_deleted(self) -> bool {
        self == Target::Deleted
    }
}

impl From<NodeId> for Target {
    #[inline]
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl From<Option<NodeId>> for Target {
    #[inline]
    fn from(id: Option<NodeId>) -> Self {
        id.map_or(Target::Deleted, Target::Node)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Deleted => f.write_str("λ"),
            Target::Node(w) => write!(f, "{w}"),
        }
    }
}

/// A partial function from the nodes of the source tree to [Target]s.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Mapping(BTreeMap<NodeId, Target>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, v: NodeId) -> Option<Target> {
        self.0.get(&v).copied()
    }

    /// Assigns `v`, returning its previous target if it had one.
    #[inline]
    pub fn insert(&mut self, v: NodeId, target: Target) -> Option<Target> {
        self.0.insert(v, target)
    }

    #[inline]
    pub fn remove(&mut self, v: NodeId) -> Option<Target> {
        self.0.remove(&v)
    }

    /// The number of assigned source nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every node of `t1` is assigned.
    pub fn is_complete<L>(&self, t1: &Tree<L>) -> bool {
        t1.nodes().all(|n| self.0.contains_key(&n.id()))
    }

    /// Assignments in ascending order of source node id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Target)> + '_ {
        self.0.iter().map(|(&v, &t)| (v, t))
    }
}

impl FromIterator<(NodeId, Target)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (NodeId, Target)>>(iter: I) -> Self {
        Mapping(iter.into_iter().collect())
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (v, t)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{v} -> {t}")?;
        }

        f.write_str("}")
    }
}

/// A complete [Mapping] together with what it costs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Solution {
    pub mapping: Mapping,
    pub cost: u64,
    pub breakdown: Breakdown,
}
