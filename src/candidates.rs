use crate::{Deletion, NodeId, Target, Tree};
use itertools::Itertools;
use std::iter::once;

/// The targets each source node may still be mapped to.
///
/// Every branch of the search owns its own set; [CandidateSet::refine] hands out a pruned copy
/// and leaves the receiver untouched, so sibling branches never observe each other's choices.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct CandidateSet(Vec<Vec<Target>>);

impl CandidateSet {
    /// The remaining targets of `v`, in the order the search tries them.
    #[inline]
    pub fn get(&self, v: NodeId) -> &[Target] {
        self.0.get(v.index()).map_or(&[][..], Vec::as_slice)
    }

    /// Whether `v` has run out of targets, i.e. the current branch cannot be completed.
    #[inline]
    pub fn is_dead_end(&self, v: NodeId) -> bool {
        self.get(v).is_empty()
    }

    /// Returns a copy of this set pruned to agree with the assignment of `v` to `w`.
    ///
    /// Only nodes after `v` in the preorder of `t1`, the ones not assigned yet, are affected:
    ///
    /// 1. _bijection_: a matched `w` is taken away from every other node;
    /// 2. _parent-child_: the children of `v` may only match children of `w`, and if `v` is
    ///    deleted they are constrained according to `deletion`;
    /// 3. _sibling order_: the right siblings of `v` may only match right siblings of `w`.
    ///
    /// Deletion is never pruned for a node, unless its parent was deleted under
    /// [Deletion::Subtree], in which case it is the only target left.
    pub fn refine<L>(
        &self,
        t1: &Tree<L>,
        t2: &Tree<L>,
        v: NodeId,
        w: Target,
        deletion: Deletion,
    ) -> Self {
        let mut c = self.clone();

        if let Target::Node(w) = w {
            for &x in &t1.preorder()[t1[v].preorder() + 1..] {
                c.retain(x, |y| y != Target::Node(w));
            }
        }

        for &x in t1.children_of(v) {
            match (w, deletion) {
                (Target::Node(w), _) => {
                    c.retain(x, |y| y.node().map_or(true, |y| t2.parent_of(y) == Some(w)));
                }

                (Target::Deleted, Deletion::Subtree) => c.retain(x, Target::is_deleted),
                (Target::Deleted, Deletion::Node) => {}
            }
        }

        if let (Target::Node(w), Some(p)) = (w, t1.parent_of(v)) {
            let parent = t2.parent_of(w);
            let sibling = t2[w].sibling();

            for &x in &t1.children_of(p)[t1[v].sibling() + 1..] {
                c.retain(x, |y| {
                    y.node().map_or(true, |y| {
                        t2.parent_of(y) == parent && t2[y].sibling() > sibling
                    })
                });
            }
        }

        c
    }

    fn retain<Fn: FnMut(Target) -> bool>(&mut self, x: NodeId, mut keep: Fn) {
        if let Some(targets) = self.0.get_mut(x.index()) {
            targets.retain(|&y| keep(y));
        }
    }
}

/// The initial [CandidateSet]: every source node may be deleted or matched with any node of
/// `t2` at the same depth, tried in preorder.
pub fn build_candidates<L>(t1: &Tree<L>, t2: &Tree<L>) -> CandidateSet {
    let by_depth = t2
        .preorder()
        .iter()
        .copied()
        .into_group_map_by(|&w| t2[w].depth());

    let mut lists = vec![Vec::new(); t1.len()];
    for &v in t1.preorder() {
        let peers = by_depth.get(&t1[v].depth()).map_or(&[][..], Vec::as_slice);
        lists[v.index()] = once(Target::Deleted)
            .chain(peers.iter().copied().map(Target::Node))
            .collect();
    }

    CandidateSet(lists)
}
