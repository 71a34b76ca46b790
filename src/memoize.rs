use crate::{NodeId, SubtreeMeasure, Tree};

/// The cost of inserting or deleting the whole subtree below each node of a tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(crate) struct Memoized {
    costs: Box<[u64]>,
}

impl Memoized {
    #[inline]
    pub(crate) fn cost(&self, id: NodeId) -> u64 {
        self.costs[id.index()]
    }
}

/// Prices every subtree of `t` bottom-up, charging `unit` per node counted by `measure`.
pub(crate) fn memoize<L>(t: &Tree<L>, measure: SubtreeMeasure, unit: u64) -> Memoized {
    let mut costs = vec![0; t.len()];

    for id in t.postorder() {
        let node = &t[id];
        let own = match measure {
            SubtreeMeasure::Nodes => unit,
            SubtreeMeasure::Leaves if node.is_leaf() => unit,
            SubtreeMeasure::Leaves => 0,
        };

        let children: u64 = node.children().iter().map(|c| costs[c.index()]).sum();
        costs[id.index()] = own + children;
    }

    Memoized {
        costs: costs.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fold, Label};
    use test_strategy::proptest;

    #[proptest]
    fn node_cost_is_memoized(t: Tree<Label>, #[strategy(0u64..8)] unit: u64) {
        let m = memoize(&t, SubtreeMeasure::Nodes, unit);
        for n in t.nodes() {
            assert_eq!(m.cost(n.id()), t.subtree(n.id()).count() as u64 * unit);
        }
    }

    #[proptest]
    fn leaf_cost_is_memoized(t: Tree<Label>, #[strategy(0u64..8)] unit: u64) {
        let m = memoize(&t, SubtreeMeasure::Leaves, unit);
        for n in t.nodes() {
            let leaves = t.subtree(n.id()).sum(|c| u64::from(c.is_leaf()));
            assert_eq!(m.cost(n.id()), leaves * unit);
            assert_eq!(leaves, t.leaves(n.id()).len() as u64);
        }
    }

    #[proptest]
    fn leaves_never_cost_more_than_nodes(t: Tree<Label>) {
        let nodes = memoize(&t, SubtreeMeasure::Nodes, 1);
        let leaves = memoize(&t, SubtreeMeasure::Leaves, 1);
        for n in t.nodes() {
            assert!(0 < leaves.cost(n.id()));
            assert!(leaves.cost(n.id()) <= nodes.cost(n.id()));
        }
    }
}
