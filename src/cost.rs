use crate::{Mapping, Target, Tree};
use derive_more::Add;
use std::collections::BTreeSet;

/// Default cost of deleting one node of the source tree.
pub const DEL_COST: u64 = 1;

/// Default cost of inserting one node of the target tree.
pub const INS_COST: u64 = 1;

/// Default cost of relabeling one node in place.
pub const REP_COST: u64 = 1;

/// Unit costs of the three edit primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CostModel {
    pub deletion: u64,
    pub insertion: u64,
    pub relabel: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            deletion: DEL_COST,
            insertion: INS_COST,
            relabel: REP_COST,
        }
    }
}

impl CostModel {
    /// The total cost of the operations counted in `b`.
    pub fn price(&self, b: &Breakdown) -> u64 {
        b.deletions as u64 * self.deletion
            + b.insertions as u64 * self.insertion
            + b.relabelings as u64 * self.relabel
    }

    /// Zero if the labels are equal, the relabel cost otherwise.
    #[inline]
    pub fn relabel<L: PartialEq>(&self, a: &L, b: &L) -> u64 {
        if a == b {
            0
        } else {
            self.relabel
        }
    }
}

/// The number of operations of each kind an edit performs.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Add)]
pub struct Breakdown {
    pub deletions: usize,
    pub insertions: usize,
    pub relabelings: usize,
}

impl Breakdown {
    /// Counts the operations implied by a complete [Mapping] from `t1` into `t2`.
    ///
    /// Source nodes mapped to [Target::Deleted] are deletions, target nodes nobody maps to are
    /// insertions and matched nodes whose labels differ are relabelings.
    pub fn of<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>, mapping: &Mapping) -> Self {
        let mut b = Breakdown::default();
        let mut matched = BTreeSet::new();

        for (v, target) in mapping.iter() {
            match target {
                Target::Deleted => b.deletions += 1,
                Target::Node(w) => {
                    matched.insert(w);
                    if t1.label(v) != t2.label(w) {
                        b.relabelings += 1;
                    }
                }
            }
        }

        b.insertions = t2.len() - matched.len();
        b
    }
}
