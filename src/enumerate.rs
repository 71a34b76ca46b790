use crate::tracing_macros::{debug, trace};
use crate::{build_candidates, Breakdown, CandidateSet, Config, Mapping, Solution, Target, Tree};

/// Walks the search tree of constrained mappings, one source node per level in preorder.
///
/// The mapping under construction is shared by the whole walk and restored after every
/// candidate is tried, whereas the candidate sets are owned by each level.
struct Search<'a, L> {
    t1: &'a Tree<L>,
    t2: &'a Tree<L>,
    config: &'a Config,
    mapping: Mapping,
}

impl<'a, L: PartialEq> Search<'a, L> {
    fn new(t1: &'a Tree<L>, t2: &'a Tree<L>, config: &'a Config) -> Self {
        Search {
            t1,
            t2,
            config,
            mapping: Mapping::new(),
        }
    }

    fn solution(&self) -> Solution {
        let breakdown = Breakdown::of(self.t1, self.t2, &self.mapping);
        Solution {
            mapping: self.mapping.clone(),
            cost: self.config.costs.price(&breakdown),
            breakdown,
        }
    }

    fn enumerate(&mut self, index: usize, c: &CandidateSet, solutions: &mut Vec<Solution>) {
        let Some(&v) = self.t1.preorder().get(index) else {
            solutions.push(self.solution());
            return;
        };

        if c.is_dead_end(v) {
            trace!(%v, "dead end");
        }

        for &w in c.get(v) {
            let next = c.refine(self.t1, self.t2, v, w, self.config.deletion);
            self.mapping.insert(v, w);
            self.enumerate(index + 1, &next, solutions);
            self.mapping.remove(v);
        }
    }

    /// The cheapest any completion of the current mapping could possibly cost.
    ///
    /// `committed` covers the deletions and relabelings made so far; on top of that, target
    /// nodes that cannot be matched even if every remaining source node were, must be inserted.
    fn lower_bound(&self, index: usize, matched: usize, committed: u64) -> u64 {
        let remaining = self.t1.preorder().len() - index;
        let unmatched = self.t2.len().saturating_sub(matched + remaining);
        committed + unmatched as u64 * self.config.costs.insertion
    }

    fn branch(
        &mut self,
        index: usize,
        c: &CandidateSet,
        matched: usize,
        committed: u64,
        best: &mut Option<Solution>,
    ) {
        let bound = self.lower_bound(index, matched, committed);
        if best.as_ref().map_or(false, |b| bound >= b.cost) {
            trace!(index, bound, "pruned");
            return;
        }

        let Some(&v) = self.t1.preorder().get(index) else {
            let s = self.solution();
            debug!(cost = s.cost, "new incumbent");
            *best = Some(s);
            return;
        };

        for &w in c.get(v) {
            let (step, matched) = match w {
                Target::Deleted => (self.config.costs.deletion, matched),
                Target::Node(w) => {
                    let costs = &self.config.costs;
                    let relabel = costs.relabel(self.t1.label(v), self.t2.label(w));
                    (relabel, matched + 1)
                }
            };

            let next = c.refine(self.t1, self.t2, v, w, self.config.deletion);
            self.mapping.insert(v, w);
            self.branch(index + 1, &next, matched, committed + step, best);
            self.mapping.remove(v);
        }
    }
}

/// Enumerates every constrained mapping from `t1` into `t2` under the default [Config].
///
/// See [enumerate_mappings_with].
pub fn enumerate_mappings<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>) -> Vec<Solution> {
    enumerate_mappings_with(t1, t2, &Config::default())
}

/// Enumerates every mapping from `t1` into `t2` that preserves depth, bijection, parent-child
/// relations and sibling order, each exactly once, together with its cost.
///
/// Source nodes are assigned in preorder and candidates are tried in the order of
/// [build_candidates], so the first candidate of the root varies slowest. An empty `t1` yields
/// the single empty mapping, which inserts all of `t2`.
///
/// The number of mappings grows exponentially with the size of the trees, so this is only
/// practical for small trees. Callers that need bounded latency should cap the node count
/// beforehand, or use [edit_distance][crate::edit_distance] when only the optimum matters.
///
/// Both trees must have [fresh metadata][Tree::has_fresh_metadata].
pub fn enumerate_mappings_with<L: PartialEq>(
    t1: &Tree<L>,
    t2: &Tree<L>,
    config: &Config,
) -> Vec<Solution> {
    debug!(
        nodes1 = t1.len(),
        nodes2 = t2.len(),
        "enumerate_mappings start"
    );

    let c = build_candidates(t1, t2);
    let mut solutions = Vec::new();
    Search::new(t1, t2, config).enumerate(0, &c, &mut solutions);

    debug!(solutions = solutions.len(), "enumerate_mappings done");
    solutions
}

/// Finds the first cheapest mapping [enumerate_mappings_with] would produce, by branch and bound.
///
/// Partial mappings are abandoned as soon as a lower bound on their cost reaches the cost of
/// the best complete mapping found so far. Worst-case complexity is still exponential.
pub fn best_mapping<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>, config: &Config) -> Option<Solution> {
    debug!(nodes1 = t1.len(), nodes2 = t2.len(), "best_mapping start");

    let c = build_candidates(t1, t2);
    let mut best = None;
    Search::new(t1, t2, config).branch(0, &c, 0, 0, &mut best);
    best
}

/// The first [Solution] of least cost.
pub fn cheapest(solutions: &[Solution]) -> Option<&Solution> {
    solutions.iter().min_by_key(|s| s.cost)
}
