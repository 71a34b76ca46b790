use crate::tracing_macros::{debug, trace};
use crate::{memoize, Config, Edit, Memoized, NodeId, Tree};
use arrayvec::ArrayVec;
use pathfinding::matrix::Matrix;
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    Remove,
    Insert,
    Match,
}

/// The state of one edit distance computation.
///
/// The memo table lives exactly as long as one top-level call, so separate computations never
/// observe each other.
struct ForestDistance<'a, L> {
    t1: &'a Tree<L>,
    t2: &'a Tree<L>,
    config: &'a Config,
    deletions: Memoized,
    insertions: Memoized,
    memo: HashMap<(NodeId, NodeId), u64>,
}

impl<'a, L: PartialEq> ForestDistance<'a, L> {
    fn new(t1: &'a Tree<L>, t2: &'a Tree<L>, config: &'a Config) -> Self {
        ForestDistance {
            t1,
            t2,
            config,
            deletions: memoize(t1, config.measure, config.costs.deletion),
            insertions: memoize(t2, config.measure, config.costs.insertion),
            memo: HashMap::new(),
        }
    }

    /// The distance between the subtrees rooted at `n1` and `n2`, where `None` is the empty tree.
    ///
    /// When both are present, their roots are matched with each other.
    fn ted(&mut self, n1: Option<NodeId>, n2: Option<NodeId>) -> u64 {
        let (x, y) = match (n1, n2) {
            (None, None) => return 0,
            (None, Some(y)) => return self.insertions.cost(y),
            (Some(x), None) => return self.deletions.cost(x),
            (Some(x), Some(y)) => (x, y),
        };

        if let Some(&d) = self.memo.get(&(x, y)) {
            return d;
        }

        let (t1, t2) = (self.t1, self.t2);
        let relabel = self.config.costs.relabel(t1.label(x), t2.label(y));
        let f = self.align(t1.children_of(x), t2.children_of(y));
        let d = relabel + f[(f.rows - 1, f.columns - 1)];

        trace!(%x, %y, d, "ted");
        self.memo.insert((x, y), d);
        d
    }

    /// The ways of reaching cell `(i, j)` of the alignment table between forests `a` and `b`.
    fn steps(
        &mut self,
        f: &Matrix<u64>,
        a: &[NodeId],
        b: &[NodeId],
        i: usize,
        j: usize,
    ) -> ArrayVec<(Step, u64), 3> {
        let mut steps = ArrayVec::new();

        if i > 0 {
            let cost = self.ted(Some(a[i - 1]), None);
            steps.push((Step::Remove, f[(i - 1, j)] + cost));
        }

        if j > 0 {
            let cost = self.ted(None, Some(b[j - 1]));
            steps.push((Step::Insert, f[(i, j - 1)] + cost));
        }

        if i > 0 && j > 0 {
            let cost = self.ted(Some(a[i - 1]), Some(b[j - 1]));
            steps.push((Step::Match, f[(i - 1, j - 1)] + cost));
        }

        steps
    }

    /// Fills the table whose cell `(i, j)` holds the distance between the first `i` subtrees
    /// of `a` and the first `j` subtrees of `b`.
    fn align(&mut self, a: &[NodeId], b: &[NodeId]) -> Matrix<u64> {
        let mut f = Matrix::new(a.len() + 1, b.len() + 1, 0);

        for i in 0..=a.len() {
            for j in 0..=b.len() {
                let steps = self.steps(&f, a, b, i, j);
                f[(i, j)] = steps.into_iter().map(|(_, c)| c).min().unwrap_or(0);
            }
        }

        f
    }

    /// Traces one cheapest path back through the alignment table of `a` and `b`.
    ///
    /// Ties are broken in favor of matching, so equal trees come out as nested [Edit::Keep]s.
    fn script(&mut self, a: &[NodeId], b: &[NodeId]) -> Box<[Edit]> {
        let (t1, t2) = (self.t1, self.t2);
        let f = self.align(a, b);
        let (mut i, mut j) = (a.len(), b.len());
        let mut edits = Vec::new();

        while i > 0 || j > 0 {
            let steps = self.steps(&f, a, b, i, j);
            let Some((step, _)) = steps
                .into_iter()
                .min_by_key(|&(s, c)| (c, s != Step::Match))
            else {
                break;
            };

            match step {
                Step::Remove => {
                    i -= 1;
                    edits.push(Edit::Remove);
                }

                Step::Insert => {
                    j -= 1;
                    edits.push(Edit::Insert);
                }

                Step::Match => {
                    i -= 1;
                    j -= 1;

                    let (x, y) = (a[i], b[j]);
                    let inner = self.script(t1.children_of(x), t2.children_of(y));
                    edits.push(if t1.label(x) == t2.label(y) {
                        Edit::Keep(inner)
                    } else {
                        Edit::Relabel(inner)
                    });
                }
            }
        }

        edits.reverse();
        edits.into()
    }
}

/// The edit distance between `t1` and `t2` under the default [Config].
///
/// See [edit_distance_with].
pub fn edit_distance<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>) -> u64 {
    edit_distance_with(t1, t2, &Config::default())
}

/// Computes the least cost of transforming `t1` into `t2` by memoized forest-distance recursion.
///
/// Matched nodes keep their relative structure: children of matched nodes are aligned like
/// sequences, where each subtree is either deleted, inserted or matched with a subtree of the
/// other side. Deleting or inserting a subtree costs according to [Config::measure].
///
/// The two roots are aligned the same way, as forests of at most one tree each, so an empty
/// tree on either side reduces to a pure insertion or deletion.
pub fn edit_distance_with<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>, config: &Config) -> u64 {
    let a: Vec<_> = t1.root().into_iter().collect();
    let b: Vec<_> = t2.root().into_iter().collect();

    let mut fd = ForestDistance::new(t1, t2, config);
    let d = fd.align(&a, &b)[(a.len(), b.len())];

    debug!(distance = d, pairs = fd.memo.len(), "edit_distance done");
    d
}

/// Finds the lowest cost sequence of [Edit]s that transforms `t1` into `t2`, and its cost.
///
/// The sequence is aligned with the roots of both trees, so it is either empty (both trees
/// empty), a single [Edit::Keep] or [Edit::Relabel], or some combination of [Edit::Remove] and
/// [Edit::Insert].
pub fn diff<L: PartialEq>(t1: &Tree<L>, t2: &Tree<L>, config: &Config) -> (Box<[Edit]>, u64) {
    let a: Vec<_> = t1.root().into_iter().collect();
    let b: Vec<_> = t2.root().into_iter().collect();

    let mut fd = ForestDistance::new(t1, t2, config);
    let d = fd.align(&a, &b)[(a.len(), b.len())];
    let edits = fd.script(&a, &b);

    debug!(distance = d, edits = edits.len(), "diff done");
    (edits, d)
}
