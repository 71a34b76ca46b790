use crate::Fold;

/// A single operation between two [Tree][crate::Tree] nodes.
///
/// A sequence of [Edit]s lines up with two sequences of sibling subtrees: each edit consumes one
/// subtree of the left-hand side, one of the right-hand side, or one of each.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Edit {
    /// Match two nodes with equal labels and edit their children.
    Keep(Box<[Edit]>),

    /// Match two nodes with different labels, relabel in place and edit their children.
    Relabel(Box<[Edit]>),

    /// Insert the incoming node along with its children in place.
    Insert,

    /// Remove the existing node along with its children.
    Remove,
}

impl Edit {
    /// The edits of the children of a matched pair of nodes.
    pub fn children(&self) -> &[Edit] {
        match self {
            Edit::Keep(c) | Edit::Relabel(c) => c,
            Edit::Insert | Edit::Remove => &[],
        }
    }
}

impl Fold for Edit {
    fn fold<R, Fn: FnMut(R, &Self) -> R>(&self, init: R, f: &mut Fn) -> R {
        self.children().fold(f(init, self), f)
    }
}
