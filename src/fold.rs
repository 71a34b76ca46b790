use std::ops::Add;

/// Preorder accumulation over the nodes of a subtree or the steps of an edit script.
///
/// Implementors visit an item before everything nested below it, and siblings from left to
/// right, so [Fold::count] of a [Subtree][crate::tree::Subtree] is its size and of an edit
/// script is the number of [Edit][crate::Edit]s in it.
pub(crate) trait Fold<I: ?Sized = Self> {
    fn fold<R, Fn: FnMut(R, &I) -> R>(&self, init: R, f: &mut Fn) -> R;

    #[inline]
    fn sum<N: Default + Add<Output = N>, Fn: FnMut(&I) -> N>(&self, mut f: Fn) -> N {
        self.fold(N::default(), &mut |n, i| n + f(i))
    }

    /// The number of items visited.
    #[inline]
    fn count(&self) -> usize {
        self.sum(|_| 1)
    }
}

impl<F: Fold<I>, I: ?Sized> Fold<I> for [F] {
    fn fold<R, Fn: FnMut(R, &I) -> R>(&self, init: R, f: &mut Fn) -> R {
        self.iter().fold(init, |r, i| i.fold(r, f))
    }
}
