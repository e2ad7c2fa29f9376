//! Combinations of two independent sources.
//!
//! The resulting iterators carry no signal; attach one with
//! [`AsyncIter::with_signal`].

use super::AsyncIter;
use crate::combinators::{Chain, Interleave, Zip};
use crate::core::{IntoSource, Source};

impl<A, B> AsyncIter<Zip<AsyncIter<A>, AsyncIter<B>>>
where
    A: Source,
    B: Source,
{
    /// Pair up the items of `a` and `b`.
    ///
    /// Stops as soon as either side runs out, finalizing the other side.
    pub fn zip<IA, IB>(a: IA, b: IB) -> Self
    where
        IA: IntoSource<Source = A>,
        IB: IntoSource<Source = B>,
    {
        Self::from_source(Zip::new(
            AsyncIter::from_source(a.into_source()),
            AsyncIter::from_source(b.into_source()),
        ))
    }
}

impl<A, B> AsyncIter<Chain<AsyncIter<A>, AsyncIter<B>>>
where
    A: Source,
    B: Source<Item = A::Item>,
{
    /// Yield all of `a`'s items, then all of `b`'s
    pub fn join<IA, IB>(a: IA, b: IB) -> Self
    where
        IA: IntoSource<Source = A>,
        IB: IntoSource<Source = B>,
    {
        Self::from_source(Chain::new(
            AsyncIter::from_source(a.into_source()),
            AsyncIter::from_source(b.into_source()),
        ))
    }
}

type Zipped<A, B> = AsyncIter<Zip<AsyncIter<A>, AsyncIter<B>>>;

impl<A, B> AsyncIter<Interleave<Zipped<A, B>, A::Item>>
where
    A: Source,
    B: Source<Item = A::Item>,
{
    /// Alternate items from `a` and `b`: `a0, b0, a1, b1, ...`
    ///
    /// Built on [`zip`](AsyncIter::zip), so it ends with the shorter source;
    /// whatever remains of the longer one is discarded.
    pub fn interleave<IA, IB>(a: IA, b: IB) -> Self
    where
        IA: IntoSource<Source = A>,
        IB: IntoSource<Source = B>,
    {
        AsyncIter::zip(a, b).then(Interleave::new)
    }
}
