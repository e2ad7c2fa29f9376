//! Lazy transformations on [`AsyncIter`].
//!
//! Each method consumes the iterator and returns a new one built with
//! [`AsyncIter::then`]; nothing is pulled until the result is consumed.

use std::future::Future;

use super::AsyncIter;
use crate::combinators::{
    AndThen, Chain, Filter, Inspect, Map, Skip, SkipWhile, Take, TakeWhile, TryFilter,
    TryInspect, TryMap,
};
use crate::core::{IntoSource, Result, Source};

impl<S: Source> AsyncIter<S> {
    /// Map items through a function
    pub fn map<U, F>(self, f: F) -> AsyncIter<Map<Self, F>>
    where
        F: FnMut(S::Item) -> U + Send,
        U: Send + 'static,
    {
        self.then(|upstream| Map::new(upstream, f))
    }

    /// Map items through a fallible function; the first error fails the
    /// traversal
    pub fn try_map<U, F>(self, f: F) -> AsyncIter<TryMap<Self, F>>
    where
        F: FnMut(S::Item) -> Result<U> + Send,
        U: Send + 'static,
    {
        self.then(|upstream| TryMap::new(upstream, f))
    }

    /// Map items through an async, fallible function
    pub fn and_then<U, F, Fut>(self, f: F) -> AsyncIter<AndThen<Self, F>>
    where
        F: FnMut(S::Item) -> Fut + Send,
        Fut: Future<Output = Result<U>> + Send + 'static,
        U: Send + 'static,
    {
        self.then(|upstream| AndThen::new(upstream, f))
    }

    /// Run a side effect on each item before passing it on unchanged
    pub fn inspect<F>(self, f: F) -> AsyncIter<Inspect<Self, F>>
    where
        F: FnMut(&S::Item) + Send,
    {
        self.then(|upstream| Inspect::new(upstream, f))
    }

    /// Run a fallible side effect on each item before passing it on
    pub fn try_inspect<F>(self, f: F) -> AsyncIter<TryInspect<Self, F>>
    where
        F: FnMut(&S::Item) -> Result<()> + Send,
    {
        self.then(|upstream| TryInspect::new(upstream, f))
    }

    /// Keep only the items matching a predicate
    pub fn filter<F>(self, predicate: F) -> AsyncIter<Filter<Self, F>>
    where
        F: FnMut(&S::Item) -> bool + Send,
    {
        self.then(|upstream| Filter::new(upstream, predicate))
    }

    /// Keep only the items matching a fallible predicate
    pub fn try_filter<F>(self, predicate: F) -> AsyncIter<TryFilter<Self, F>>
    where
        F: FnMut(&S::Item) -> Result<bool> + Send,
    {
        self.then(|upstream| TryFilter::new(upstream, predicate))
    }

    /// Yield at most the first `count` items.
    ///
    /// Once `count` items have been yielded the upstream is finalized and
    /// never pulled again. `take(0)` never pulls at all.
    pub fn take(self, count: usize) -> AsyncIter<Take<Self>> {
        self.then(|upstream| Take::new(upstream, count))
    }

    /// Yield items while the predicate holds.
    ///
    /// The first item failing the predicate is consumed but not yielded.
    pub fn take_while<F>(self, predicate: F) -> AsyncIter<TakeWhile<Self, F>>
    where
        F: FnMut(&S::Item) -> bool + Send,
    {
        self.then(|upstream| TakeWhile::new(upstream, predicate, true))
    }

    /// Yield items until the predicate holds; the inverse of
    /// [`take_while`](AsyncIter::take_while)
    pub fn take_until<F>(self, predicate: F) -> AsyncIter<TakeWhile<Self, F>>
    where
        F: FnMut(&S::Item) -> bool + Send,
    {
        self.then(|upstream| TakeWhile::new(upstream, predicate, false))
    }

    /// Discard the first `count` items, then yield the rest
    pub fn skip(self, count: usize) -> AsyncIter<Skip<Self>> {
        self.then(|upstream| Skip::new(upstream, count))
    }

    /// Discard items while the predicate holds, then yield the rest.
    ///
    /// The predicate is not evaluated again after it first fails.
    pub fn skip_while<F>(self, predicate: F) -> AsyncIter<SkipWhile<Self, F>>
    where
        F: FnMut(&S::Item) -> bool + Send,
    {
        self.then(|upstream| SkipWhile::new(upstream, predicate, true))
    }

    /// Discard items until the predicate holds; the inverse of
    /// [`skip_while`](AsyncIter::skip_while)
    pub fn skip_until<F>(self, predicate: F) -> AsyncIter<SkipWhile<Self, F>>
    where
        F: FnMut(&S::Item) -> bool + Send,
    {
        self.then(|upstream| SkipWhile::new(upstream, predicate, false))
    }

    /// Yield this iterator's items, then `other`'s
    pub fn append<O>(self, other: O) -> AsyncIter<Chain<Self, AsyncIter<O::Source>>>
    where
        O: IntoSource<Item = S::Item>,
    {
        let other = AsyncIter::from_source(other.into_source());
        self.then(|upstream| Chain::new(upstream, other))
    }

    /// Yield `other`'s items, then this iterator's
    pub fn prepend<O>(self, other: O) -> AsyncIter<Chain<AsyncIter<O::Source>, Self>>
    where
        O: IntoSource<Item = S::Item>,
    {
        let other = AsyncIter::from_source(other.into_source());
        self.then(|upstream| Chain::new(other, upstream))
    }
}
