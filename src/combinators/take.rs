//! Take combinators.
//!
//! Both combinators stop pulling as soon as they know no further item will
//! be yielded, and finalize their upstream at that point.

use async_trait::async_trait;

use crate::core::{Result, Source};

/// Source for the [`take`](crate::AsyncIter::take) method.
#[must_use = "sources do nothing unless pulled"]
pub struct Take<S> {
    upstream: S,
    remaining: usize,
    done: bool,
}

impl<S> Take<S> {
    pub(crate) fn new(upstream: S, remaining: usize) -> Self {
        Self {
            upstream,
            remaining,
            done: false,
        }
    }
}

#[async_trait]
impl<S: Source> Source for Take<S> {
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.done {
            return Ok(None);
        }
        if self.remaining == 0 {
            trace_event!("take limit reached");
            self.done = true;
            self.upstream.finish().await?;
            return Ok(None);
        }

        match self.upstream.next().await? {
            Some(item) => {
                self.remaining -= 1;
                Ok(Some(item))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }

    async fn finish(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }
        self.done = true;
        self.upstream.finish().await
    }
}

/// Source for the [`take_while`](crate::AsyncIter::take_while) and
/// [`take_until`](crate::AsyncIter::take_until) methods.
#[must_use = "sources do nothing unless pulled"]
pub struct TakeWhile<S, F> {
    upstream: S,
    predicate: F,
    // Items are taken while the predicate returns this value
    expected: bool,
    done: bool,
}

impl<S, F> TakeWhile<S, F> {
    pub(crate) fn new(upstream: S, predicate: F, expected: bool) -> Self {
        Self {
            upstream,
            predicate,
            expected,
            done: false,
        }
    }
}

#[async_trait]
impl<S, F> Source for TakeWhile<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.done {
            return Ok(None);
        }

        match self.upstream.next().await? {
            Some(item) if (self.predicate)(&item) == self.expected => Ok(Some(item)),
            Some(_) => {
                trace_event!("take_while predicate ended the sequence");
                self.done = true;
                self.upstream.finish().await?;
                Ok(None)
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }

    async fn finish(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }
        self.done = true;
        self.upstream.finish().await
    }
}
