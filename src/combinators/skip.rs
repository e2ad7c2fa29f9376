//! Skip combinators.

use async_trait::async_trait;

use crate::core::{Result, Source};

/// Source for the [`skip`](crate::AsyncIter::skip) method.
#[must_use = "sources do nothing unless pulled"]
pub struct Skip<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(upstream: S, remaining: usize) -> Self {
        Self {
            upstream,
            remaining,
        }
    }
}

#[async_trait]
impl<S: Source> Source for Skip<S> {
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        while self.remaining > 0 {
            if self.upstream.next().await?.is_none() {
                self.remaining = 0;
                return Ok(None);
            }
            self.remaining -= 1;
        }
        self.upstream.next().await
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`skip_while`](crate::AsyncIter::skip_while) and
/// [`skip_until`](crate::AsyncIter::skip_until) methods.
#[must_use = "sources do nothing unless pulled"]
pub struct SkipWhile<S, F> {
    upstream: S,
    predicate: F,
    // Items are skipped while the predicate returns this value
    expected: bool,
    skipping: bool,
}

impl<S, F> SkipWhile<S, F> {
    pub(crate) fn new(upstream: S, predicate: F, expected: bool) -> Self {
        Self {
            upstream,
            predicate,
            expected,
            skipping: true,
        }
    }
}

#[async_trait]
impl<S, F> Source for SkipWhile<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if !self.skipping {
            return self.upstream.next().await;
        }

        while let Some(item) = self.upstream.next().await? {
            if (self.predicate)(&item) != self.expected {
                self.skipping = false;
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}
