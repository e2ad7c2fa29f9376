//! Filtering combinators.

use async_trait::async_trait;

use crate::core::{Result, Source};

/// Source for the [`filter`](crate::AsyncIter::filter) method.
#[must_use = "sources do nothing unless pulled"]
pub struct Filter<S, F> {
    upstream: S,
    predicate: F,
}

impl<S, F> Filter<S, F> {
    pub(crate) fn new(upstream: S, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

#[async_trait]
impl<S, F> Source for Filter<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        while let Some(item) = self.upstream.next().await? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`try_filter`](crate::AsyncIter::try_filter) method.
#[must_use = "sources do nothing unless pulled"]
pub struct TryFilter<S, F> {
    upstream: S,
    predicate: F,
}

impl<S, F> TryFilter<S, F> {
    pub(crate) fn new(upstream: S, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

#[async_trait]
impl<S, F> Source for TryFilter<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> Result<bool> + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        while let Some(item) = self.upstream.next().await? {
            if (self.predicate)(&item)? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}
