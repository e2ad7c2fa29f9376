//! Per-item transformation combinators.

use async_trait::async_trait;
use std::future::Future;

use crate::core::{Result, Source};

/// Source for the [`map`](crate::AsyncIter::map) method.
#[must_use = "sources do nothing unless pulled"]
pub struct Map<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

#[async_trait]
impl<S, F, U> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U + Send,
    U: Send + 'static,
{
    type Item = U;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        Ok(self.upstream.next().await?.map(&mut self.f))
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`try_map`](crate::AsyncIter::try_map) method.
#[must_use = "sources do nothing unless pulled"]
pub struct TryMap<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> TryMap<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

#[async_trait]
impl<S, F, U> Source for TryMap<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> Result<U> + Send,
    U: Send + 'static,
{
    type Item = U;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        self.upstream.next().await?.map(&mut self.f).transpose()
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`and_then`](crate::AsyncIter::and_then) method.
#[must_use = "sources do nothing unless pulled"]
pub struct AndThen<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> AndThen<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

#[async_trait]
impl<S, F, Fut, U> Source for AndThen<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> Fut + Send,
    Fut: Future<Output = Result<U>> + Send + 'static,
    U: Send + 'static,
{
    type Item = U;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        match self.upstream.next().await? {
            Some(item) => (self.f)(item).await.map(Some),
            None => Ok(None),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`inspect`](crate::AsyncIter::inspect) method.
#[must_use = "sources do nothing unless pulled"]
pub struct Inspect<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

#[async_trait]
impl<S, F> Source for Inspect<S, F>
where
    S: Source,
    F: FnMut(&S::Item) + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        let item = self.upstream.next().await?;
        if let Some(item) = &item {
            (self.f)(item);
        }
        Ok(item)
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}

/// Source for the [`try_inspect`](crate::AsyncIter::try_inspect) method.
#[must_use = "sources do nothing unless pulled"]
pub struct TryInspect<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> TryInspect<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

#[async_trait]
impl<S, F> Source for TryInspect<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> Result<()> + Send,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        let item = self.upstream.next().await?;
        if let Some(item) = &item {
            (self.f)(item)?;
        }
        Ok(item)
    }

    async fn finish(&mut self) -> Result<()> {
        self.upstream.finish().await
    }
}
