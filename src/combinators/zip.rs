//! Zip and interleave combinators.

use async_trait::async_trait;

use crate::core::{Result, Source};

/// A source pairing up the items of two sources.
///
/// Each pull takes one item from `a`, then one from `b`. The shorter source
/// determines the length; when one side runs out the other is finalized.
#[must_use = "sources do nothing unless pulled"]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

#[async_trait]
impl<A, B> Source for Zip<A, B>
where
    A: Source,
    B: Source,
{
    type Item = (A::Item, B::Item);

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.done {
            return Ok(None);
        }

        let Some(a) = self.a.next().await? else {
            self.done = true;
            self.b.finish().await?;
            return Ok(None);
        };
        let Some(b) = self.b.next().await? else {
            self.done = true;
            self.a.finish().await?;
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    async fn finish(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }
        self.done = true;
        self.a.finish().await?;
        self.b.finish().await
    }
}

/// A source flattening zipped pairs into `a0, b0, a1, b1, ...`
///
/// Backs [`interleave`](crate::AsyncIter::interleave).
#[must_use = "sources do nothing unless pulled"]
pub struct Interleave<S, T> {
    upstream: S,
    pending: Option<T>,
}

impl<S, T> Interleave<S, T> {
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream,
            pending: None,
        }
    }
}

#[async_trait]
impl<S, T> Source for Interleave<S, T>
where
    S: Source<Item = (T, T)>,
    T: Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        match self.upstream.next().await? {
            Some((a, b)) => {
                self.pending = Some(b);
                Ok(Some(a))
            }
            None => Ok(None),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        self.pending = None;
        self.upstream.finish().await
    }
}
