//! Terminal operations: the only place production happens.
//!
//! Every terminal returns its "nothing yielded" result immediately, without
//! pulling, if the signal is already cancelled. An item that arrives after
//! the signal is cancelled mid-traversal is discarded and the upstream is
//! finalized.

use futures_core::Stream;
use std::ops::ControlFlow;

use super::AsyncIter;
use crate::core::{Error, Result, Source};

impl<S: Source> AsyncIter<S> {
    /// Pull the next item, unless the signal was cancelled while it was being
    /// produced.
    async fn pull(&mut self) -> Result<Option<S::Item>> {
        let item = self.next().await?;
        if item.is_some() && self.is_cancelled() {
            debug_event!("cancelled while pulling; discarding item");
            self.finish().await?;
            return Ok(None);
        }
        Ok(item)
    }

    /// Drive the iterator to completion, discarding every item
    pub async fn run(mut self) -> Result<()> {
        if self.is_cancelled() {
            return Ok(());
        }
        while self.pull().await?.is_some() {}
        Ok(())
    }

    /// Drive the iterator to completion, collecting items in order
    pub async fn collect(mut self) -> Result<Vec<S::Item>> {
        let mut items = Vec::new();
        if self.is_cancelled() {
            return Ok(items);
        }
        while let Some(item) = self.pull().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Fold every item into an accumulator, left to right
    pub async fn reduce<V, F>(mut self, initial: V, mut f: F) -> Result<V>
    where
        F: FnMut(V, S::Item) -> V,
    {
        let mut acc = initial;
        if self.is_cancelled() {
            return Ok(acc);
        }
        while let Some(item) = self.pull().await? {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// Hand each item to `f` until it breaks or the iterator ends.
    ///
    /// Breaking finalizes the upstream before returning.
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use asynciter::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let mut seen = Vec::new();
    /// AsyncIter::from_sequence(0, 1)
    ///     .run_with(|x| {
    ///         if x == 3 {
    ///             return ControlFlow::Break(());
    ///         }
    ///         seen.push(x);
    ///         ControlFlow::Continue(())
    ///     })
    ///     .await?;
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// # Ok::<(), asynciter::Error>(())
    /// # }).unwrap();
    /// ```
    pub async fn run_with<F>(mut self, mut f: F) -> Result<()>
    where
        F: FnMut(S::Item) -> ControlFlow<()>,
    {
        if self.is_cancelled() {
            return Ok(());
        }
        while let Some(item) = self.pull().await? {
            if f(item).is_break() {
                debug_event!("consumer stopped early");
                return self.finish().await;
            }
        }
        Ok(())
    }

    /// Convert into a [`Stream`] of results.
    ///
    /// The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<S::Item>> + Send {
        futures::stream::try_unfold(self, |mut iter| async move {
            Ok::<_, Error>(iter.pull().await?.map(|item| (item, iter)))
        })
    }
}
