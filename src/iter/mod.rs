//! The [`AsyncIter`] wrapper.
//!
//! An `AsyncIter` owns one lazy source plus an optional cancellation
//! [`Signal`]. Chaining a transformation wraps the current iterator in a new
//! one carrying the same signal, so every layer of a pipeline re-checks
//! cancellation before pulling from the layer beneath it.

use async_trait::async_trait;

use crate::core::{BoxSource, Result, Signal, Source};

mod combine;
mod construct;
mod terminal;
mod transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    /// Upstream reported the end of the sequence
    Exhausted,
    /// Stopped early and finalized
    Finished,
    /// A pull failed; the traversal is over
    Failed,
}

/// A lazy, single-pass async iterator with cooperative cancellation.
///
/// Nothing is produced until a terminal operation ([`run`](AsyncIter::run),
/// [`collect`](AsyncIter::collect), [`reduce`](AsyncIter::reduce), ...) or a
/// consumer calling [`Source::next`] starts pulling. Once the sequence ends,
/// is finalized, or fails, every further pull yields `None`.
///
/// # Examples
///
/// ```rust
/// use asynciter::prelude::*;
///
/// # tokio_test::block_on(async {
/// let squares = AsyncIter::from_sequence(1, 1)
///     .map(|x| x * x)
///     .filter(|x| x % 2 == 1)
///     .take(3)
///     .collect()
///     .await?;
/// assert_eq!(squares, vec![1, 9, 25]);
/// # Ok::<(), asynciter::Error>(())
/// # }).unwrap();
/// ```
#[must_use = "iterators do nothing unless consumed"]
pub struct AsyncIter<S> {
    source: S,
    signal: Option<Signal>,
    state: State,
}

impl<S: Source> AsyncIter<S> {
    /// Wrap a source
    pub fn from_source(source: S) -> Self {
        Self::with_parts(source, None)
    }

    pub(crate) fn with_parts(source: S, signal: Option<Signal>) -> Self {
        Self {
            source,
            signal,
            state: State::Active,
        }
    }

    /// Attach a cancellation signal to this iterator.
    ///
    /// Iterators chained from this one inherit the signal.
    pub fn with_signal(mut self, signal: impl Into<Signal>) -> Self {
        self.signal = Some(signal.into());
        self
    }

    /// The cancellation signal this iterator observes, if any
    pub fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref()
    }

    /// Returns `true` if the attached signal has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.signal.as_ref().is_some_and(Signal::is_cancelled)
    }

    /// Derive a new iterator from this one.
    ///
    /// `f` receives this iterator and returns the source the new iterator
    /// pulls from. Every other transformation is built on `then`.
    ///
    /// ```rust
    /// use asynciter::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let numbered = AsyncIter::from_iterable(vec!["a", "b"])
    ///     .then(|letters| AsyncIter::zip(AsyncIter::from_sequence(1, 1), letters))
    ///     .collect()
    ///     .await?;
    /// assert_eq!(numbered, vec![(1, "a"), (2, "b")]);
    /// # Ok::<(), asynciter::Error>(())
    /// # }).unwrap();
    /// ```
    pub fn then<S2, F>(self, f: F) -> AsyncIter<S2>
    where
        F: FnOnce(Self) -> S2,
        S2: Source,
    {
        let signal = self.signal.clone();
        AsyncIter::with_parts(f(self), signal)
    }

    /// Erase the source type, keeping the signal
    pub fn boxed(self) -> AsyncIter<BoxSource<S::Item>>
    where
        S: 'static,
    {
        let signal = self.signal.clone();
        AsyncIter::with_parts(Box::new(self) as BoxSource<S::Item>, signal)
    }
}

#[async_trait]
impl<S: Source> Source for AsyncIter<S> {
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.state != State::Active {
            return Ok(None);
        }
        if self.is_cancelled() {
            debug_event!("cancellation observed; finalizing upstream");
            count!("asynciter_cancellations_total");
            return self.finish().await.map(|()| None);
        }

        trace_event!("pull");
        count!("asynciter_pulls_total");
        match self.source.next().await {
            Ok(Some(item)) => Ok(Some(item)),
            Ok(None) => {
                self.state = State::Exhausted;
                Ok(None)
            }
            Err(e) => {
                debug_event!(error = %e, "pull failed");
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    async fn finish(&mut self) -> Result<()> {
        if self.state != State::Active {
            return Ok(());
        }
        self.state = State::Finished;
        debug_event!("finalizing upstream");
        count!("asynciter_finalizations_total");
        self.source.finish().await
    }
}
