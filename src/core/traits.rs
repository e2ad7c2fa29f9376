//! Core traits for async iterator pipelines.
//!
//! This module defines the pull-based abstraction every stage of a pipeline
//! is built on: a source hands out one item per request and exposes a hook
//! for releasing its resources when a traversal stops early.

use crate::core::error::Result;
use async_trait::async_trait;

/// A source produces items one at a time, on demand.
///
/// Sources are pull-based - nothing is produced until a downstream stage asks
/// for the next item, and only one request is ever in flight.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use asynciter::core::{Result, Source};
///
/// struct CounterSource {
///     current: u64,
///     max: u64,
/// }
///
/// #[async_trait]
/// impl Source for CounterSource {
///     type Item = u64;
///
///     async fn next(&mut self) -> Result<Option<Self::Item>> {
///         if self.current <= self.max {
///             let item = self.current;
///             self.current += 1;
///             Ok(Some(item))
///         } else {
///             Ok(None) // Signal completion
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Source: Send {
    /// The type of items this source generates
    type Item: Send + 'static;

    /// Pull the next item, or `None` once the source is exhausted.
    async fn next(&mut self) -> Result<Option<Self::Item>>;

    /// Called when a traversal stops before this source is exhausted.
    ///
    /// This allows sources to release handles, timers or any other state
    /// tied to the abandoned traversal. Sources must not be pulled after
    /// `finish` has been called.
    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A type-erased source.
pub type BoxSource<T> = Box<dyn Source<Item = T>>;

#[async_trait]
impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        (**self).next().await
    }

    async fn finish(&mut self) -> Result<()> {
        (**self).finish().await
    }
}

/// Conversion into a [`Source`].
///
/// Every source converts into itself. Owned collections and ranges convert
/// into an [`IterSource`](crate::sources::IterSource), so they can be passed
/// to [`AsyncIter::zip`](crate::AsyncIter::zip),
/// [`append`](crate::AsyncIter::append) and friends without wrapping them in
/// [`iter`](crate::sources::iter) first.
pub trait IntoSource {
    /// The item type of the resulting source
    type Item: Send + 'static;
    /// The source this converts into
    type Source: Source<Item = Self::Item>;

    fn into_source(self) -> Self::Source;
}

impl<S: Source> IntoSource for S {
    type Item = S::Item;
    type Source = S;

    fn into_source(self) -> S {
        self
    }
}
