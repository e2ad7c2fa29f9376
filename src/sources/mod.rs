//! Source implementations for the asynciter library.
//!
//! This module provides the leaf sources that pipelines are built on:
//! adapters for synchronous iterators and async streams, lazily constructed
//! sources, stepping functions, samples and numeric sequences.

use async_trait::async_trait;
use futures::StreamExt;
use futures_core::Stream;
use std::pin::Pin;

use crate::core::{Error, IntoSource, Result, Source};

mod func;
mod sample;
mod sequence;

pub use func::{AsyncFnSource, FnSource, Stop};
pub use sample::Sample;
pub use sequence::Sequence;

/// Create a source that yields the items of a synchronous iterator
pub fn iter<I>(items: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
{
    IterSource::new(items)
}

/// A source that yields items from a synchronous iterator
pub struct IterSource<I> {
    iter: Option<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Create a new iterator source
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: Some(items.into_iter()),
        }
    }
}

#[async_trait]
impl<I> Source for IterSource<I>
where
    I: Iterator + Send,
    I::Item: Send + 'static,
{
    type Item = I::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        Ok(self.iter.as_mut().and_then(Iterator::next))
    }

    async fn finish(&mut self) -> Result<()> {
        self.iter = None;
        Ok(())
    }
}

/// A source that yields the items of an async stream
pub struct StreamSource<St> {
    stream: Option<Pin<Box<St>>>,
}

impl<St: Stream> StreamSource<St> {
    /// Create a new stream source
    pub fn new(stream: St) -> Self {
        Self {
            stream: Some(Box::pin(stream)),
        }
    }
}

#[async_trait]
impl<St> Source for StreamSource<St>
where
    St: Stream + Send,
    St::Item: Send + 'static,
{
    type Item = St::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        match self.stream.as_mut() {
            Some(stream) => Ok(stream.next().await),
            None => Ok(None),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        // Dropping the stream releases whatever it holds
        self.stream = None;
        Ok(())
    }
}

/// A source that yields the items of a fallible async stream
pub struct TryStreamSource<St> {
    stream: Option<Pin<Box<St>>>,
}

impl<St: Stream> TryStreamSource<St> {
    /// Create a new fallible stream source
    pub fn new(stream: St) -> Self {
        Self {
            stream: Some(Box::pin(stream)),
        }
    }
}

#[async_trait]
impl<St, T, E> Source for TryStreamSource<St>
where
    St: Stream<Item = std::result::Result<T, E>> + Send,
    T: Send + 'static,
    E: Into<Error>,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(None);
        };
        match stream.next().await {
            Some(item) => item.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        self.stream = None;
        Ok(())
    }
}

/// A source whose underlying source is built on first pull
pub struct Lazy<F, I: IntoSource> {
    init: Option<F>,
    source: Option<I::Source>,
}

impl<F, I> Lazy<F, I>
where
    F: FnOnce() -> I,
    I: IntoSource,
{
    /// Create a lazily initialized source
    pub fn new(init: F) -> Self {
        Self {
            init: Some(init),
            source: None,
        }
    }
}

#[async_trait]
impl<F, I> Source for Lazy<F, I>
where
    F: FnOnce() -> I + Send,
    I: IntoSource,
{
    type Item = I::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if let Some(init) = self.init.take() {
            self.source = Some(init().into_source());
        }
        match self.source.as_mut() {
            Some(source) => source.next().await,
            None => Ok(None),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        // Never started: there is nothing to release
        self.init = None;
        match self.source.as_mut() {
            Some(source) => source.finish().await,
            None => Ok(()),
        }
    }
}

impl<T: Send + 'static> IntoSource for Vec<T> {
    type Item = T;
    type Source = IterSource<std::vec::IntoIter<T>>;

    fn into_source(self) -> Self::Source {
        iter(self)
    }
}

impl<T: Send + 'static, const N: usize> IntoSource for [T; N] {
    type Item = T;
    type Source = IterSource<std::array::IntoIter<T, N>>;

    fn into_source(self) -> Self::Source {
        iter(self)
    }
}

impl<T> IntoSource for std::ops::Range<T>
where
    std::ops::Range<T>: Iterator<Item = T> + Send,
    T: Send + 'static,
{
    type Item = T;
    type Source = IterSource<std::ops::Range<T>>;

    fn into_source(self) -> Self::Source {
        iter(self)
    }
}

impl<T> IntoSource for std::ops::RangeInclusive<T>
where
    std::ops::RangeInclusive<T>: Iterator<Item = T> + Send,
    T: Send + 'static,
{
    type Item = T;
    type Source = IterSource<std::ops::RangeInclusive<T>>;

    fn into_source(self) -> Self::Source {
        iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_iter_source() {
        let mut source = iter(vec![1, 2]);
        assert_eq!(source.next().await.unwrap(), Some(1));
        assert_eq!(source.next().await.unwrap(), Some(2));
        assert_eq!(source.next().await.unwrap(), None);
        assert_eq!(source.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_iter_source_finish_drops_iterator() {
        let mut source = iter(1..10);
        assert_eq!(source.next().await.unwrap(), Some(1));
        source.finish().await.unwrap();
        assert_eq!(source.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stream_source() {
        let mut source = StreamSource::new(tokio_stream::iter(vec!["a", "b"]));
        assert_eq!(source.next().await.unwrap(), Some("a"));
        assert_eq!(source.next().await.unwrap(), Some("b"));
        assert_eq!(source.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_try_stream_source_propagates_error() {
        let items: Vec<Result<i32>> = vec![Ok(1), Err(Error::custom("bad read"))];
        let mut source = TryStreamSource::new(tokio_stream::iter(items));

        assert_eq!(source.next().await.unwrap(), Some(1));
        let err = source.next().await.unwrap_err();
        assert!(matches!(err, Error::Custom(ref msg) if msg == "bad read"));
    }

    #[tokio::test]
    async fn test_lazy_invokes_routine_once_on_first_pull() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut source = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            iter(vec![1, 2])
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(source.next().await.unwrap(), Some(1));
        assert_eq!(source.next().await.unwrap(), Some(2));
        assert_eq!(source.next().await.unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_lazy_finish_before_start_skips_routine() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut source = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            iter(vec![1])
        });

        source.finish().await.unwrap();
        assert_eq!(source.next().await.unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
