//! Constructors for [`AsyncIter`].

use futures_core::Stream;
use std::future::Future;

use super::AsyncIter;
use crate::config::SampleConfig;
use crate::core::{Error, IntoSource, Result, Source};
use crate::sources::{
    AsyncFnSource, FnSource, IterSource, Lazy, Sample, Sequence, Stop, StreamSource,
    TryStreamSource,
};

impl<I> AsyncIter<IterSource<I>>
where
    I: Iterator + Send,
    I::Item: Send + 'static,
{
    /// Create an iterator over the items of a synchronous iterable
    pub fn from_iterable<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::from_source(IterSource::new(items))
    }
}

impl<St> AsyncIter<StreamSource<St>>
where
    St: Stream + Send,
    St::Item: Send + 'static,
{
    /// Create an iterator over the items of an async stream
    pub fn from_stream(stream: St) -> Self {
        Self::from_source(StreamSource::new(stream))
    }
}

impl<St, T, E> AsyncIter<TryStreamSource<St>>
where
    St: Stream<Item = std::result::Result<T, E>> + Send,
    T: Send + 'static,
    E: Into<Error>,
{
    /// Create an iterator over a fallible async stream.
    ///
    /// The first `Err` the stream yields fails the traversal.
    pub fn from_try_stream(stream: St) -> Self {
        Self::from_source(TryStreamSource::new(stream))
    }
}

impl<F, I> AsyncIter<Lazy<F, I>>
where
    F: FnOnce() -> I + Send,
    I: IntoSource,
{
    /// Create an iterator from a routine that builds the source.
    ///
    /// The routine runs once, on the first pull. It may return any
    /// [`IntoSource`], including a plain `Vec`.
    pub fn from_generator_fn(f: F) -> Self {
        Self::from_source(Lazy::new(f))
    }
}

impl<F, T> AsyncIter<FnSource<F>>
where
    F: FnMut(&Stop) -> Result<T> + Send,
    T: Send + 'static,
{
    /// Create an iterator from a stepping function.
    ///
    /// The function is called once per item. Calling [`Stop::stop`] during a
    /// call discards that call's value and ends the sequence.
    ///
    /// ```rust
    /// use asynciter::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let mut remaining = vec![3, 2, 1];
    /// let drained = AsyncIter::from_fn(move |stop| {
    ///     let value = remaining.pop();
    ///     if value.is_none() {
    ///         stop.stop();
    ///     }
    ///     Ok(value.unwrap_or_default())
    /// })
    /// .collect()
    /// .await?;
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// # Ok::<(), asynciter::Error>(())
    /// # }).unwrap();
    /// ```
    pub fn from_fn(f: F) -> Self {
        Self::from_source(FnSource::new(f))
    }
}

impl<F, Fut, T> AsyncIter<AsyncFnSource<F>>
where
    F: FnMut(Stop) -> Fut + Send,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    /// Create an iterator from an async stepping function
    pub fn from_async_fn(f: F) -> Self {
        Self::from_source(AsyncFnSource::new(f))
    }
}

impl<S> AsyncIter<Sample<AsyncIter<S>>>
where
    S: Source,
    S::Item: Clone,
{
    /// Create an iterator that yields `sample`, then repeats it forever.
    ///
    /// Items are buffered as they are pulled, so `sample` must be finite and
    /// no longer than [`SampleConfig::max_sample_size`]; a longer sample
    /// fails with [`Error::Capacity`] when the first excess item arrives.
    pub fn from_sample<I>(sample: I, config: SampleConfig) -> Self
    where
        I: IntoSource<Source = S>,
    {
        let upstream = AsyncIter::from_source(sample.into_source());
        Self::from_source(Sample::new(upstream, config.max_sample_size))
    }
}

impl AsyncIter<Sequence> {
    /// Create an infinite arithmetic progression `start, start + step, ...`
    ///
    /// Fails with [`Error::Range`] instead of overflowing `i64`.
    pub fn from_sequence(start: i64, step: i64) -> Self {
        Self::from_source(Sequence::new(start, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::iter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_from_iterable_round_trip() {
        let results = AsyncIter::from_iterable(vec![1, 2, 3]).collect().await.unwrap();
        assert_eq!(results, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_from_stream() {
        let results = AsyncIter::from_stream(tokio_stream::iter(vec![1, 2]))
            .collect()
            .await
            .unwrap();
        assert_eq!(results, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_from_try_stream_error() {
        let stream = tokio_stream::iter(vec![Ok(1), Err(Error::custom("read failed")), Ok(3)]);
        let err = AsyncIter::from_try_stream(stream).collect().await.unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }

    #[tokio::test]
    async fn test_from_generator_fn_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let it = AsyncIter::from_generator_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            iter(vec!["x", "y"])
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(it.collect().await.unwrap(), vec!["x", "y"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_from_fn() {
        let mut i = 0;
        let results = AsyncIter::from_fn(move |stop| {
            i += 1;
            if i > 2 {
                stop.stop();
            }
            Ok(i)
        })
        .collect()
        .await
        .unwrap();
        assert_eq!(results, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_from_async_fn() {
        let mut i = 0;
        let results = AsyncIter::from_async_fn(move |stop| {
            i += 1;
            let current = i;
            async move {
                if current > 2 {
                    stop.stop();
                }
                Ok(current)
            }
        })
        .collect()
        .await
        .unwrap();
        assert_eq!(results, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_from_fn_error() {
        let err = AsyncIter::from_fn(|_| -> Result<i32> { Err(Error::custom("test error")) })
            .collect()
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "test error");
    }

    #[tokio::test]
    async fn test_from_sample_repeats() {
        let results = AsyncIter::from_sample(iter(vec![1, 2]), SampleConfig::default())
            .take(4)
            .collect()
            .await
            .unwrap();
        assert_eq!(results, vec![1, 2, 1, 2]);
    }

    #[tokio::test]
    async fn test_from_sample_empty() {
        let results = AsyncIter::from_sample(iter(Vec::<i32>::new()), SampleConfig::default())
            .take(3)
            .collect()
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_from_sample_over_capacity() {
        let config = SampleConfig::new().max_sample_size(3);
        let err = AsyncIter::from_sample(iter(1..=4), config)
            .collect()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Capacity { max: 3 }));
    }

    #[tokio::test]
    async fn test_from_sequence() {
        let results = AsyncIter::from_sequence(1, 2).take(3).collect().await.unwrap();
        assert_eq!(results, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn test_from_sequence_range_error_is_lazy() {
        let near_max = AsyncIter::from_sequence(i64::MAX - 2, 1);
        let ok = near_max.take(2).collect().await.unwrap();
        assert_eq!(ok, vec![i64::MAX - 2, i64::MAX - 1]);

        let err = AsyncIter::from_sequence(i64::MAX - 2, 1)
            .take(3)
            .collect()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Range { .. }));
    }
}
