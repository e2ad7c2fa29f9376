//! A source that records a finite sample and replays it forever.

use async_trait::async_trait;

use crate::core::{Error, Result, Source};

/// A source that yields a sampled source's items while buffering them, then
/// cycles through the buffer indefinitely once the sample is exhausted.
///
/// The sampled source must be finite: if it yields more than `max` items the
/// next pull fails with [`Error::Capacity`]. Items produced before that point
/// have already been handed downstream.
pub struct Sample<S: Source> {
    upstream: S,
    buffer: Vec<S::Item>,
    max: usize,
    // Position in the buffer once the upstream is exhausted
    replay: Option<usize>,
}

impl<S: Source> Sample<S> {
    /// Create a new sample with room for at most `max` items
    pub fn new(upstream: S, max: usize) -> Self {
        Self {
            upstream,
            buffer: Vec::new(),
            max,
            replay: None,
        }
    }
}

#[async_trait]
impl<S> Source for Sample<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = S::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.replay.is_none() {
            match self.upstream.next().await? {
                Some(item) => {
                    if self.buffer.len() >= self.max {
                        debug_event!(max = self.max, "sample exceeded its buffer");
                        return Err(Error::capacity(self.max));
                    }
                    self.buffer.push(item.clone());
                    return Ok(Some(item));
                }
                None => {
                    trace_event!(len = self.buffer.len(), "sample recorded; replaying");
                    self.replay = Some(0);
                }
            }
        }

        // An empty sample has nothing to replay
        if self.buffer.is_empty() {
            return Ok(None);
        }
        let position = self.replay.unwrap_or(0);
        let item = self.buffer[position].clone();
        self.replay = Some((position + 1) % self.buffer.len());
        Ok(Some(item))
    }

    async fn finish(&mut self) -> Result<()> {
        if self.replay.is_none() {
            self.upstream.finish().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::iter;

    #[tokio::test]
    async fn test_replays_in_order() {
        let mut sample = Sample::new(iter(vec![1, 2, 3]), 1000);
        let mut results = Vec::new();
        for _ in 0..8 {
            results.push(sample.next().await.unwrap().unwrap());
        }
        assert_eq!(results, vec![1, 2, 3, 1, 2, 3, 1, 2]);
    }

    #[tokio::test]
    async fn test_sample_exactly_at_capacity() {
        let mut sample = Sample::new(iter(vec![1, 2]), 2);
        let mut results = Vec::new();
        for _ in 0..4 {
            results.push(sample.next().await.unwrap().unwrap());
        }
        assert_eq!(results, vec![1, 2, 1, 2]);
    }

    #[tokio::test]
    async fn test_capacity_error_surfaces_lazily() {
        let mut sample = Sample::new(iter(1..), 2);
        assert_eq!(sample.next().await.unwrap(), Some(1));
        assert_eq!(sample.next().await.unwrap(), Some(2));

        let err = sample.next().await.unwrap_err();
        assert!(matches!(err, Error::Capacity { max: 2 }));
    }

    #[tokio::test]
    async fn test_empty_sample_ends() {
        let mut sample = Sample::new(iter(Vec::<i32>::new()), 10);
        assert_eq!(sample.next().await.unwrap(), None);
        assert_eq!(sample.next().await.unwrap(), None);
    }
}
