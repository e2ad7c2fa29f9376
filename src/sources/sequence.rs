//! An infinite arithmetic progression.

use async_trait::async_trait;

use crate::core::{Error, Result, Source};

/// A source producing `start, start + step, start + 2 * step, ...`
///
/// Values are `i64`, the widest integer every value of which is exact. A pull
/// fails with [`Error::Range`] as soon as the value after the one being
/// produced would overflow; that value is not yielded.
#[derive(Debug, Clone)]
pub struct Sequence {
    current: i64,
    step: i64,
}

impl Sequence {
    /// Create a new sequence
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            current: start,
            step,
        }
    }
}

#[async_trait]
impl Source for Sequence {
    type Item = i64;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        let value = self.current;
        let Some(next) = value.checked_add(self.step) else {
            debug_event!(value, step = self.step, "sequence overflow");
            return Err(Error::range(value, self.step));
        };
        self.current = next;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_progression() {
        let mut seq = Sequence::new(1, 2);
        assert_eq!(seq.next().await.unwrap(), Some(1));
        assert_eq!(seq.next().await.unwrap(), Some(3));
        assert_eq!(seq.next().await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_negative_and_zero_steps() {
        let mut down = Sequence::new(0, -5);
        assert_eq!(down.next().await.unwrap(), Some(0));
        assert_eq!(down.next().await.unwrap(), Some(-5));

        let mut flat = Sequence::new(7, 0);
        assert_eq!(flat.next().await.unwrap(), Some(7));
        assert_eq!(flat.next().await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn test_overflow_is_range_error() {
        let mut seq = Sequence::new(i64::MAX - 2, 1);
        assert_eq!(seq.next().await.unwrap(), Some(i64::MAX - 2));
        assert_eq!(seq.next().await.unwrap(), Some(i64::MAX - 1));

        let err = seq.next().await.unwrap_err();
        assert!(matches!(err, Error::Range { value, step: 1 } if value == i64::MAX));
    }

    #[tokio::test]
    async fn test_underflow_is_range_error() {
        let mut seq = Sequence::new(i64::MIN + 1, -1);
        assert_eq!(seq.next().await.unwrap(), Some(i64::MIN + 1));
        assert!(matches!(
            seq.next().await.unwrap_err(),
            Error::Range { .. }
        ));
    }
}
