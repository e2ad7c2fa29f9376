//! Chain combinator.
//!
//! The `Chain` combinator yields all items from the first source, then all
//! items from the second source.

use async_trait::async_trait;

use crate::core::{Result, Source};

/// A source that yields items from the first source then the second.
///
/// Backs [`append`](crate::AsyncIter::append),
/// [`prepend`](crate::AsyncIter::prepend) and
/// [`join`](crate::AsyncIter::join).
#[must_use = "sources do nothing unless pulled"]
pub struct Chain<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_done: false,
        }
    }
}

#[async_trait]
impl<A, B> Source for Chain<A, B>
where
    A: Source,
    B: Source<Item = A::Item>,
{
    type Item = A::Item;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if !self.first_done {
            match self.first.next().await? {
                Some(item) => return Ok(Some(item)),
                None => {
                    // First source exhausted, switch to second
                    self.first_done = true;
                }
            }
        }
        self.second.next().await
    }

    async fn finish(&mut self) -> Result<()> {
        if !self.first_done {
            self.first_done = true;
            self.first.finish().await?;
        }
        self.second.finish().await
    }
}
