//! Sources driven by a stepping function.

use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{Result, Source};

/// Handle a stepping function uses to end its sequence.
///
/// Calling [`Stop::stop`] during a call discards that call's return value and
/// ends the traversal; the function is not called again.
#[derive(Debug, Clone, Default)]
pub struct Stop {
    stopped: Arc<AtomicBool>,
}

impl Stop {
    /// Request the end of the sequence
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Check whether the end of the sequence has been requested
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// A source created from a synchronous stepping function
pub struct FnSource<F> {
    f: F,
    stop: Stop,
}

impl<F, T> FnSource<F>
where
    F: FnMut(&Stop) -> Result<T>,
{
    /// Create a new stepping function source
    pub fn new(f: F) -> Self {
        Self {
            f,
            stop: Stop::default(),
        }
    }
}

#[async_trait]
impl<F, T> Source for FnSource<F>
where
    F: FnMut(&Stop) -> Result<T> + Send,
    T: Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.stop.is_stopped() {
            return Ok(None);
        }
        let value = (self.f)(&self.stop)?;
        if self.stop.is_stopped() {
            debug_event!("stepping function requested stop");
            return Ok(None);
        }
        Ok(Some(value))
    }

    async fn finish(&mut self) -> Result<()> {
        self.stop.stop();
        Ok(())
    }
}

/// A source created from an asynchronous stepping function
pub struct AsyncFnSource<F> {
    f: F,
    stop: Stop,
}

impl<F, Fut, T> AsyncFnSource<F>
where
    F: FnMut(Stop) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    /// Create a new async stepping function source
    pub fn new(f: F) -> Self {
        Self {
            f,
            stop: Stop::default(),
        }
    }
}

#[async_trait]
impl<F, Fut, T> Source for AsyncFnSource<F>
where
    F: FnMut(Stop) -> Fut + Send,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if self.stop.is_stopped() {
            return Ok(None);
        }
        let value = (self.f)(self.stop.clone()).await?;
        if self.stop.is_stopped() {
            debug_event!("async stepping function requested stop");
            return Ok(None);
        }
        Ok(Some(value))
    }

    async fn finish(&mut self) -> Result<()> {
        self.stop.stop();
        Ok(())
    }
}
