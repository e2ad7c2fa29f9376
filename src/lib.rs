//! # Lazy, composable async iterators for Rust
//!
//! This crate provides a pull-based sequence abstraction for async code:
//! pipelines are described up front, produce nothing until consumed, and can
//! be stopped cooperatively through a cancellation signal.
//!
//! ## Core Concepts
//!
//! - **Source**: Yields items one pull at a time and can be finalized early
//! - **AsyncIter**: Wraps a source with a cancellation signal and chainable operations
//! - **Signal**: A read-only view of a [`tokio_util::sync::CancellationToken`]
//! - **Terminal**: `run`, `collect` and `reduce` drive the pipeline to completion
//!
//! ## Example
//!
//! ```rust
//! use asynciter::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let token = CancellationToken::new();
//!
//!     let total = AsyncIter::from_iterable(1..=100)
//!         .with_signal(&token)
//!         .map(|x| x * 2)
//!         .filter(|x| x % 3 == 0)
//!         .take(5)
//!         .reduce(0, |acc, x| acc + x)
//!         .await?;
//!
//!     assert_eq!(total, 6 + 12 + 18 + 24 + 30);
//!     Ok(())
//! }
//! ```

#[macro_use]
mod telemetry;

pub mod combinators;
pub mod config;
pub mod core;
pub mod iter;
pub mod sources;

#[cfg(test)]
mod test_util;

// Re-export commonly used items
pub mod prelude {
    pub use crate::config::SampleConfig;
    pub use crate::core::{Error, IntoSource, Result, Signal, Source};
    pub use crate::iter::AsyncIter;
    pub use crate::sources::{iter, Stop};
}

// Re-export main types
pub use crate::core::{Error, Result};
pub use crate::iter::AsyncIter;

// Version information
/// The crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
