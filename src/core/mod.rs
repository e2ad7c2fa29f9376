//! Core traits and types for the asynciter library.
//!
//! This module contains the fundamental traits, the cancellation signal and
//! the error types that define the asynciter processing model.

pub mod error;
pub mod signal;
pub mod traits;

// Re-export core items
pub use error::{Error, IntoError, Result};
pub use signal::Signal;
pub use traits::{BoxSource, IntoSource, Source};
