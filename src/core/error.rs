//! Error types for async iterator pipelines.

use std::sync::Arc;

/// The main error type for async iterator pipelines.
///
/// Errors are never retried or swallowed by the crate: whichever pull raised
/// one aborts its traversal and the error surfaces from the terminal
/// operation that was driving it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A sampled source yielded more elements than the sample buffer can hold
    #[error("Sample size exceeds maximum buffer size of {max}")]
    Capacity { max: usize },

    /// Advancing a numeric sequence would leave the representable integer range
    #[error("Sequence value exceeded safe integer bounds: {value} + {step}")]
    Range { value: i64, step: i64 },

    /// An external source or caller-supplied function failed
    #[error("External error: {0}")]
    External(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// A custom error with a message
    #[error("{0}")]
    Custom(String),
}

// Convenience constructors
impl Error {
    /// Create an external error from any error type
    pub fn external<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Error::External(Arc::new(error))
    }

    /// Create a capacity error
    pub fn capacity(max: usize) -> Self {
        Error::Capacity { max }
    }

    /// Create a range error
    pub fn range(value: i64, step: i64) -> Self {
        Error::Range { value, step }
    }

    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(message: S) -> Self {
        Error::Custom(message.into())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::External(Arc::from(e))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Custom(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Helper trait for converting foreign errors into our Error type
pub trait IntoError<T> {
    fn into_external_error(self) -> Result<T>;
}

impl<T, E> IntoError<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_external_error(self) -> Result<T> {
        self.map_err(Error::external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::capacity(2).to_string(),
            "Sample size exceeds maximum buffer size of 2"
        );
        assert_eq!(
            Error::range(i64::MAX, 1).to_string(),
            format!("Sequence value exceeded safe integer bounds: {} + 1", i64::MAX)
        );
        assert_eq!(Error::from("boom").to_string(), "boom");
    }

    #[test]
    fn test_external_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: Result<()> = Err(io).into_external_error();
        let err = err.unwrap_err();

        assert!(matches!(err, Error::External(_)));
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }
}
