//! Internal logging and metrics hooks.
//!
//! Both compile to nothing unless the `tracing` / `metrics` features are on.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! count {
    ($name:expr) => {
        #[cfg(feature = "metrics")]
        ::metrics::counter!($name).increment(1);
    };
}
