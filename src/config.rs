//! Configuration for sampling sources.

/// Default upper bound on how many elements a sample may buffer.
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 1000;

/// Configuration for [`AsyncIter::from_sample`](crate::AsyncIter::from_sample).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleConfig {
    /// Maximum number of elements buffered before the sampled source is
    /// exhausted; one more yields [`Error::Capacity`](crate::Error::Capacity)
    pub max_sample_size: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
        }
    }
}

impl SampleConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum sample size
    pub fn max_sample_size(mut self, size: usize) -> Self {
        self.max_sample_size = size;
        self
    }
}
