//! Module errors

use thiserror::Error;

/// Errors raised while configuring or running a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Filter was called with an empty batch.
    #[error("No samples to filter")]
    NoSamples,

    /// Windowed filter received fewer samples than its window.
    #[error("Not enough samples to filter: window needs {required}, got {available}")]
    NotEnoughSamples { required: usize, available: usize },

    /// Filter parameters out of range.
    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),

    /// Time-aware filter found a timestamp that does not move forward.
    #[error("Timestamp at index {index} ({current}) is not after the previous one ({previous})")]
    NonIncreasingTimestamp {
        index: usize,
        previous: f64,
        current: f64,
    },
}
