//! Module errors

use std::path::PathBuf;

use imu_common::FilterError;
use thiserror::Error;

/// Represents the different types of errors that can occur while reading and preparing a recording.
#[derive(Debug, Error)]
pub enum RecordingError {
    /// Input file does not exist.
    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading the file failed (I/O, encoding).
    #[error("Failed to read recording: {0}")]
    Csv(#[from] csv::Error),

    /// A data row can't be turned into a sample.
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// Timestamps must be strictly increasing.
    #[error("Timestamp {current} at line {line} is not after previous timestamp {previous}")]
    NonMonotonicTimestamp {
        line: u64,
        previous: f64,
        current: f64,
    },

    /// File holds a header but no data.
    #[error("No samples found in {}", .0.display())]
    Empty(PathBuf),

    /// Column mapping doesn't describe timestamp, x, y and z.
    #[error("Invalid column mapping: {0}")]
    InvalidColumnMapping(String),

    /// Calibration window with `start >= end` or non finite bounds.
    #[error("Invalid static window [{start}, {end}]")]
    InvalidStaticWindow { start: f64, end: f64 },

    /// None of the calibration windows covers a recorded sample.
    #[error("No samples inside the {0} static window(s), can't estimate sensor bias")]
    NoStaticSamples(usize),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
