use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::errors::FilterError;

/// Arithmetic needed to average and blend measurements.
pub trait BasicArithmetic:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
}

/// Untimed sample from an IMU (Inertial Measurement Unit).
pub trait IMUUntimedSample: Send + Sync + Clone + Default + Debug + 'static {
    ///  Returns the measurement
    fn get_measurement(&self) -> Self;
}

/// Timed sample from an IMU (Inertial Measurement Unit).
pub trait IMUSample: Send + Sync + Clone + Default + Debug + 'static {
    type Untimed: IMUUntimedSample;

    ///  Returns the timestamp of the sample in seconds.
    fn get_timestamp_secs(&self) -> f64;
    ///  Returns the measurement data
    fn get_measurement(&self) -> Self::Untimed;
    /// Builds a sample from a timestamp and a measurement
    fn from_measurement(timestamp: f64, measurement: Self::Untimed) -> Self;
}

/// Filtering for IMU (Inertial Measurement Unit) samples.
///
/// Filters are reset at the start of every batch, so filtering the same batch twice
/// yields the same output.
pub trait IMUFilter<U: IMUSample> {
    /// Returns the filtered samples
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError>;
}
