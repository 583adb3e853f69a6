use crate::constants::N_XYZ_COORDINATES;
use crate::traits::IMUSample;
use crate::types::untimed::XYZ;

/// A structure representing a 3D sample with a timestamp and measurement.
///
/// # Examples
///
/// ```
/// use imu_common::types::timed::Sample3D;
/// use imu_common::types::untimed::XYZ;
/// use imu_common::traits::IMUSample;
///
/// let timestamp = 12.5;
/// let measurement = [0.0, 0.0, 1.0];
/// let sample = Sample3D::new(timestamp, measurement);
///
/// assert_eq!(sample.get_timestamp_secs(), timestamp);
/// assert_eq!(sample.get_measurement(), XYZ::from(measurement));
/// ```

const TIMESTAMP_IDX: usize = 0;
const X_COORD_IDX: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct Sample3D {
    timestamp: f64,
    measurement: XYZ,
}

/// Represents a 3D sample with a timestamp and a measurement.
impl Sample3D {
    ///  Creates a new `Sample3D` instance from a timestamp and a measurement array.
    pub fn new(timestamp: f64, measurement: [f64; N_XYZ_COORDINATES]) -> Self {
        Self {
            timestamp,
            measurement: XYZ::new(measurement),
        }
    }

    /// Creates a new `Sample3D` instance from a timestamp and an `XYZ` measurement.
    pub fn from_xyz(timestamp: f64, measurement: XYZ) -> Self {
        Self {
            timestamp,
            measurement,
        }
    }

    /// Returns `[timestamp, x, y, z]`
    pub fn to_row(&self) -> [f64; N_XYZ_COORDINATES + 1] {
        let [x, y, z] = self.measurement.inner();
        [self.timestamp, x, y, z]
    }
}

impl IMUSample for Sample3D {
    type Untimed = XYZ;

    fn get_measurement(&self) -> Self::Untimed {
        self.measurement.clone()
    }

    fn get_timestamp_secs(&self) -> f64 {
        self.timestamp
    }

    fn from_measurement(timestamp: f64, measurement: Self::Untimed) -> Self {
        Self {
            timestamp,
            measurement,
        }
    }
}

impl TryFrom<Vec<f64>> for Sample3D {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES + 1 {
            return Err("Invalid length of input vector");
        }
        let measurement = XYZ::try_from(value[X_COORD_IDX..=N_XYZ_COORDINATES].to_vec())?;
        Ok(Sample3D::from_measurement(
            value[TIMESTAMP_IDX],
            measurement,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_new() {
        let timestamp = 1627846267.0;
        let measurement = [1.0, 2.0, 3.0];
        let sample = Sample3D::new(timestamp, measurement);

        assert_eq!(sample.timestamp, timestamp);
        assert_eq!(sample.get_measurement(), XYZ::from([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_try_from_row() {
        let sample = Sample3D::try_from(vec![2.0, -0.1, 0.0, 1.02]).unwrap();
        assert_eq!(sample.get_timestamp_secs(), 2.0);
        assert_eq!(sample.get_measurement(), XYZ::new([-0.1, 0.0, 1.02]));
        assert_eq!(sample.to_row(), [2.0, -0.1, 0.0, 1.02]);
    }

    #[test]
    fn test_try_from_short_row() {
        assert_eq!(
            Sample3D::try_from(vec![0.0, 1.0, 2.0]),
            Err("Invalid length of input vector")
        );
    }
}
