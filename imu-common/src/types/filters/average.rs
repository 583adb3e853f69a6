use crate::errors::FilterError;
use crate::traits::imu::BasicArithmetic;
use crate::traits::{IMUFilter, IMUSample, IMUUntimedSample};
use std::marker::PhantomData;

/// An averaging filter for IMU (Inertial Measurement Unit) data.
///
/// The whole batch collapses into one sample whose measurement is the mean of all
/// measurements and whose timestamp is the mean of all timestamps.
///
/// ## Example
///
/// ```rust
/// use imu_common::types::filters::Average;
/// use imu_common::types::timed::Sample3D;
/// use imu_common::types::untimed::XYZ;
/// use imu_common::traits::imu::{IMUFilter, IMUSample};
///
/// let mut avg = Average::<XYZ>::new();
/// let samples = vec![
///     Sample3D::from_measurement(0.0, XYZ::new([1.0, 1.0, 1.0])),
///     Sample3D::from_measurement(0.1, XYZ::new([2.0, 2.0, 2.0])),
///     Sample3D::from_measurement(0.2, XYZ::new([3.0, 3.0, 3.0])),
/// ];
/// let filtered_samples = avg.filter_batch(samples).unwrap();
/// assert_eq!(filtered_samples.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Average<T> {
    _phantom_data: PhantomData<T>,
}

impl<T> Average<T> {
    pub fn new() -> Self {
        Self {
            _phantom_data: PhantomData,
        }
    }
}

impl<T, U> IMUFilter<U> for Average<T>
where
    T: IMUUntimedSample + BasicArithmetic,
    U: IMUSample<Untimed = T>,
{
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError> {
        if samples.is_empty() {
            return Err(FilterError::NoSamples);
        }
        let n_samples = samples.len() as f64;
        let (timestamp, aggregate) = samples.iter().fold(
            (0.0, T::default()),
            |(acc_timestamp, acc_measurement), s| {
                (
                    acc_timestamp + s.get_timestamp_secs(),
                    acc_measurement + s.get_measurement(),
                )
            },
        );

        Ok(vec![U::from_measurement(
            timestamp / n_samples,
            aggregate / n_samples,
        )])
    }
}
