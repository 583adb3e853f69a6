use crate::errors::FilterError;
use crate::traits::imu::BasicArithmetic;
use crate::types::buffers::CircularBuffer;
use crate::{IMUFilter, IMUSample, IMUUntimedSample};

/// A moving average filter for IMU (Inertial Measurement Unit) data.
/// The moving average filter is used to smooth out short-term fluctuations and highlight longer-term trends in the data.
///
/// Only full windows produce an output, so a batch of `n` samples filtered with a window of `w`
/// samples yields `n - w + 1` samples. Each output is timestamped with the mean timestamp of its window.
///
/// ## Example
///
/// ```rust
/// use imu_common::types::filters::MovingAverage;
/// use imu_common::types::timed::Sample3D;
/// use imu_common::types::untimed::XYZ;
/// use imu_common::traits::imu::{IMUFilter, IMUSample};
///
/// let mut ma = MovingAverage::<XYZ>::new(3).unwrap();
/// let samples = vec![
///     Sample3D::from_measurement(0.0, XYZ::new([1.0, 1.0, 1.0])),
///     Sample3D::from_measurement(0.1, XYZ::new([2.0, 2.0, 2.0])),
///     Sample3D::from_measurement(0.2, XYZ::new([3.0, 3.0, 3.0])),
/// ];
/// let filtered_samples = ma.filter_batch(samples).unwrap();
/// assert_eq!(filtered_samples.len(), 1);
/// ```

/// Definition of moving average filter, containing `window_size` elements to do the smoothing. Samples are stored in a circular buffer.
/// When one samples is pushed, oldest sample is popped. A running aggregate of the buffer contents is used to do the smoothing.
#[derive(Clone, Debug)]
pub struct MovingAverage<T> {
    window_size: usize,
    buffer: CircularBuffer<T>,
    timestamps: CircularBuffer<f64>,
    aggregate: T,
    aggregate_timestamp: f64,
}

impl<T: IMUUntimedSample> MovingAverage<T> {
    /// Initializes new `MovingAverage` filter with `window_size` elements.
    pub fn new(window_size: usize) -> Result<Self, FilterError> {
        if window_size == 0 {
            return Err(FilterError::InvalidConfig(
                "moving average window must be at least 1 sample".to_string(),
            ));
        }
        Ok(Self {
            window_size,
            buffer: CircularBuffer::new(window_size),
            timestamps: CircularBuffer::new(window_size),
            aggregate: T::default(),
            aggregate_timestamp: 0.0,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.timestamps.clear();
        self.aggregate = T::default();
        self.aggregate_timestamp = 0.0;
    }
}

impl<T, U> IMUFilter<U> for MovingAverage<T>
where
    T: IMUUntimedSample + BasicArithmetic,
    U: IMUSample<Untimed = T>,
{
    /// Filters a batch of IMU samples using the moving average filter.
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError> {
        if samples.is_empty() {
            return Err(FilterError::NoSamples);
        }
        if samples.len() < self.window_size {
            return Err(FilterError::NotEnoughSamples {
                required: self.window_size,
                available: samples.len(),
            });
        }
        self.reset();

        let window_size = self.window_size as f64;
        let mut filtered_data: Vec<U> = Vec::with_capacity(samples.len() - self.window_size + 1);
        for (idx, sample) in samples.into_iter().enumerate() {
            let measurement = sample.get_measurement();
            let timestamp = sample.get_timestamp_secs();

            let out = self.buffer.push(measurement.clone());
            self.aggregate -= out;
            self.aggregate += measurement;

            let out_timestamp = self.timestamps.push(timestamp);
            self.aggregate_timestamp += timestamp - out_timestamp;

            if idx + 1 >= self.window_size {
                filtered_data.push(U::from_measurement(
                    self.aggregate_timestamp / window_size,
                    self.aggregate.clone() / window_size,
                ));
            }
        }
        Ok(filtered_data)
    }
}
