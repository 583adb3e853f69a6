use std::f64::consts::PI;

use crate::errors::FilterError;
use crate::traits::imu::BasicArithmetic;
use crate::traits::{IMUFilter, IMUSample, IMUUntimedSample};

/// First order RC low-pass filter.
///
/// The blending factor is recomputed for every sample from the actual time step, so irregular
/// sampling (common with phone sensors) is handled: `alpha = dt / (RC + dt)`, `RC = 1 / (2 pi fc)`.
#[derive(Clone, Debug)]
pub struct LowPass<T> {
    cutoff_hz: f64,
    state: Option<(f64, T)>,
}

impl<T: IMUUntimedSample> LowPass<T> {
    pub fn new(cutoff_hz: f64) -> Result<Self, FilterError> {
        if !(cutoff_hz.is_finite() && cutoff_hz > 0.0) {
            return Err(FilterError::InvalidConfig(format!(
                "cutoff frequency must be a positive number of Hz, got {}",
                cutoff_hz
            )));
        }
        Ok(Self {
            cutoff_hz,
            state: None,
        })
    }

    fn time_constant(&self) -> f64 {
        1.0 / (2.0 * PI * self.cutoff_hz)
    }
}

impl<T, U> IMUFilter<U> for LowPass<T>
where
    T: IMUUntimedSample + BasicArithmetic,
    U: IMUSample<Untimed = T>,
{
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError> {
        if samples.is_empty() {
            return Err(FilterError::NoSamples);
        }
        self.state = None;
        let rc = self.time_constant();

        let mut filtered_data = Vec::with_capacity(samples.len());
        for (index, sample) in samples.into_iter().enumerate() {
            let timestamp = sample.get_timestamp_secs();
            let measurement = sample.get_measurement();

            let smoothed = match self.state.take() {
                Some((previous_timestamp, previous)) => {
                    let dt = timestamp - previous_timestamp;
                    if dt <= 0.0 {
                        return Err(FilterError::NonIncreasingTimestamp {
                            index,
                            previous: previous_timestamp,
                            current: timestamp,
                        });
                    }
                    let alpha = dt / (rc + dt);
                    previous.clone() + (measurement - previous) * alpha
                }
                None => measurement,
            };

            filtered_data.push(U::from_measurement(timestamp, smoothed.clone()));
            self.state = Some((timestamp, smoothed));
        }
        Ok(filtered_data)
    }
}
