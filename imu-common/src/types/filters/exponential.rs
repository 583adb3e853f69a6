use crate::errors::FilterError;
use crate::traits::imu::BasicArithmetic;
use crate::traits::{IMUFilter, IMUSample, IMUUntimedSample};

/// Exponential smoothing: `y[0] = x[0]`, `y[i] = y[i-1] + alpha * (x[i] - y[i-1])`.
///
/// Output has the same length and timestamps as the input. `alpha = 1` leaves the data untouched,
/// smaller values smooth harder.
#[derive(Clone, Debug)]
pub struct ExponentialSmoothing<T> {
    alpha: f64,
    state: Option<T>,
}

impl<T: IMUUntimedSample> ExponentialSmoothing<T> {
    pub fn new(alpha: f64) -> Result<Self, FilterError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(FilterError::InvalidConfig(format!(
                "smoothing factor must be in (0, 1], got {}",
                alpha
            )));
        }
        Ok(Self { alpha, state: None })
    }
}

impl<T, U> IMUFilter<U> for ExponentialSmoothing<T>
where
    T: IMUUntimedSample + BasicArithmetic,
    U: IMUSample<Untimed = T>,
{
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError> {
        if samples.is_empty() {
            return Err(FilterError::NoSamples);
        }
        self.state = None;

        let mut filtered_data = Vec::with_capacity(samples.len());
        for sample in samples {
            let measurement = sample.get_measurement();
            let smoothed = match self.state.take() {
                Some(previous) => previous.clone() + (measurement - previous) * self.alpha,
                None => measurement,
            };
            filtered_data.push(U::from_measurement(
                sample.get_timestamp_secs(),
                smoothed.clone(),
            ));
            self.state = Some(smoothed);
        }
        Ok(filtered_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::timed::Sample3D;
    use crate::types::untimed::XYZ;

    #[test]
    fn test_step_response() {
        let mut filter = ExponentialSmoothing::<XYZ>::new(0.5).unwrap();
        let samples = vec![
            Sample3D::new(0.0, [0.0, 0.0, 0.0]),
            Sample3D::new(1.0, [1.0, 2.0, 4.0]),
            Sample3D::new(2.0, [1.0, 2.0, 4.0]),
        ];
        let filtered = filter.filter_batch(samples).unwrap();

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[1].get_measurement(), XYZ::new([0.5, 1.0, 2.0]));
        assert_eq!(filtered[2].get_measurement(), XYZ::new([0.75, 1.5, 3.0]));
        assert_eq!(filtered[2].get_timestamp_secs(), 2.0);
    }

    #[test]
    fn test_constant_input_is_unchanged() {
        let mut filter = ExponentialSmoothing::<XYZ>::new(0.2).unwrap();
        let samples: Vec<Sample3D> = (0..30)
            .map(|i| Sample3D::new(i as f64, [0.0, 0.0, 1.0]))
            .collect();
        let filtered = filter.filter_batch(samples.clone()).unwrap();
        assert_eq!(filtered, samples);
    }

    #[test]
    fn test_deterministic() {
        let mut filter = ExponentialSmoothing::<XYZ>::new(0.3).unwrap();
        let samples: Vec<Sample3D> = (0..30)
            .map(|i| Sample3D::new(i as f64, [(i % 3) as f64, 0.0, 1.0]))
            .collect();
        let first = filter.filter_batch(samples.clone()).unwrap();
        let second = filter.filter_batch(samples).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_alpha() {
        for alpha in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(ExponentialSmoothing::<XYZ>::new(alpha).is_err());
        }
    }
}
