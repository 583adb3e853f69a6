use serde::{Deserialize, Serialize};

use crate::errors::FilterError;
use crate::traits::imu::BasicArithmetic;
use crate::traits::{IMUFilter, IMUSample, IMUUntimedSample};
use crate::types::filters::{ExponentialSmoothing, LowPass, MovingAverage, Passthrough};

/// Selection of the smoothing applied to a recording, as read from the `[filter]` table of
/// the configuration file:
///
/// ```toml
/// [filter]
/// kind = "moving-average"
/// window = 25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterConfig {
    None,
    MovingAverage { window: usize },
    Exponential { alpha: f64 },
    LowPass { cutoff_hz: f64 },
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::MovingAverage { window: 10 }
    }
}

impl FilterConfig {
    /// Checks parameters without building anything.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            FilterConfig::None => Ok(()),
            FilterConfig::MovingAverage { window } => {
                MovingAverage::<crate::XYZ>::new(*window).map(|_| ())
            }
            FilterConfig::Exponential { alpha } => {
                ExponentialSmoothing::<crate::XYZ>::new(*alpha).map(|_| ())
            }
            FilterConfig::LowPass { cutoff_hz } => {
                LowPass::<crate::XYZ>::new(*cutoff_hz).map(|_| ())
            }
        }
    }

    /// Instantiates the configured filter.
    pub fn build<T, U>(&self) -> Result<Box<dyn IMUFilter<U>>, FilterError>
    where
        T: IMUUntimedSample + BasicArithmetic,
        U: IMUSample<Untimed = T>,
    {
        let filter: Box<dyn IMUFilter<U>> = match self {
            FilterConfig::None => Box::new(Passthrough::<T>::new()),
            FilterConfig::MovingAverage { window } => Box::new(MovingAverage::<T>::new(*window)?),
            FilterConfig::Exponential { alpha } => {
                Box::new(ExponentialSmoothing::<T>::new(*alpha)?)
            }
            FilterConfig::LowPass { cutoff_hz } => Box::new(LowPass::<T>::new(*cutoff_hz)?),
        };
        Ok(filter)
    }

    /// Short human readable description, used in plot legends and logs.
    pub fn describe(&self) -> String {
        match self {
            FilterConfig::None => "unfiltered".to_string(),
            FilterConfig::MovingAverage { window } => format!("moving average ({} samples)", window),
            FilterConfig::Exponential { alpha } => format!("exponential (alpha {})", alpha),
            FilterConfig::LowPass { cutoff_hz } => format!("low-pass ({} Hz)", cutoff_hz),
        }
    }
}
