use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use imu_common::filters::Average;
use imu_common::{IMUFilter, IMUSample, Sample3D, XYZ};

use crate::errors::RecordingError;

/// Period of the recording during which the train is known to be stationary, typically a
/// station stop. Bounds are exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticWindow {
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl StaticWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, RecordingError> {
        let window = Self {
            start,
            end,
            label: None,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), RecordingError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.start < self.end) {
            return Err(RecordingError::InvalidStaticWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn contains(&self, timestamp: f64) -> bool {
        self.start < timestamp && timestamp < self.end
    }
}

impl fmt::Display for StaticWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}:{} ({})", self.start, self.end, label),
            None => write!(f, "{}:{}", self.start, self.end),
        }
    }
}

/// Parses `START:END`, in seconds.
impl FromStr for StaticWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got '{}'", s))?;
        let start = start
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid start '{}': {}", start, e))?;
        let end = end
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid end '{}': {}", end, e))?;
        StaticWindow::new(start, end).map_err(|e| e.to_string())
    }
}

/// Output of [`calibrate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Calibrated {
    pub samples: Vec<Sample3D>,
    /// Mean measurement while stationary: sensor offset plus gravity.
    pub bias: XYZ,
    pub static_samples: usize,
}

/// Removes the systematic bias of the recording.
///
/// The bias is the mean of every sample recorded inside one of `windows`, and is subtracted
/// from all samples. Since gravity is part of what the sensor reads at rest, it is removed too.
pub fn calibrate(
    samples: &[Sample3D],
    windows: &[StaticWindow],
) -> Result<Calibrated, RecordingError> {
    for window in windows {
        window.validate()?;
    }

    let at_rest: Vec<Sample3D> = samples
        .iter()
        .filter(|s| {
            let timestamp = s.get_timestamp_secs();
            windows.iter().any(|w| w.contains(timestamp))
        })
        .cloned()
        .collect();

    if at_rest.is_empty() {
        return Err(RecordingError::NoStaticSamples(windows.len()));
    }
    let static_samples = at_rest.len();

    let mut average = Average::<XYZ>::new();
    let bias = average
        .filter_batch(at_rest)?
        .pop()
        .map(|s| s.get_measurement())
        .unwrap_or_default();

    info!(
        "Sensor bias {:?} estimated from {} samples in {} static window(s)",
        bias.inner(),
        static_samples,
        windows.len()
    );

    let samples = samples
        .iter()
        .map(|s| Sample3D::from_xyz(s.get_timestamp_secs(), s.get_measurement() - bias.clone()))
        .collect();

    Ok(Calibrated {
        samples,
        bias,
        static_samples,
    })
}
