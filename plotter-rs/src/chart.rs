use imu_common::constants::N_XYZ_COORDINATES;
use imu_common::{IMUSample, Sample3D};

use crate::errors::PlotError;

const AXIS_NAMES: [&str; N_XYZ_COORDINATES] = ["x", "y", "z"];
const TIME_LABEL: &str = "time (s)";

/// One named line: values against time.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub timestamps: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Subplot showing one acceleration axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub y_label: String,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub panels: Vec<Panel>,
}

impl Chart {
    /// Splits every named sample sequence into its x, y and z components and stacks one panel
    /// per axis, all sharing the time axis.
    pub fn from_samples(
        title: &str,
        unit_label: &str,
        named_samples: &[(&str, &[Sample3D])],
    ) -> Result<Self, PlotError> {
        let named_samples: Vec<&(&str, &[Sample3D])> = named_samples
            .iter()
            .filter(|(_, samples)| !samples.is_empty())
            .collect();
        if named_samples.is_empty() {
            return Err(PlotError::NoData(title.to_string()));
        }

        let panels = AXIS_NAMES
            .iter()
            .enumerate()
            .map(|(axis, axis_name)| Panel {
                y_label: format!("a{} ({})", axis_name, unit_label),
                series: named_samples
                    .iter()
                    .map(|(name, samples)| Series {
                        name: format!("{} {}", name, axis_name),
                        timestamps: samples.iter().map(|s| s.get_timestamp_secs()).collect(),
                        values: samples
                            .iter()
                            .map(|s| s.get_measurement().inner()[axis])
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            title: title.to_string(),
            x_label: TIME_LABEL.to_string(),
            panels,
        })
    }

    /// Time span covered by all series.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.panels
            .iter()
            .flat_map(|p| p.series.iter())
            .flat_map(|s| s.timestamps.iter().copied())
            .fold(None, |range, t| match range {
                None => Some((t, t)),
                Some((min, max)) => Some((f64::min(min, t), f64::max(max, t))),
            })
    }
}
