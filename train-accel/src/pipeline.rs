use std::path::Path;

use log::info;

use imu_common::{IMUFilter, Sample3D, XYZ};
use plotter_rs::{render, Chart, PlotOutput};
use recording_rs::{calibrate, load_samples, normalize, Units};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::export::write_samples;

/// Samples at each stage of the processing.
#[derive(Debug, Clone)]
pub struct Processed {
    /// Loaded, normalized and calibrated as configured, not filtered.
    pub samples: Vec<Sample3D>,
    pub filtered: Vec<Sample3D>,
    pub units: Units,
    pub bias: Option<XYZ>,
}

/// Summary of a run.
#[derive(Debug, Clone)]
pub struct Report {
    pub raw_samples: usize,
    pub filtered_samples: usize,
    pub output: Option<PlotOutput>,
}

/// Loads and filters `input`. Configuration is validated before the file is opened.
pub fn process(config: &AppConfig, input: &Path) -> Result<Processed, AppError> {
    config.validate()?;
    let options = config.input.loader_options()?;
    let mut filter = config.filter.build::<XYZ, Sample3D>()?;

    let mut samples = load_samples(input, &options)?;

    let mut units = Units::G;
    if config.calibration.normalize {
        samples = normalize(&samples);
        units = Units::MetersPerSecondSquared;
    }

    let mut bias = None;
    if !config.calibration.static_windows.is_empty() {
        let calibrated = calibrate(&samples, &config.calibration.static_windows)?;
        samples = calibrated.samples;
        bias = Some(calibrated.bias);
    }

    let filtered = filter.filter_batch(samples.clone())?;
    info!(
        "Applied {} filter: {} -> {} samples",
        config.filter.describe(),
        samples.len(),
        filtered.len()
    );

    Ok(Processed {
        samples,
        filtered,
        units,
        bias,
    })
}

/// Builds the chart for the configured series.
pub fn chart(config: &AppConfig, processed: &Processed) -> Result<Chart, AppError> {
    let mut series: Vec<(&str, &[Sample3D])> = Vec::with_capacity(2);
    if config.plot.raw {
        series.push(("raw", &processed.samples));
    }
    if config.plot.filtered {
        series.push(("filtered", &processed.filtered));
    }
    let title = format!("{} - {}", config.plot.title, config.filter.describe());
    Ok(Chart::from_samples(
        &title,
        processed.units.label(),
        &series,
    )?)
}

/// Full run: process, export, plot.
pub fn run(config: &AppConfig, input: &Path) -> Result<Report, AppError> {
    let processed = process(config, input)?;

    if let Some(path) = &config.export.path {
        write_samples(path, &processed.filtered)?;
    }

    let output = config.plot.output();
    if let Some(output) = &output {
        let chart = chart(config, &processed)?;
        render(&chart, output)?;
    }

    Ok(Report {
        raw_samples: processed.samples.len(),
        filtered_samples: processed.filtered.len(),
        output,
    })
}
