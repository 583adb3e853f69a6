use imu_common::FilterError;
use plotter_rs::PlotError;
use recording_rs::RecordingError;
use thiserror::Error;

/// Configuration errors, all raised before the recording is opened.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Filter configuration: {0}")]
    Filter(#[from] FilterError),
    #[error("Recording settings: {0}")]
    Recording(#[from] RecordingError),
    #[error("Plot configuration: {0}")]
    Plot(#[from] PlotError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Recording(#[from] RecordingError),
    #[error("Filter failed: {0}")]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
