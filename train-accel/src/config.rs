use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use imu_common::filters::FilterConfig;
use plotter_rs::PlotOutput;
use recording_rs::{CsvColumnMapper, LoaderOptions, StaticWindow};

use crate::cli::Cli;
use crate::errors::ConfigError;

/// Application configuration, read from a TOML file and/or the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub filter: FilterConfig,
    pub calibration: CalibrationConfig,
    pub plot: PlotConfig,
    pub export: ExportConfig,
}

/// Layout of the recording file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub delimiter: char,
    pub has_header: bool,
    /// Indices of the timestamp, x, y and z columns
    pub columns: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub normalize: bool,
    pub static_windows: Vec<StaticWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub enabled: bool,
    pub title: String,
    pub output: PathBuf,
    pub show: bool,
    pub width: u32,
    pub height: u32,
    pub raw: bool,
    pub filtered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub path: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            has_header: true,
            columns: CsvColumnMapper::default().columns(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Train ride acceleration".to_string(),
            output: PathBuf::from("accel.png"),
            show: false,
            width: 1600,
            height: 1200,
            raw: true,
            filtered: true,
        }
    }
}

impl InputConfig {
    pub fn loader_options(&self) -> Result<LoaderOptions, ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::Validation(format!(
                "delimiter '{}' is not a single byte character",
                self.delimiter
            )));
        }
        Ok(LoaderOptions {
            delimiter: self.delimiter as u8,
            has_header: self.has_header,
            columns: CsvColumnMapper::from_indices(&self.columns)?,
        })
    }
}

impl PlotConfig {
    /// `None` when plotting is disabled.
    pub fn output(&self) -> Option<PlotOutput> {
        if !self.enabled {
            return None;
        }
        if self.show {
            return Some(PlotOutput::Window);
        }
        Some(PlotOutput::Png {
            path: self.output.clone(),
            width: self.width,
            height: self.height,
        })
    }
}

impl AppConfig {
    /// Loads configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Configuration file (if any) with command line overrides applied, validated.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => {
                debug!("Reading configuration from {}", path.display());
                AppConfig::load_from_file(path)?
            }
            None => AppConfig::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(window) = cli.window {
            self.filter = FilterConfig::MovingAverage { window };
        }
        if let Some(alpha) = cli.alpha {
            self.filter = FilterConfig::Exponential { alpha };
        }
        if let Some(cutoff_hz) = cli.cutoff {
            self.filter = FilterConfig::LowPass { cutoff_hz };
        }
        if cli.no_filter {
            self.filter = FilterConfig::None;
        }

        if let Some(delimiter) = cli.delimiter {
            self.input.delimiter = delimiter;
        }
        if cli.no_header {
            self.input.has_header = false;
        }
        if let Some(columns) = &cli.columns {
            self.input.columns = columns.clone();
        }

        if cli.normalize {
            self.calibration.normalize = true;
        }
        if !cli.static_windows.is_empty() {
            self.calibration.static_windows = cli.static_windows.clone();
        }

        if let Some(output) = &cli.output {
            self.plot.output = output.clone();
            self.plot.show = false;
        }
        if cli.show {
            self.plot.show = true;
        }
        if cli.no_plot {
            self.plot.enabled = false;
        }
        if let Some(title) = &cli.title {
            self.plot.title = title.clone();
        }
        if let Some(width) = cli.width {
            self.plot.width = width;
        }
        if let Some(height) = cli.height {
            self.plot.height = height;
        }
        if cli.raw_only {
            self.plot.filtered = false;
        }
        if cli.filtered_only {
            self.plot.raw = false;
        }

        if let Some(export) = &cli.export {
            self.export.path = Some(export.clone());
        }
    }

    /// Checks every setting. Runs before the recording is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filter.validate()?;
        self.input.loader_options()?;
        for window in &self.calibration.static_windows {
            window.validate()?;
        }
        if let Some(output) = self.plot.output() {
            output.validate()?;
        }
        if self.plot.enabled && !self.plot.raw && !self.plot.filtered {
            return Err(ConfigError::Validation(
                "plot needs the raw or the filtered series".to_string(),
            ));
        }
        if !self.plot.enabled && self.export.path.is_none() {
            return Err(ConfigError::Validation(
                "plotting is disabled and no export path is set, nothing to do".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("train-accel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.filter, FilterConfig::MovingAverage { window: 10 });
        assert_eq!(
            config.plot.output(),
            Some(PlotOutput::Png {
                path: PathBuf::from("accel.png"),
                width: 1600,
                height: 1200
            })
        );
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
            [input]
            delimiter = ","

            [filter]
            kind = "low-pass"
            cutoff_hz = 0.5

            [calibration]
            normalize = true
            static_windows = [
                { start = 0.0, end = 47.0, label = "Angers" },
                { start = 540.0, end = 570.0 },
            ]

            [plot]
            show = true
        "#;
        let config: AppConfig = toml::from_str(content).unwrap();

        assert_eq!(config.input.delimiter, ',');
        assert!(config.input.has_header);
        assert_eq!(config.filter, FilterConfig::LowPass { cutoff_hz: 0.5 });
        assert!(config.calibration.normalize);
        assert_eq!(config.calibration.static_windows.len(), 2);
        assert_eq!(
            config.calibration.static_windows[0].label.as_deref(),
            Some("Angers")
        );
        assert_eq!(config.plot.output(), Some(PlotOutput::Window));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        config.plot.show = true;
        config.apply_cli(&cli(&[
            "ride.csv",
            "--alpha",
            "0.2",
            "--output",
            "out.png",
            "--static",
            "1:2",
            "--filtered-only",
        ]));

        assert_eq!(config.filter, FilterConfig::Exponential { alpha: 0.2 });
        assert!(!config.plot.show);
        assert_eq!(config.plot.output, PathBuf::from("out.png"));
        assert_eq!(config.calibration.static_windows.len(), 1);
        assert!(!config.plot.raw);
        assert!(config.plot.filtered);
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = AppConfig::default();
        config.apply_cli(&cli(&["ride.csv", "--window", "0"]));
        assert!(matches!(config.validate(), Err(ConfigError::Filter(_))));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut config = AppConfig::default();
        config.input.delimiter = 'é';
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.input.columns = vec![0, 1];
        assert!(matches!(config.validate(), Err(ConfigError::Recording(_))));

        let mut config = AppConfig::default();
        config.plot.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Plot(_))));

        let mut config = AppConfig::default();
        config.plot.raw = false;
        config.plot.filtered = false;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.plot.enabled = false;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_static_window_in_file() {
        let content = r#"
            [calibration]
            static_windows = [{ start = 10.0, end = 5.0 }]
        "#;
        let config: AppConfig = toml::from_str(content).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Recording(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = cli(&["ride.csv", "--config", "./no_such_config.toml"]);
        assert!(matches!(AppConfig::from_cli(&cli), Err(ConfigError::Io(_))));
    }
}
