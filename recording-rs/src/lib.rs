//! # Crate recording-rs
//!
//! Reads accelerometer recordings exported by a phone sensor logger (phyphox style CSV:
//! `;` separated, header row, optional units row, decimal comma or dot) into timestamped
//! [`Sample3D`](imu_common::Sample3D) values, and prepares them for analysis:
//!
//! - [`loader`]: parsing and validation of the exported table.
//! - [`normalize`]: reorientation to the travel frame and conversion from g to m/s^2.
//! - [`calibration`]: bias removal using periods where the train is known to be stopped.

pub mod calibration;
pub mod columns;
pub mod errors;
pub mod loader;
pub mod normalize;

pub use calibration::{calibrate, Calibrated, StaticWindow};
pub use columns::{CsvColumnMapper, CsvFileColumn};
pub use errors::RecordingError;
pub use loader::{load_samples, LoaderOptions};
pub use normalize::{normalize, Units};
