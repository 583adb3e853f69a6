//! # train-accel
//!
//! Loads an accelerometer recording taken on board a train, optionally reorients and calibrates
//! it, smooths it and plots raw and filtered acceleration against time.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod logger;
pub mod pipeline;

pub use config::AppConfig;
pub use errors::{AppError, ConfigError};
pub use pipeline::{process, run, Processed, Report};
