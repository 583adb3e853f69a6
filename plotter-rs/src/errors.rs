//! Module errors

use gnuplot::GnuplotInitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Nothing to draw.
    #[error("No data to plot: {0}")]
    NoData(String),

    /// Output settings out of range.
    #[error("Invalid plot output: {0}")]
    InvalidOutput(String),

    /// gnuplot could not be started.
    #[error("Failed to run gnuplot: {0}")]
    Gnuplot(#[from] GnuplotInitError),
}
