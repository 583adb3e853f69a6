//! Time-series charts of 3-axis recordings, drawn with gnuplot.
//!
//! A [`Chart`] holds one [`Panel`] per axis; each panel overlays named [`Series`] (for example the
//! raw and the filtered signal). [`render`] turns it into a PNG file or an interactive window.

pub mod chart;
pub mod errors;
pub mod render;

pub use chart::{Chart, Panel, Series};
pub use errors::PlotError;
pub use render::{build_figure, render, PlotOutput};
