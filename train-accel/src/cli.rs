use std::path::PathBuf;

use clap::{ArgAction, Parser};

use recording_rs::StaticWindow;

/// Filter and plot an accelerometer recording taken on board a train.
#[derive(Parser, Debug, Clone)]
#[command(name = "train-accel", version, about)]
pub struct Cli {
    /// Recording exported by the sensor logger (timestamp + x, y, z acceleration in g)
    pub input: PathBuf,

    /// TOML configuration file, command line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Moving average over N samples
    #[arg(short, long, value_name = "N", group = "smoothing")]
    pub window: Option<usize>,

    /// Exponential smoothing factor in (0, 1]
    #[arg(long, group = "smoothing")]
    pub alpha: Option<f64>,

    /// First order low-pass cutoff frequency
    #[arg(long, value_name = "HZ", group = "smoothing")]
    pub cutoff: Option<f64>,

    /// Plot the recording without filtering
    #[arg(long, group = "smoothing")]
    pub no_filter: bool,

    /// PNG file to write the plot to
    #[arg(short, long, conflicts_with_all = ["show", "no_plot"])]
    pub output: Option<PathBuf>,

    /// Open an interactive plot window instead of writing a file
    #[arg(long, conflicts_with = "no_plot")]
    pub show: bool,

    /// Skip plotting (useful with --export)
    #[arg(long)]
    pub no_plot: bool,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Only plot the unfiltered signal
    #[arg(long, conflicts_with = "filtered_only")]
    pub raw_only: bool,

    /// Only plot the filtered signal
    #[arg(long)]
    pub filtered_only: bool,

    /// Field separator of the input file
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Input file has no header row
    #[arg(long)]
    pub no_header: bool,

    /// Column indices of timestamp, x, y and z
    #[arg(long, value_delimiter = ',', value_name = "T,X,Y,Z")]
    pub columns: Option<Vec<usize>>,

    /// Reorient to the travel frame (x right, y forward, z up) and convert to m/s^2
    #[arg(long)]
    pub normalize: bool,

    /// Period where the train is stopped, used to remove the sensor bias (repeatable)
    #[arg(long = "static", value_name = "START:END")]
    pub static_windows: Vec<StaticWindow>,

    /// Write the filtered samples to a CSV file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
