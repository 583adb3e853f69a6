use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use train_accel::cli::Cli;
use train_accel::logger::init_logger;
use train_accel::{pipeline, AppConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&config, &cli.input) {
        Ok(report) => {
            info!(
                "Done: {} samples loaded, {} after filtering",
                report.raw_samples, report.filtered_samples
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
