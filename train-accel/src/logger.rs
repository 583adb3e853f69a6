use env_logger::{Builder, Env};

/// Initialises `env_logger`. `RUST_LOG` wins over the verbosity flag.
pub fn init_logger(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}
