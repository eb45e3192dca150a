use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_DATA_PATH;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Launch records CSV to visualize
    #[arg(value_name = "DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Logging level (overrides RUST_LOG). One of: trace, debug, info, warn, error
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}
