//! dpm CLI
//!
//! Resolve the directory layout of a train/validation/test dataset and infer
//! its class labels.
//!
//! # Usage
//!
//! ```bash
//! # Show the four dataset paths
//! dpm paths cats_vs_dogs --base-path /home/user/datasets
//!
//! # Base path from the environment
//! DATASET_BASE_PATH=/home/user/datasets dpm classes cats_vs_dogs
//!
//! # Full test-class paths as JSON, split names from a config file
//! dpm test-paths --config cats_vs_dogs.yaml --format json
//! ```

use clap::Parser;
use dataset_path_manager::cli::{init_logging, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
