//! CLI module for dpm
//!
//! This module contains argument parsing, command handlers and output
//! utilities for the `dpm` binary.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, DatasetArgs, OutputFormat};
pub use commands::run_command;
pub use logging::{init_logging, LogLevel};
