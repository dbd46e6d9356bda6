//! CLI command implementations

mod classes;
mod paths;
mod test_paths;


use crate::cli::{Cli, Command, DatasetArgs, LogLevel, OutputFormat};
use crate::manager::DatasetPathManager;
use serde::Serialize;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Paths(args) => paths::run_paths(args, log_level),
        Command::Classes(args) => classes::run_classes(args, log_level),
        Command::TestPaths(args) => test_paths::run_test_paths(args, log_level),
    }
}

/// Resolve the dataset named by `args` against the real filesystem.
fn open_manager(args: &DatasetArgs) -> Result<DatasetPathManager, String> {
    let config = args.to_builder()?.build().map_err(|e| e.to_string())?;
    Ok(DatasetPathManager::new(config))
}

/// Serialize `value` for the structured output formats.
fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>, String> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(Some)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(Some)
            .map_err(|e| format!("YAML serialization error: {e}")),
    }
}
