//! Command-line arguments for `dpm`.
//!
//! ```bash
//! dpm paths cats_vs_dogs --base-path /home/user/datasets
//! dpm classes cats_vs_dogs --format json
//! dpm test-paths --config dataset.yaml
//! ```

use crate::config::{load_config, DatasetConfigBuilder};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// dpm: dataset path manager
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "dpm")]
#[command(version)]
#[command(about = "Resolve train/validation/test dataset paths and infer class labels")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the dataset, train, validation and test paths
    Paths(DatasetArgs),

    /// Infer class names from split subdirectories
    Classes(DatasetArgs),

    /// Print the full path of every class under the test split
    TestPaths(DatasetArgs),
}

/// Dataset selection shared by every command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct DatasetArgs {
    /// Dataset name under the base path
    #[arg(value_name = "TARGET", required_unless_present = "config")]
    pub target: Option<String>,

    /// YAML dataset description; flags given alongside override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base path (defaults to $DATASET_BASE_PATH)
    #[arg(short, long)]
    pub base_path: Option<PathBuf>,

    /// Training split directory name
    #[arg(long)]
    pub train_dir: Option<String>,

    /// Validation split directory name
    #[arg(long)]
    pub validation_dir: Option<String>,

    /// Test split directory name
    #[arg(long)]
    pub test_dir: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl DatasetArgs {
    /// Merge the optional config file with command-line overrides.
    pub fn to_builder(&self) -> Result<DatasetConfigBuilder, String> {
        let mut builder = match (&self.config, &self.target) {
            (Some(path), target) => {
                let builder = load_config(path).map_err(|e| format!("Config error: {e}"))?;
                match target {
                    Some(target) => builder.target(target.clone()),
                    None => builder,
                }
            }
            (None, Some(target)) => DatasetConfigBuilder::new(target.clone()),
            (None, None) => return Err("Either TARGET or --config is required".to_string()),
        };

        builder = builder.maybe_base_path(self.base_path.clone());
        if let Some(name) = &self.train_dir {
            builder = builder.train_dir(name.clone());
        }
        if let Some(name) = &self.validation_dir {
            builder = builder.validation_dir(name.clone());
        }
        if let Some(name) = &self.test_dir {
            builder = builder.test_dir(name.clone());
        }
        Ok(builder)
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
