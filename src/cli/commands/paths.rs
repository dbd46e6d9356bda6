//! Paths command implementation

use super::{open_manager, render};
use crate::cli::logging::log;
use crate::cli::{DatasetArgs, LogLevel};
use crate::config::DatasetConfig;
use crate::layout::DatasetLayout;
use serde::Serialize;

#[derive(Serialize)]
struct PathsOutput<'a> {
    config: &'a DatasetConfig,
    layout: &'a DatasetLayout,
}

pub fn run_paths(args: DatasetArgs, level: LogLevel) -> Result<(), String> {
    let manager = open_manager(&args)?;

    let output = PathsOutput { config: manager.config(), layout: manager.layout() };
    if let Some(rendered) = render(&output, args.format)? {
        println!("{rendered}");
        return Ok(());
    }

    log(level, LogLevel::Normal, &format!("Dataset: {}", manager.dataset_target()));
    log(
        level,
        LogLevel::Verbose,
        &format!("Base path: {}", manager.dataset_base_path().display()),
    );
    println!("dataset:    {}", manager.dataset_path().display());
    println!("train:      {}", manager.training_path().display());
    println!("validation: {}", manager.validation_path().display());
    println!("test:       {}", manager.test_path().display());

    Ok(())
}
