//! Test-paths command implementation

use super::{open_manager, render};
use crate::cli::logging::log;
use crate::cli::{DatasetArgs, LogLevel};

pub fn run_test_paths(args: DatasetArgs, level: LogLevel) -> Result<(), String> {
    let manager = open_manager(&args)?;
    let paths = manager
        .class_test_paths()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Class inconsistencies found between splits".to_string())?;

    if let Some(rendered) = render(&paths, args.format)? {
        println!("{rendered}");
        return Ok(());
    }

    log(level, LogLevel::Verbose, &format!("Test split: {}", manager.test_path().display()));
    for path in &paths {
        println!("{}", path.display());
    }

    Ok(())
}
