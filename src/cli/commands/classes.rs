//! Classes command implementation

use super::{open_manager, render};
use crate::classes::ClassInference;
use crate::cli::logging::log;
use crate::cli::{DatasetArgs, LogLevel};

pub fn run_classes(args: DatasetArgs, level: LogLevel) -> Result<(), String> {
    let manager = open_manager(&args)?;
    let inference = manager.infer_classes().map_err(|e| e.to_string())?;

    if let Some(rendered) = render(&inference, args.format)? {
        println!("{rendered}");
    } else if let Some(text) = text_output(&inference) {
        log(
            level,
            LogLevel::Verbose,
            &format!("Classes found under {}", manager.dataset_path().display()),
        );
        print!("{text}");
    }

    if inference.is_consistent() {
        Ok(())
    } else {
        Err("Class inconsistencies found between splits".to_string())
    }
}

/// One class per line, or `None` on inconsistency.
///
/// The per-split listing of an inconsistent layout is already logged at
/// `warn` by [`crate::classes::infer_classes`].
pub(super) fn text_output(inference: &ClassInference) -> Option<String> {
    inference
        .classes()
        .map(|classes| classes.iter().map(|class| format!("{class}\n")).collect())
}
