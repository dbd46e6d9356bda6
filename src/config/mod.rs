//! Dataset configuration and base-path resolution.
//!
//! A [`DatasetConfig`] is built once and never mutated. When no base path is
//! supplied, `$DATASET_BASE_PATH` is read exactly once, during
//! [`DatasetConfigBuilder::build`], and the result is frozen into the config.
//!
//! # Example
//!
//! ```
//! use dataset_path_manager::DatasetConfig;
//!
//! let config = DatasetConfig::builder("cats_vs_dogs")
//!     .base_path("/home/user/datasets")
//!     .validation_dir("val")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.target(), "cats_vs_dogs");
//! assert_eq!(config.validation_dir(), "val");
//! assert_eq!(config.test_dir(), "test");
//! ```

mod file;
mod resolve;

#[cfg(test)]
mod tests;

pub use file::{load_config, DatasetConfigFile};
pub use resolve::{DatasetConfigBuilder, BASE_PATH_ENV};

use crate::layout::Split;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Immutable description of where a dataset lives and how its splits are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetConfig {
    target: String,
    base_path: PathBuf,
    train_dir: String,
    validation_dir: String,
    test_dir: String,
}

impl DatasetConfig {
    /// Start building a configuration for `target`.
    pub fn builder(target: impl Into<String>) -> DatasetConfigBuilder {
        DatasetConfigBuilder::new(target)
    }

    /// Dataset name appended to the base path, e.g. `cats_vs_dogs`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Root under which all dataset targets live, e.g. `/home/user/datasets`.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn train_dir(&self) -> &str {
        &self.train_dir
    }

    pub fn validation_dir(&self) -> &str {
        &self.validation_dir
    }

    pub fn test_dir(&self) -> &str {
        &self.test_dir
    }

    /// Subdirectory name configured for `split`.
    pub fn split_dir(&self, split: Split) -> &str {
        match split {
            Split::Train => &self.train_dir,
            Split::Validation => &self.validation_dir,
            Split::Test => &self.test_dir,
        }
    }
}
