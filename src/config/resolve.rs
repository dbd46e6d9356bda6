//! Builder and one-shot base-path resolution.

use super::DatasetConfig;
use crate::error::{DatasetPathError, Result};
use crate::layout::Split;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted when no base path is supplied.
pub const BASE_PATH_ENV: &str = "DATASET_BASE_PATH";

/// Builder for [`DatasetConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfigBuilder {
    target: String,
    base_path: Option<PathBuf>,
    train_dir: String,
    validation_dir: String,
    test_dir: String,
}

impl DatasetConfigBuilder {
    /// Create a builder for `target` with default split names.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            base_path: None,
            train_dir: Split::Train.default_dir().to_string(),
            validation_dir: Split::Validation.default_dir().to_string(),
            test_dir: Split::Test.default_dir().to_string(),
        }
    }

    /// Replace the dataset target.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the base path explicitly, bypassing the environment.
    pub fn base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Set the base path if `base_path` is `Some`, keep the current one otherwise.
    pub fn maybe_base_path(mut self, base_path: Option<impl Into<PathBuf>>) -> Self {
        if let Some(path) = base_path {
            self.base_path = Some(path.into());
        }
        self
    }

    pub fn train_dir(mut self, name: impl Into<String>) -> Self {
        self.train_dir = name.into();
        self
    }

    pub fn validation_dir(mut self, name: impl Into<String>) -> Self {
        self.validation_dir = name.into();
        self
    }

    pub fn test_dir(mut self, name: impl Into<String>) -> Self {
        self.test_dir = name.into();
        self
    }

    /// Set the directory name for `split`.
    pub fn split_dir(self, split: Split, name: impl Into<String>) -> Self {
        match split {
            Split::Train => self.train_dir(name),
            Split::Validation => self.validation_dir(name),
            Split::Test => self.test_dir(name),
        }
    }

    /// Resolve the base path against the process environment and build.
    pub fn build(self) -> Result<DatasetConfig> {
        self.build_with_env(|key| std::env::var_os(key))
    }

    /// Build, consulting `lookup` for [`BASE_PATH_ENV`] if no base path was set.
    ///
    /// `lookup` is called at most once. A present-but-empty value is accepted.
    pub fn build_with_env<F>(self, lookup: F) -> Result<DatasetConfig>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        let base_path = match self.base_path {
            Some(path) => path,
            None => match lookup(BASE_PATH_ENV) {
                Some(value) => {
                    log::debug!("Using dataset base path from ${BASE_PATH_ENV}: {value:?}");
                    PathBuf::from(value)
                }
                None => {
                    return Err(DatasetPathError::UnknownBasePath {
                        variable: BASE_PATH_ENV.to_string(),
                    })
                }
            },
        };

        Ok(DatasetConfig {
            target: self.target,
            base_path,
            train_dir: self.train_dir,
            validation_dir: self.validation_dir,
            test_dir: self.test_dir,
        })
    }
}
