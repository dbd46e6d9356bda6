//! Deterministic path construction for a split dataset.
//!
//! A dataset named `cats_vs_dogs` under `/home/user/datasets` resolves to:
//!
//! ```text
//! /home/user/datasets/cats_vs_dogs            dataset path
//! /home/user/datasets/cats_vs_dogs/train      training split
//! /home/user/datasets/cats_vs_dogs/validation validation split
//! /home/user/datasets/cats_vs_dogs/test       test split
//! ```

use crate::config::DatasetConfig;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// All splits, in train / validation / test order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    /// Default subdirectory name for this split.
    pub fn default_dir(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_dir())
    }
}

/// The four paths derived from a [`DatasetConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetLayout {
    pub dataset_path: PathBuf,
    pub train_path: PathBuf,
    pub validation_path: PathBuf,
    pub test_path: PathBuf,
}

impl DatasetLayout {
    /// Resolve the layout for a configuration. Pure; no filesystem access.
    pub fn resolve(config: &DatasetConfig) -> Self {
        let dataset_path = config.base_path().join(config.target());
        Self {
            train_path: dataset_path.join(config.split_dir(Split::Train)),
            validation_path: dataset_path.join(config.split_dir(Split::Validation)),
            test_path: dataset_path.join(config.split_dir(Split::Test)),
            dataset_path,
        }
    }

    /// Path of a single split.
    pub fn split_path(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train_path,
            Split::Validation => &self.validation_path,
            Split::Test => &self.test_path,
        }
    }

    /// Training, validation and test paths, in that order.
    pub fn paths(&self) -> (&Path, &Path, &Path) {
        (&self.train_path, &self.validation_path, &self.test_path)
    }
}
