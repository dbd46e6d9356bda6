//! Dataset path manager: resolved layout plus class inference.
//!
//! # Example
//!
//! ```
//! use dataset_path_manager::{DatasetPathManager, InMemoryLister};
//! use std::path::Path;
//!
//! let mut fs = InMemoryLister::new();
//! for split in ["train", "validation", "test"] {
//!     fs.add_children(format!("/home/user/datasets/cats_vs_dogs/{split}"), ["cat", "dog"]);
//! }
//!
//! let manager = DatasetPathManager::builder("cats_vs_dogs")
//!     .base_path("/home/user/datasets")
//!     .build()
//!     .unwrap()
//!     .with_lister(fs);
//!
//! assert_eq!(manager.test_path(), Path::new("/home/user/datasets/cats_vs_dogs/test"));
//! assert_eq!(manager.classes().unwrap(), vec!["cat", "dog"]);
//! ```

use crate::classes::{infer_classes, ClassInference};
use crate::config::{DatasetConfig, DatasetConfigBuilder};
use crate::error::Result;
use crate::fs::{DirectoryLister, StdDirectoryLister};
use crate::layout::{DatasetLayout, Split};
use std::path::{Path, PathBuf};

/// Builder returning a [`DatasetPathManager`] instead of a bare config.
#[derive(Debug, Clone)]
pub struct DatasetPathManagerBuilder {
    config: DatasetConfigBuilder,
}

impl DatasetPathManagerBuilder {
    pub fn base_path(self, base_path: impl Into<PathBuf>) -> Self {
        Self { config: self.config.base_path(base_path) }
    }

    pub fn train_dir(self, name: impl Into<String>) -> Self {
        Self { config: self.config.train_dir(name) }
    }

    pub fn validation_dir(self, name: impl Into<String>) -> Self {
        Self { config: self.config.validation_dir(name) }
    }

    pub fn test_dir(self, name: impl Into<String>) -> Self {
        Self { config: self.config.test_dir(name) }
    }

    /// Resolve the base path (reading `$DATASET_BASE_PATH` if needed).
    pub fn build(self) -> Result<DatasetPathManager> {
        Ok(DatasetPathManager::new(self.config.build()?))
    }
}

/// Resolved dataset layout with class inference over a [`DirectoryLister`].
///
/// Paths are computed once at construction. Classes are re-listed on every
/// call.
#[derive(Debug, Clone)]
pub struct DatasetPathManager<L = StdDirectoryLister> {
    config: DatasetConfig,
    layout: DatasetLayout,
    lister: L,
}

impl DatasetPathManager {
    pub fn builder(target: impl Into<String>) -> DatasetPathManagerBuilder {
        DatasetPathManagerBuilder { config: DatasetConfig::builder(target) }
    }

    /// Manager over the real filesystem.
    pub fn new(config: DatasetConfig) -> Self {
        Self::with_config_and_lister(config, StdDirectoryLister)
    }
}

impl<L: DirectoryLister> DatasetPathManager<L> {
    pub fn with_config_and_lister(config: DatasetConfig, lister: L) -> Self {
        let layout = DatasetLayout::resolve(&config);
        Self { config, layout, lister }
    }

    /// Swap the listing backend, keeping configuration and paths.
    pub fn with_lister<M: DirectoryLister>(self, lister: M) -> DatasetPathManager<M> {
        DatasetPathManager { config: self.config, layout: self.layout, lister }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    /// Dataset name, e.g. `cats_vs_dogs`.
    pub fn dataset_target(&self) -> &str {
        self.config.target()
    }

    /// Root under which datasets live, e.g. `/home/user/datasets`.
    pub fn dataset_base_path(&self) -> &Path {
        self.config.base_path()
    }

    /// `base_path/target`.
    pub fn dataset_path(&self) -> &Path {
        &self.layout.dataset_path
    }

    pub fn training_path(&self) -> &Path {
        &self.layout.train_path
    }

    pub fn validation_path(&self) -> &Path {
        &self.layout.validation_path
    }

    pub fn test_path(&self) -> &Path {
        &self.layout.test_path
    }

    pub fn split_path(&self, split: Split) -> &Path {
        self.layout.split_path(split)
    }

    /// Training, validation and test paths, in that order.
    pub fn paths(&self) -> (&Path, &Path, &Path) {
        self.layout.paths()
    }

    /// List every split and compare their class sets.
    pub fn infer_classes(&self) -> Result<ClassInference> {
        let (train, validation, test) = self.paths();
        infer_classes(&self.lister, train, validation, test)
    }

    /// Sorted class names, empty if the splits disagree.
    pub fn classes(&self) -> Result<Vec<String>> {
        Ok(self.infer_classes()?.into_classes())
    }

    /// Full path of every class under the test split, `None` if the splits
    /// disagree.
    pub fn class_test_paths(&self) -> Result<Option<Vec<PathBuf>>> {
        Ok(self.infer_classes()?.class_paths(self.test_path()))
    }
}
