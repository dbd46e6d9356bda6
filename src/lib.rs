//! Directory layout resolution and class inference for split image datasets.
//!
//! A dataset lives at `base_path/target` and is split into `train`,
//! `validation` and `test` subdirectories, each holding one subdirectory per
//! class:
//!
//! ```text
//! /home/user/datasets/cats_vs_dogs/{train,validation,test}/{cat,dog}
//! ```
//!
//! This crate provides:
//! - [`DatasetConfig`]: immutable configuration, base path resolved once
//!   (explicitly or from `$DATASET_BASE_PATH`)
//! - [`DatasetLayout`]: the four derived paths, pure and deterministic
//! - [`infer_classes`]: lists the splits and checks that their class sets agree
//! - [`DatasetPathManager`]: all of the above behind one handle
//! - [`DirectoryLister`]: the filesystem seam, with real and in-memory backends

pub mod classes;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod layout;
pub mod manager;

pub use classes::{
    get_classes, get_test_class_paths, infer_classes, same_classes, ClassInference, SplitClasses,
};
pub use config::{load_config, DatasetConfig, DatasetConfigBuilder, DatasetConfigFile, BASE_PATH_ENV};
pub use error::{DatasetPathError, Result};
pub use fs::{DirectoryLister, InMemoryLister, StdDirectoryLister};
pub use layout::{DatasetLayout, Split};
pub use manager::{DatasetPathManager, DatasetPathManagerBuilder};
