//! YAML dataset descriptions.
//!
//! ```yaml
//! target: cats_vs_dogs
//! base_path: /home/user/datasets   # optional, falls back to $DATASET_BASE_PATH
//! validation_dir: val              # optional, defaults to "validation"
//! ```

use super::{DatasetConfig, DatasetConfigBuilder};
use crate::error::{DatasetPathError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk form of a dataset configuration.
///
/// Split names are optional here so a file only has to mention what it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfigFile {
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<String>,
}

impl DatasetConfigFile {
    /// Parse a YAML document. `origin` is only used for error messages.
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| DatasetPathError::ConfigParsing {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Convert into a builder; nothing is resolved yet.
    pub fn into_builder(self) -> DatasetConfigBuilder {
        let mut builder = DatasetConfigBuilder::new(self.target).maybe_base_path(self.base_path);
        if let Some(name) = self.train_dir {
            builder = builder.train_dir(name);
        }
        if let Some(name) = self.validation_dir {
            builder = builder.validation_dir(name);
        }
        if let Some(name) = self.test_dir {
            builder = builder.test_dir(name);
        }
        builder
    }
}

/// Read a YAML dataset description and return an unresolved builder.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<DatasetConfigBuilder> {
    let path = config_path.as_ref();
    let yaml = fs::read_to_string(path)
        .map_err(|e| DatasetPathError::io(format!("reading config {}", path.display()), e))?;
    Ok(DatasetConfigFile::from_yaml(&yaml, path)?.into_builder())
}

impl DatasetConfig {
    /// Load and resolve a YAML dataset description in one step.
    pub fn from_yaml_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        load_config(config_path)?.build()
    }
}
