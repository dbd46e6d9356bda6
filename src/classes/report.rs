//! Outcome of class inference.

use crate::layout::Split;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What one split contained when it was listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitClasses {
    pub split: Split,
    pub path: PathBuf,
    /// Subdirectory names, sorted.
    pub classes: Vec<String>,
}

/// Result of comparing the class sets of the three splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ClassInference {
    /// All splits hold the same class names (sorted). May be empty.
    Consistent { classes: Vec<String> },
    /// At least one pair of splits disagrees.
    Inconsistent { splits: Vec<SplitClasses> },
}

impl ClassInference {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent { .. })
    }

    /// Sorted class names, or `None` when the splits disagree.
    pub fn classes(&self) -> Option<&[String]> {
        match self {
            Self::Consistent { classes } => Some(classes),
            Self::Inconsistent { .. } => None,
        }
    }

    /// Flat list of classes; empty when the splits disagree.
    pub fn into_classes(self) -> Vec<String> {
        match self {
            Self::Consistent { classes } => classes,
            Self::Inconsistent { .. } => Vec::new(),
        }
    }

    /// Each class joined onto `split_path`, or `None` when the splits disagree.
    pub fn class_paths(&self, split_path: &Path) -> Option<Vec<PathBuf>> {
        self.classes().map(|classes| classes.iter().map(|c| split_path.join(c)).collect())
    }

    /// Format as human-readable report.
    pub fn to_report(&self) -> String {
        match self {
            Self::Consistent { classes } => {
                let mut report = format!("Classes: {} found\n", classes.len());
                for class in classes {
                    report.push_str(&format!("  {class}\n"));
                }
                report
            }
            Self::Inconsistent { splits } => {
                let mut report = String::from("Class inconsistencies found:\n");
                for split in splits {
                    report.push_str(&format!(
                        "  Split={}, Path={}, Classes={:?}\n",
                        split.split,
                        split.path.display(),
                        split.classes
                    ));
                }
                report
            }
        }
    }
}
