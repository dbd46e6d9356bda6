//! Error types with actionable diagnostics.
//!
//! Every error carries enough context (the variable consulted, the path being
//! listed) to fix the problem without reading the source.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dataset path operations.
pub type Result<T> = std::result::Result<T, DatasetPathError>;

/// Errors that can occur while resolving or inspecting a dataset layout.
///
/// An inconsistent class layout is deliberately *not* an error; see
/// [`crate::ClassInference`].
#[derive(Error, Debug)]
pub enum DatasetPathError {
    /// No base path was given and the fallback environment variable is unset.
    #[error("No dataset base path was provided, neither as argument nor found in ${variable}\n  → Pass a base path explicitly or export {variable}=/path/to/datasets")]
    UnknownBasePath { variable: String },

    /// Listing a directory failed.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// A subdirectory name cannot be represented as a class name.
    #[error("Directory name is not valid UTF-8: {}\n  → Rename the directory so its name is valid UTF-8", path.display())]
    NonUtf8Name { path: PathBuf },
}

impl DatasetPathError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownBasePath { .. } | Self::ConfigParsing { .. } | Self::NonUtf8Name { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownBasePath { .. } => "D001",
            Self::ConfigParsing { .. } => "D002",
            Self::NonUtf8Name { .. } => "D003",
            Self::Io { .. } => "D050",
        }
    }
}
