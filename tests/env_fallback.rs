//! Base-path fallback through the real process environment.
//!
//! Kept in its own test binary, with a single test, because it mutates
//! `DATASET_BASE_PATH`.

use dataset_path_manager::{DatasetConfig, DatasetLayout, DatasetPathError, BASE_PATH_ENV};
use std::path::Path;

#[test]
fn test_env_fallback_lifecycle() {
    std::env::remove_var(BASE_PATH_ENV);
    let err = DatasetConfig::builder("mnist").build().unwrap_err();
    assert!(matches!(err, DatasetPathError::UnknownBasePath { .. }));
    assert!(err.is_user_error());

    // Explicit base path needs no environment
    let config = DatasetConfig::builder("mnist").base_path("/explicit").build().unwrap();
    assert_eq!(DatasetLayout::resolve(&config).dataset_path, Path::new("/explicit/mnist"));

    std::env::set_var(BASE_PATH_ENV, "/from-env");
    let config = DatasetConfig::builder("mnist").build().unwrap();
    assert_eq!(config.base_path(), Path::new("/from-env"));

    // Resolved once: later changes do not leak into an existing config
    std::env::set_var(BASE_PATH_ENV, "/changed");
    assert_eq!(config.base_path(), Path::new("/from-env"));

    std::env::remove_var(BASE_PATH_ENV);
}
