//! Unit tests for configuration resolution

use super::*;
use crate::error::DatasetPathError;
use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

fn no_env(_: &str) -> Option<OsString> {
    None
}

#[test]
fn test_defaults_for_split_names() {
    let config = DatasetConfig::builder("mnist").base_path("/data").build_with_env(no_env).unwrap();
    assert_eq!(config.train_dir(), "train");
    assert_eq!(config.validation_dir(), "validation");
    assert_eq!(config.test_dir(), "test");
}

#[test]
fn test_explicit_base_path_wins_over_env() {
    let config = DatasetConfig::builder("mnist")
        .base_path("/explicit")
        .build_with_env(|_| Some(OsString::from("/from-env")))
        .unwrap();
    assert_eq!(config.base_path(), Path::new("/explicit"));
}

#[test]
fn test_explicit_base_path_does_not_consult_env() {
    let config = DatasetConfig::builder("mnist")
        .base_path("/explicit")
        .build_with_env(|_| panic!("environment must not be read"))
        .unwrap();
    assert_eq!(config.target(), "mnist");
}

#[test]
fn test_env_fallback_reads_named_variable() {
    let mut asked = None;
    let config = DatasetConfig::builder("mnist")
        .build_with_env(|key| {
            asked = Some(key.to_string());
            Some(OsString::from("/from-env"))
        })
        .unwrap();
    assert_eq!(asked.as_deref(), Some(BASE_PATH_ENV));
    assert_eq!(config.base_path(), Path::new("/from-env"));
}

#[test]
fn test_missing_base_path_is_unknown_base_path() {
    let err = DatasetConfig::builder("mnist").build_with_env(no_env).unwrap_err();
    match err {
        DatasetPathError::UnknownBasePath { variable } => assert_eq!(variable, BASE_PATH_ENV),
        other => panic!("Expected UnknownBasePath, got {other:?}"),
    }
}

#[test]
fn test_empty_env_value_is_accepted() {
    let config =
        DatasetConfig::builder("mnist").build_with_env(|_| Some(OsString::new())).unwrap();
    assert_eq!(config.base_path(), Path::new(""));
}

#[test]
fn test_split_dir_setter_matches_named_setters() {
    let config = DatasetConfig::builder("mnist")
        .base_path("/data")
        .split_dir(Split::Train, "tr")
        .split_dir(Split::Validation, "va")
        .split_dir(Split::Test, "te")
        .build_with_env(no_env)
        .unwrap();
    assert_eq!(config.split_dir(Split::Train), "tr");
    assert_eq!(config.split_dir(Split::Validation), "va");
    assert_eq!(config.split_dir(Split::Test), "te");
}

#[test]
fn test_maybe_base_path_none_keeps_previous() {
    let config = DatasetConfig::builder("mnist")
        .base_path("/data")
        .maybe_base_path(None::<PathBuf>)
        .build_with_env(no_env)
        .unwrap();
    assert_eq!(config.base_path(), Path::new("/data"));
}

#[test]
fn test_yaml_minimal_file() {
    let file = DatasetConfigFile::from_yaml("target: flowers\n", Path::new("cfg.yaml")).unwrap();
    assert_eq!(file.target, "flowers");
    assert!(file.base_path.is_none());

    let config = file.into_builder().build_with_env(|_| Some("/datasets".into())).unwrap();
    assert_eq!(config.base_path(), Path::new("/datasets"));
    assert_eq!(config.train_dir(), "train");
}

#[test]
fn test_yaml_full_file() {
    let yaml = "target: flowers\nbase_path: /srv/data\ntrain_dir: tr\nvalidation_dir: val\ntest_dir: holdout\n";
    let config = DatasetConfigFile::from_yaml(yaml, Path::new("cfg.yaml"))
        .unwrap()
        .into_builder()
        .build_with_env(no_env)
        .unwrap();
    assert_eq!(config.base_path(), Path::new("/srv/data"));
    assert_eq!(config.train_dir(), "tr");
    assert_eq!(config.validation_dir(), "val");
    assert_eq!(config.test_dir(), "holdout");
}

#[test]
fn test_yaml_unknown_field_is_parse_error() {
    let err = DatasetConfigFile::from_yaml("target: a\nbatch_size: 3\n", Path::new("bad.yaml"))
        .unwrap_err();
    assert!(matches!(err, DatasetPathError::ConfigParsing { .. }));
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    writeln!(file, "target: flowers").unwrap();
    writeln!(file, "base_path: /srv/data").unwrap();

    let config = load_config(file.path()).unwrap().build_with_env(no_env).unwrap();
    assert_eq!(config.target(), "flowers");
}

#[test]
fn test_load_config_missing_file_is_io_error() {
    let err = load_config("/nonexistent/dataset.yaml").unwrap_err();
    assert!(matches!(err, DatasetPathError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/dataset.yaml"));
}
