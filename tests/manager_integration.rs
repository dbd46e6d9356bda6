//! Integration tests for DatasetPathManager over a real directory tree

use dataset_path_manager::{
    ClassInference, DatasetConfig, DatasetPathError, DatasetPathManager, Split,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn make_split(root: &Path, split: &str, classes: &[&str]) {
    let dir = root.join(split);
    fs::create_dir_all(&dir).unwrap();
    for class in classes {
        fs::create_dir_all(dir.join(class)).unwrap();
    }
}

fn manager(base: &Path) -> DatasetPathManager {
    DatasetPathManager::builder("cat_vs_dog").base_path(base).build().unwrap()
}

#[test]
fn test_paths_follow_join_rule() {
    let m = DatasetPathManager::builder("cat_vs_dog")
        .base_path("/home/user/datasets")
        .train_dir("my_training_dir")
        .validation_dir("my_validation_dir")
        .test_dir("my_test_dir")
        .build()
        .unwrap();

    let root = Path::new("/home/user/datasets").join("cat_vs_dog");
    assert_eq!(m.dataset_base_path(), Path::new("/home/user/datasets"));
    assert_eq!(m.dataset_target(), "cat_vs_dog");
    assert_eq!(m.dataset_path(), root);
    assert_eq!(m.training_path(), root.join("my_training_dir"));
    assert_eq!(m.validation_path(), root.join("my_validation_dir"));
    assert_eq!(m.test_path(), root.join("my_test_dir"));
}

#[test]
fn test_stray_files_are_not_classes() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("cat_vs_dog");
    for split in ["train", "validation", "test"] {
        make_split(&root, split, &["a", "b"]);
        fs::write(root.join(split).join("c.txt"), b"").unwrap();
    }

    assert_eq!(manager(base.path()).classes().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_size_mismatch_returns_empty_and_reports() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("cat_vs_dog");
    make_split(&root, "train", &["a", "b"]);
    make_split(&root, "validation", &["a", "b"]);
    make_split(&root, "test", &["a"]);

    let m = manager(base.path());
    assert!(m.classes().unwrap().is_empty());
    assert_eq!(m.class_test_paths().unwrap(), None);

    match m.infer_classes().unwrap() {
        ClassInference::Inconsistent { splits } => {
            let test = splits.iter().find(|s| s.split == Split::Test).unwrap();
            assert_eq!(test.classes, vec!["a"]);
            assert_eq!(test.path, m.test_path());
        }
        other => panic!("Expected Inconsistent, got {other:?}"),
    }
}

#[test]
fn test_class_test_paths_two_classes() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("cat_vs_dog");
    make_split(&root, "train", &["dog", "cat"]);
    make_split(&root, "validation", &["cat", "dog"]);
    make_split(&root, "test", &["dog", "cat"]);

    let m = manager(base.path());
    let expected: Vec<PathBuf> = ["cat", "dog"].iter().map(|c| m.test_path().join(c)).collect();
    assert_eq!(m.class_test_paths().unwrap(), Some(expected));
}

#[test]
fn test_classes_reflect_live_filesystem() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("cat_vs_dog");
    for split in ["train", "validation", "test"] {
        make_split(&root, split, &["a"]);
    }
    let m = manager(base.path());
    assert_eq!(m.classes().unwrap(), vec!["a"]);

    for split in ["train", "validation", "test"] {
        make_split(&root, split, &["b"]);
    }
    assert_eq!(m.classes().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_missing_dataset_propagates_io_error() {
    let base = TempDir::new().unwrap();
    let err = manager(base.path()).classes().unwrap_err();
    assert!(matches!(err, DatasetPathError::Io { .. }));
    assert_eq!(err.code(), "D050");
}

#[test]
fn test_yaml_config_round_trip_through_manager() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("flowers");
    make_split(&root, "tr", &["rose"]);
    make_split(&root, "va", &["rose"]);
    make_split(&root, "te", &["rose"]);

    let config_path = base.path().join("flowers.yaml");
    fs::write(
        &config_path,
        format!(
            "target: flowers\nbase_path: {}\ntrain_dir: tr\nvalidation_dir: va\ntest_dir: te\n",
            base.path().display()
        ),
    )
    .unwrap();

    let m = DatasetPathManager::new(DatasetConfig::from_yaml_file(&config_path).unwrap());
    assert_eq!(m.classes().unwrap(), vec!["rose"]);
}
