//! Listing and pairwise comparison of split class sets.

use super::report::{ClassInference, SplitClasses};
use crate::error::Result;
use crate::fs::DirectoryLister;
use crate::layout::Split;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Set equality on class names: cardinality first, then membership.
///
/// Order and duplicate entries are irrelevant.
pub fn same_classes<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let a: BTreeSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: BTreeSet<&str> = b.iter().map(AsRef::as_ref).collect();
    a.len() == b.len() && a.iter().all(|name| b.contains(name))
}

/// List the three splits and compare their class sets pairwise.
///
/// Filesystem errors propagate; disagreement between splits does not (see
/// [`ClassInference::Inconsistent`]).
pub fn infer_classes<L: DirectoryLister>(
    lister: L,
    train_path: impl AsRef<Path>,
    validation_path: impl AsRef<Path>,
    test_path: impl AsRef<Path>,
) -> Result<ClassInference> {
    let paths = [train_path.as_ref(), validation_path.as_ref(), test_path.as_ref()];

    let mut splits = Vec::with_capacity(paths.len());
    for (split, path) in Split::ALL.into_iter().zip(paths) {
        let mut classes = lister.subdirectories(path)?;
        classes.sort();
        log::debug!("{split} split {} holds {} classes", path.display(), classes.len());
        splits.push(SplitClasses { split, path: path.to_path_buf(), classes });
    }

    let mut consistent = true;
    for i in 0..splits.len() {
        for j in (i + 1)..splits.len() {
            if !same_classes(splits[i].classes.as_slice(), splits[j].classes.as_slice()) {
                log::debug!(
                    "{} and {} splits disagree on classes",
                    splits[i].split,
                    splits[j].split
                );
                consistent = false;
            }
        }
    }

    if !consistent {
        log::warn!("Class inconsistencies found:");
        for split in &splits {
            log::warn!("\tPath={}, Classes={:?}", split.path.display(), split.classes);
        }
        return Ok(ClassInference::Inconsistent { splits });
    }

    let classes: BTreeSet<String> = splits.swap_remove(0).classes.into_iter().collect();
    Ok(ClassInference::Consistent { classes: classes.into_iter().collect() })
}

/// Sorted class names common to all splits, or an empty list if they disagree.
///
/// An empty result is ambiguous (no classes vs. inconsistent); use
/// [`infer_classes`] to tell the two apart.
pub fn get_classes<L: DirectoryLister>(
    lister: L,
    train_path: impl AsRef<Path>,
    validation_path: impl AsRef<Path>,
    test_path: impl AsRef<Path>,
) -> Result<Vec<String>> {
    Ok(infer_classes(lister, train_path, validation_path, test_path)?.into_classes())
}

/// Every class joined onto `test_split_path`, or `None` if the splits disagree.
///
/// A consistent layout with no classes yields `Some(vec![])`.
pub fn get_test_class_paths<L: DirectoryLister>(
    lister: L,
    train_path: impl AsRef<Path>,
    validation_path: impl AsRef<Path>,
    test_path: impl AsRef<Path>,
    test_split_path: impl AsRef<Path>,
) -> Result<Option<Vec<PathBuf>>> {
    let inference = infer_classes(lister, train_path, validation_path, test_path)?;
    Ok(inference.class_paths(test_split_path.as_ref()))
}
