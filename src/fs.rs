//! Directory listing backends.
//!
//! Class inference only needs one capability from the filesystem: the names of
//! the subdirectories directly under a path. [`DirectoryLister`] is that seam.

use crate::error::{DatasetPathError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the subdirectories of a directory.
pub trait DirectoryLister {
    /// Names of the entries under `path` that are directories, in listing
    /// order. Regular files are skipped; errors are returned, never swallowed.
    fn subdirectories(&self, path: &Path) -> Result<Vec<String>>;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn subdirectories(&self, path: &Path) -> Result<Vec<String>> {
        (**self).subdirectories(path)
    }
}

/// Lists the real filesystem with [`std::fs::read_dir`].
///
/// Symbolic links are followed: a link to a directory counts as a directory,
/// a dangling link is skipped. A subdirectory whose name is not valid UTF-8
/// fails with [`DatasetPathError::NonUtf8Name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectoryLister;

impl DirectoryLister for StdDirectoryLister {
    fn subdirectories(&self, path: &Path) -> Result<Vec<String>> {
        let context = || format!("listing {}", path.display());
        let mut names = Vec::new();

        for entry in fs::read_dir(path).map_err(|e| DatasetPathError::io(context(), e))? {
            let entry = entry.map_err(|e| DatasetPathError::io(context(), e))?;
            let is_dir = match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_dir(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => {
                    return Err(DatasetPathError::io(
                        format!("inspecting {}", entry.path().display()),
                        e,
                    ))
                }
            };
            if is_dir {
                let name = entry
                    .file_name()
                    .into_string()
                    .map_err(|_| DatasetPathError::NonUtf8Name { path: entry.path() })?;
                names.push(name);
            }
        }

        Ok(names)
    }
}

/// In-memory directory tree, for tests and dry runs.
///
/// Directories are registered by full path; listing a path returns its
/// registered children in insertion order. Listing an unknown path fails with
/// [`io::ErrorKind::NotFound`], like the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLister {
    dirs: BTreeMap<PathBuf, Vec<String>>,
    files: BTreeSet<PathBuf>,
}

impl InMemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and all of its ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.dirs.entry(path.to_path_buf()).or_default();
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if !parent.as_os_str().is_empty() {
                self.add_dir(parent);
                let children = self.dirs.entry(parent.to_path_buf()).or_default();
                let name = name.to_string_lossy().into_owned();
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
        self
    }

    /// Register a regular file; its parent directory is created.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path.to_path_buf());
        self
    }

    /// Register `root/name` for each name, in the given order.
    pub fn add_children<I, S>(&mut self, root: impl AsRef<Path>, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = root.as_ref();
        self.add_dir(root);
        for name in names {
            self.add_dir(root.join(name.as_ref()));
        }
        self
    }
}

impl DirectoryLister for InMemoryLister {
    fn subdirectories(&self, path: &Path) -> Result<Vec<String>> {
        self.dirs.get(path).cloned().ok_or_else(|| {
            let kind = if self.files.contains(path) {
                io::ErrorKind::Other
            } else {
                io::ErrorKind::NotFound
            };
            DatasetPathError::io(
                format!("listing {}", path.display()),
                io::Error::new(kind, "no such directory"),
            )
        })
    }
}
