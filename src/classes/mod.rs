//! Class inference from split subdirectories.
//!
//! A class is a subdirectory name that appears under *every* split. When the
//! three splits disagree the result is [`ClassInference::Inconsistent`]: a soft
//! failure carrying each split's listing for diagnosis, not an error.
//!
//! Every call re-reads the filesystem. A tree mutated between the three
//! listings can therefore be reported as inconsistent.
//!
//! # Example
//!
//! ```
//! use dataset_path_manager::{infer_classes, InMemoryLister};
//!
//! let mut fs = InMemoryLister::new();
//! fs.add_children("/d/train", ["dog", "cat"])
//!     .add_children("/d/validation", ["cat", "dog"])
//!     .add_children("/d/test", ["dog", "cat"]);
//!
//! let inference = infer_classes(&fs, "/d/train", "/d/validation", "/d/test").unwrap();
//! assert_eq!(inference.classes(), Some(&["cat".to_string(), "dog".to_string()][..]));
//! ```

mod inference;
mod report;


pub use inference::{get_classes, get_test_class_paths, infer_classes, same_classes};
pub use report::{ClassInference, SplitClasses};
