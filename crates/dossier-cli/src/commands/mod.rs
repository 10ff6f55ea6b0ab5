//! CLI command implementations.

pub mod sort;
pub mod validate;

use std::path::{Path, PathBuf};

/// `<dir>/<stem>.<suffix>` next to the input file.
pub fn sibling_path(file: &Path, suffix: &str) -> PathBuf {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    let mut path = file.to_path_buf();
    path.set_file_name(format!("{}.{}", stem, suffix));
    path
}
