//! Persistence for record collections: JSON text files and binary blobs.

mod blob;
mod output;
mod text;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{DossierError, Result};

pub use blob::{BLOB_VERSION, MAGIC_BYTES, load_blob, save_blob};
pub use output::OutputSet;
pub use text::{load, save_text};

/// Write bytes through a temp file and rename, creating parent directories.
///
/// A failed write leaves any existing file at `path` untouched.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = write_temp(path, bytes)?;
    publish(&temp_path, path)
}

/// Write bytes to the temp file next to `path` and return the temp path.
///
/// Fails before writing anything if `path` is an existing directory.
fn write_temp(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if path.is_dir() {
        let err = io::Error::new(io::ErrorKind::IsADirectory, "output path is a directory");
        return Err(DossierError::io(path, err));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| DossierError::io(parent, e))?;
        }
    }

    let temp_path = temp_path(path);

    let result = File::create(&temp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(DossierError::io(&temp_path, e));
    }

    Ok(temp_path)
}

/// Move a written temp file into place. The temp file is removed on failure.
fn publish(temp_path: &Path, path: &Path) -> Result<()> {
    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        DossierError::io(path, e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
