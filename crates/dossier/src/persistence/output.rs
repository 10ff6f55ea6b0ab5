//! Output files written as one unit.
//!
//! Every file is first written to a temp file next to its target. Nothing
//! appears at a target path until [`OutputSet::commit`] renames all of them.
//! If any rename fails, files already moved into place by this commit are
//! removed again. Dropping an uncommitted set deletes its temp files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DossierError, Result};
use crate::record::Record;

use super::{blob, text};

/// A group of staged output files.
#[derive(Debug, Default)]
pub struct OutputSet {
    /// `(temp path, target path)` in staging order.
    staged: Vec<(PathBuf, PathBuf)>,
}

impl OutputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage records as a JSON text file. Returns the temp file path.
    pub fn stage_text(&mut self, path: impl AsRef<Path>, records: &[Record]) -> Result<&Path> {
        let bytes = text::encode(records)?;
        self.stage(path.as_ref(), &bytes)
    }

    /// Stage records as a blob file. Returns the temp file path.
    pub fn stage_blob(&mut self, path: impl AsRef<Path>, records: &[Record]) -> Result<&Path> {
        let bytes = blob::encode(records)?;
        self.stage(path.as_ref(), &bytes)
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Move every staged file to its target path.
    pub fn commit(mut self) -> Result<()> {
        let mut pending = std::mem::take(&mut self.staged).into_iter();
        let mut published: Vec<PathBuf> = Vec::new();

        while let Some((temp_path, path)) = pending.next() {
            if let Err(e) = super::publish(&temp_path, &path) {
                for (temp_path, _) in pending {
                    let _ = fs::remove_file(temp_path);
                }
                for path in &published {
                    let _ = fs::remove_file(path);
                }
                tracing::debug!(path = %path.display(), "output commit rolled back");
                return Err(e);
            }
            published.push(path);
        }

        tracing::debug!(files = published.len(), "committed outputs");
        Ok(())
    }

    fn stage(&mut self, path: &Path, bytes: &[u8]) -> Result<&Path> {
        if self.staged.iter().any(|(_, target)| target == path) {
            return Err(DossierError::InvalidFormat {
                path: path.to_path_buf(),
                reason: "output path given twice".to_string(),
            });
        }

        let temp_path = super::write_temp(path, bytes)?;
        self.staged.push((temp_path, path.to_path_buf()));

        Ok(&self.staged[self.staged.len() - 1].0)
    }
}

impl Drop for OutputSet {
    fn drop(&mut self) {
        for (temp_path, _) in &self.staged {
            let _ = fs::remove_file(temp_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{load, load_blob};
    use crate::record::FieldValue;

    fn sample() -> Record {
        Record {
            email: "zaitsev@list.ru".to_string(),
            weight: FieldValue::Integer(77),
            national_id: "44455566677".to_string(),
            document_series: "19 84".to_string(),
            occupation: "Геолог".to_string(),
            age: FieldValue::Integer(38),
            category_a: "Умеренные".to_string(),
            category_b: "Деизм".to_string(),
            address: "ул. Лесная 3".to_string(),
        }
    }

    #[test]
    fn test_nothing_visible_before_commit() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("sorted.json");
        let blob_path = dir.path().join("sorted.bin");

        let mut outputs = OutputSet::new();
        outputs.stage_text(&text_path, &[sample()]).unwrap();
        let staged_blob = outputs.stage_blob(&blob_path, &[sample()]).unwrap().to_path_buf();

        assert_eq!(outputs.len(), 2);
        assert!(!text_path.exists());
        assert!(!blob_path.exists());
        assert_eq!(load_blob(&staged_blob).unwrap(), vec![sample()]);

        outputs.commit().unwrap();

        assert_eq!(load(&text_path).unwrap(), vec![sample()]);
        assert_eq!(load_blob(&blob_path).unwrap(), vec![sample()]);
        assert!(!staged_blob.exists());
    }

    #[test]
    fn test_directory_target_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let valid_path = dir.path().join("out/valid.json");
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();

        let mut outputs = OutputSet::new();
        outputs.stage_text(&valid_path, &[sample()]).unwrap();
        let result = outputs.stage_text(&blocked, &[]);

        assert!(matches!(result, Err(DossierError::Io { .. })));
        drop(outputs);

        assert!(!valid_path.exists());
        assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_commit_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        let mut outputs = OutputSet::new();
        outputs.stage_text(&first, &[sample()]).unwrap();
        outputs.stage_text(&second, &[]).unwrap();

        // The second target turns into a directory after staging.
        fs::create_dir(&second).unwrap();
        let result = outputs.commit();

        assert!(matches!(result, Err(DossierError::Io { .. })));
        assert!(!first.exists());
        assert!(second.is_dir());
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path() != second)
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_drop_removes_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.json");

        let mut outputs = OutputSet::new();
        let staged = outputs.stage_text(&path, &[sample()]).unwrap().to_path_buf();
        assert!(staged.exists());

        drop(outputs);

        assert!(!staged.exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_same_target_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let mut outputs = OutputSet::new();
        outputs.stage_text(&path, &[sample()]).unwrap();
        let result = outputs.stage_blob(&path, &[sample()]);

        assert!(matches!(result, Err(DossierError::InvalidFormat { .. })));
    }
}
