//! Human-readable JSON record files.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{DossierError, Result};
use crate::record::Record;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load a JSON array of records.
///
/// A missing recognised key or a value of the wrong type fails the whole
/// file; no partial collection is returned.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| DossierError::io(path, e))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let records: Vec<Record> =
        serde_json::from_slice(bytes).map_err(|e| DossierError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Save records as pretty-printed JSON with four-space indentation.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn save_text(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(records)?;

    super::write_atomic(path, &bytes)?;

    tracing::debug!(path = %path.display(), records = records.len(), "saved records");
    Ok(())
}

pub(super) fn encode(records: &[Record]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    records.serialize(&mut serializer)?;
    Ok(bytes)
}
