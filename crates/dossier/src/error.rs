//! Error types for the Dossier library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Dossier operations.
///
/// Validation failures are not errors: a record that breaks a field rule is
/// reported through its validation outcome, never through this type.
#[derive(Debug, Error)]
pub enum DossierError {
    /// Error reading, writing or creating a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a valid record collection.
    #[error("Parse error in '{path}' at line {line}, column {column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Blob file is truncated, has a foreign header or fails its checksum.
    #[error("Invalid blob file '{path}': {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Blob file was written by a newer format version.
    #[error("Blob file '{path}' has version {found} (maximum supported: {max_supported})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        max_supported: u32,
    },

    /// Records could not be encoded into the blob format.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Blob payload could not be decoded.
    #[error("Failed to decode blob '{path}': {message}")]
    Deserialization { path: PathBuf, message: String },

    /// A record has no numeric value for the requested sort key.
    #[error("Record {index} has non-numeric {field} value '{value}'")]
    SortKey {
        index: usize,
        field: String,
        value: String,
    },

    /// Field name is not one of the nine recognised fields.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Reloading a freshly written blob did not reproduce the records.
    #[error("Round-trip check failed for '{path}': reloaded records differ")]
    RoundTrip { path: PathBuf },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DossierError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DossierError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Dossier operations.
pub type Result<T> = std::result::Result<T, DossierError>;
