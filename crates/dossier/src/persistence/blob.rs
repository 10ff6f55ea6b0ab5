//! Binary record blobs.
//!
//! Format:
//! - 4 bytes: magic (`DSR\x01`)
//! - 4 bytes: format version (u32 little-endian)
//! - 32 bytes: SHA-256 of the payload
//! - N bytes: rkyv payload

use std::fs;
use std::path::Path;

use rkyv::util::AlignedVec;
use sha2::{Digest, Sha256};

use crate::error::{DossierError, Result};
use crate::record::Record;

/// Leading bytes of every blob file.
pub const MAGIC_BYTES: [u8; 4] = *b"DSR\x01";

/// Current blob format version.
pub const BLOB_VERSION: u32 = 1;

const DIGEST_LEN: usize = 32;
const HEADER_LEN: usize = 4 + 4 + DIGEST_LEN;

/// Save records to a blob file.
pub fn save_blob(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(records)?;

    super::write_atomic(path, &bytes)?;

    tracing::debug!(path = %path.display(), records = records.len(), "saved blob");
    Ok(())
}

/// Load records from a blob file written by [`save_blob`].
pub fn load_blob(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| DossierError::io(path, e))?;

    let records = decode(&bytes, path)?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded blob");
    Ok(records)
}

pub(super) fn encode(records: &[Record]) -> Result<Vec<u8>> {
    let payload = rkyv::to_bytes::<rkyv::rancor::Error>(&records.to_vec())
        .map_err(|e| DossierError::Serialization(format!("rkyv serialization failed: {e}")))?;

    let digest = Sha256::digest(&payload);

    let mut output = Vec::with_capacity(HEADER_LEN + payload.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&BLOB_VERSION.to_le_bytes());
    output.extend_from_slice(&digest);
    output.extend_from_slice(&payload);

    Ok(output)
}

fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Record>> {
    let invalid = |reason: &str| DossierError::InvalidFormat {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if bytes.len() < HEADER_LEN {
        return Err(invalid("file too small"));
    }

    if bytes[0..4] != MAGIC_BYTES {
        return Err(invalid("not a record blob (invalid magic bytes)"));
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > BLOB_VERSION {
        return Err(DossierError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: version,
            max_supported: BLOB_VERSION,
        });
    }

    let expected = &bytes[8..HEADER_LEN];
    let payload = &bytes[HEADER_LEN..];
    if Sha256::digest(payload).as_slice() != expected {
        return Err(invalid("checksum mismatch"));
    }

    // rkyv needs the payload at its archive alignment.
    let mut aligned = AlignedVec::<16>::with_capacity(payload.len());
    aligned.extend_from_slice(payload);

    rkyv::from_bytes::<Vec<Record>, rkyv::rancor::Error>(&aligned).map_err(|e| {
        DossierError::Deserialization {
            path: path.to_path_buf(),
            message: format!("rkyv deserialization failed: {e}"),
        }
    })
}
