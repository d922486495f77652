//! File helpers used while loading the presentation dataset.

use std::{fs, path::Path};

use sha2::{Digest, Sha256};

use crate::lib::errors::DatasetError;

/// Raw dataset bytes together with their SHA256 fingerprint.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub text: String,
    pub sha256: String,
}

/// Read a UTF-8 document from disk and fingerprint it.
pub fn read_source(path: &Path) -> Result<SourceDocument, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let sha256 = sha256_hex(text.as_bytes());
    Ok(SourceDocument { text, sha256 })
}

/// Return the SHA256 of a byte slice as a hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
