//! TOML document I/O
//!
//! Reads base and overlay documents from disk and writes the merged
//! result. Raw file bytes are digested on load so the merge report can
//! record exactly which inputs produced an output.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use toml::value::Table;

/// Document I/O errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Write error: {0}")]
    Write(String),
}

/// A parsed TOML document plus the provenance of the bytes it came from.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Where the document was read from
    pub path: PathBuf,

    /// SHA-256 digest of the raw file bytes
    pub digest: String,

    /// The parsed top-level table
    pub table: Table,
}

impl SourceDocument {
    /// Load and parse a TOML file, recording its raw-byte digest.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path)
            .map_err(|e| DocumentError::Io(format!("{}: {}", path.display(), e)))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes).map_err(|e| {
            DocumentError::Parse(format!("{}: invalid UTF-8: {}", path.display(), e))
        })?;

        let table: Table = toml::from_str(&contents)
            .map_err(|e| DocumentError::Parse(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            digest,
            table,
        })
    }
}

/// Serialize a merged document and write it to `path`.
pub fn write_document(path: &Path, table: &Table) -> Result<(), DocumentError> {
    let rendered = toml::to_string_pretty(table)
        .map_err(|e| DocumentError::Write(format!("{}: {}", path.display(), e)))?;

    fs::write(path, rendered)
        .map_err(|e| DocumentError::Write(format!("{}: {}", path.display(), e)))
}
