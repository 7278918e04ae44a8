//! Merge report with provenance
//!
//! Captures one merge run: which inputs (path + digest) produced which
//! output, and what changed. The human-readable change lines live on
//! [`Change`](crate::merge::Change); this is the machine-readable record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::SourceDocument;
use crate::merge::Change;

/// Schema version for the merge report
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "toml-overlay/merge_report@1";

/// Role a source document played in the merge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceRole {
    Base,
    Overlay,
}

/// A contributing input document with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Role of this source
    pub role: SourceRole,

    /// File path the document was read from
    pub path: String,

    /// SHA-256 digest of raw file bytes
    pub digest: String,
}

/// Record of one merge run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this merge was computed
    pub created_at: DateTime<Utc>,

    /// Where the merged document was (or would be) written
    pub output_path: String,

    /// Contributing inputs, base first
    pub sources: Vec<SourceInfo>,

    /// Sections inserted whole
    pub sections_added: Vec<String>,

    /// Keys set inside existing sections, as "section.key" paths
    pub keys_updated: Vec<String>,

    /// Non-table sections replaced wholesale
    pub sections_replaced: Vec<String>,

    /// True when the overlay contributed nothing new
    pub unchanged: bool,
}

impl MergeReport {
    /// Build a report from the two inputs and the applied changes.
    pub fn new(
        base: &SourceDocument,
        overlay: &SourceDocument,
        output_path: &Path,
        changes: &[Change],
    ) -> Self {
        let mut sections_added = Vec::new();
        let mut keys_updated = Vec::new();
        let mut sections_replaced = Vec::new();

        for change in changes {
            match change {
                Change::AddedSection { section } => sections_added.push(section.clone()),
                Change::SetKey { section, key, .. } => {
                    keys_updated.push(format!("{}.{}", section, key))
                }
                Change::ReplacedSection { section, .. } => {
                    sections_replaced.push(section.clone())
                }
            }
        }

        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            output_path: output_path.to_string_lossy().to_string(),
            sources: vec![
                SourceInfo {
                    role: SourceRole::Base,
                    path: base.path.to_string_lossy().to_string(),
                    digest: base.digest.clone(),
                },
                SourceInfo {
                    role: SourceRole::Overlay,
                    path: overlay.path.to_string_lossy().to_string(),
                    digest: overlay.digest.clone(),
                },
            ],
            sections_added,
            keys_updated,
            sections_replaced,
            unchanged: changes.is_empty(),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
