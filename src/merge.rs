//! Section merge logic
//!
//! Merges an overlay document's sections into a base document:
//! - Sections absent from the base: inserted whole
//! - Table sections present in both: update key by key (overlay wins)
//! - Non-table section bodies: REPLACE (overlay wins entirely)
//!
//! Key-level granularity stops one level inside a section: a nested table
//! appearing as a key's value is set wholesale, not merged recursively.

use std::fmt;

use toml::value::Table;
use toml::Value;

/// Top-level key carrying schema metadata in overlay files. Never copied
/// into the merged document, never reported as a change.
pub const SCHEMA_KEY: &str = "$schema";

/// A single change applied while merging.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// A section absent from the base was inserted whole.
    AddedSection { section: String },

    /// A key inside an existing table section was added or overwritten.
    SetKey {
        section: String,
        key: String,
        value: Value,
    },

    /// A non-table section body was replaced wholesale.
    ReplacedSection { section: String, value: Value },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::AddedSection { section } => {
                write!(f, "Added new section: [{}]", section)
            }
            Change::SetKey {
                section,
                key,
                value,
            } => {
                write!(f, "Updated [{}].{} = {}", section, key, value)
            }
            Change::ReplacedSection { section, value } => {
                write!(f, "Replaced [{}] = {}", section, value)
            }
        }
    }
}

/// Result of merging an overlay into a base document.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The derived document. The base and overlay inputs are not mutated.
    pub merged: Table,

    /// Changes applied, in overlay iteration order. Empty when the overlay
    /// contributed nothing new.
    pub changes: Vec<Change>,
}

/// Merge `overlay` sections into `base`, returning a new document.
///
/// Overlay wins on overlapping keys; sections and keys present only in the
/// base survive untouched. Values equal on both sides are a silent no-op.
/// The merge never fails: any pair of well-formed documents is accepted.
pub fn merge_documents(base: &Table, overlay: &Table) -> MergeOutcome {
    let mut merged = base.clone();
    let mut changes = Vec::new();

    for (section, overlay_body) in overlay {
        if section == SCHEMA_KEY {
            continue;
        }

        if !merged.contains_key(section) {
            merged.insert(section.clone(), overlay_body.clone());
            changes.push(Change::AddedSection {
                section: section.clone(),
            });
            continue;
        }

        if let Some(base_body) = merged.get_mut(section) {
            match (base_body, overlay_body) {
                (Value::Table(base_table), Value::Table(overlay_table)) => {
                    for (key, value) in overlay_table {
                        if base_table.get(key) != Some(value) {
                            base_table.insert(key.clone(), value.clone());
                            changes.push(Change::SetKey {
                                section: section.clone(),
                                key: key.clone(),
                                value: value.clone(),
                            });
                        }
                    }
                }
                (base_body, overlay_body) => {
                    if *base_body != *overlay_body {
                        *base_body = overlay_body.clone();
                        changes.push(Change::ReplacedSection {
                            section: section.clone(),
                            value: overlay_body.clone(),
                        });
                    }
                }
            }
        }
    }

    MergeOutcome { merged, changes }
}
