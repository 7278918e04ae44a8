//! toml-overlay - section-wise TOML merge
//!
//! This crate merges an overlay TOML document's sections into a base
//! document: new sections are inserted, table sections are updated key by
//! key with the overlay winning on overlap, and non-table section bodies
//! are replaced wholesale. The reserved `$schema` top-level key in the
//! overlay is never copied.

pub mod document;
pub mod merge;
pub mod report;

pub use document::{write_document, DocumentError, SourceDocument};
pub use merge::{merge_documents, Change, MergeOutcome, SCHEMA_KEY};
pub use report::{MergeReport, SourceInfo, SourceRole};
