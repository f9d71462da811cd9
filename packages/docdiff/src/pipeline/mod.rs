//! Ingestion and comparison pipelines - the orchestration layer.
//!
//! - Ingest: fingerprint → dedup lookup → extract → insert
//! - Compare: fetch ×2 → similarity + diff

pub mod compare;
pub mod ingest;

pub use compare::compare_pair;
pub use ingest::ingest;
