//! Document ingestion and comparison library.
//!
//! Ingests documents (PDF, DOCX, plain text), stores extracted text
//! content-addressably, and computes pairwise similarity and diffs
//! between stored documents.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docdiff::{ingest, compare_pair, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let first = ingest(&store, "report.txt", b"Hello\nWorld").await?;
//! let second = ingest(&store, "report2.txt", b"Hello\nPlanet").await?;
//! let result = compare_pair(&store, first.document_id, second.document_id).await?;
//! println!("{}% similar\n{}", result.similarity_percent, result.diff);
//! ```
//!
//! # Modules
//!
//! - [`extract`] - multi-format text extraction with ordered fallback
//! - [`diff`] - block-matching similarity and line-diff rendering
//! - [`pipeline`] - ingestion and comparison orchestration
//! - [`traits`] - the [`DocumentStore`] abstraction
//! - [`stores`] - storage backends (memory, SQLite behind `sqlite`)
//! - [`testing`] - fixture builders

pub mod diff;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

pub use diff::{compare, render_diff, similarity, ComparisonResult};
pub use error::{DocdiffError, Result};
pub use extract::{extract, DocumentFormat};
pub use pipeline::{compare_pair, ingest};
pub use stores::MemoryStore;
pub use traits::DocumentStore;
pub use types::{ContentFingerprint, Document, IngestOutcome, NewDocument};

#[cfg(feature = "sqlite")]
pub use stores::SqliteStore;
