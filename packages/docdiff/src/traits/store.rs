//! Storage trait for documents.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{ContentFingerprint, Document, NewDocument};

/// Persistence for documents, keyed by id and unique by fingerprint.
///
/// The fingerprint uniquely identifies a row: `insert` must
/// short-circuit a duplicate fingerprint and hand back the existing
/// row's id instead of creating a second one, and it must do so
/// atomically with respect to concurrent writers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up a document by content fingerprint.
    async fn find_by_fingerprint(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<Document>>;

    /// Insert a document, returning its assigned id.
    ///
    /// If a document with the same fingerprint already exists, returns
    /// the existing id and writes nothing.
    async fn insert(&self, document: &NewDocument) -> Result<Uuid>;

    /// Fetch a document by id.
    async fn fetch(&self, id: Uuid) -> Result<Option<Document>>;

    /// Delete a document by id. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// All documents, newest upload first.
    async fn list_all(&self) -> Result<Vec<Document>>;
}
