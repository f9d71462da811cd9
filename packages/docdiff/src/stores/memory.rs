//! In-memory storage implementation for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::traits::store::DocumentStore;
use crate::types::{ContentFingerprint, Document, NewDocument};

#[derive(Default)]
struct Inner {
    by_id: HashMap<Uuid, Document>,
    by_fingerprint: HashMap<ContentFingerprint, Uuid>,
}

/// In-memory document store.
///
/// Useful for testing and development; data is lost on restart. The
/// fingerprint lookup-or-insert happens under a single write lock, so
/// concurrent ingestions of the same bytes cannot both insert.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.inner.read().unwrap().by_id.len()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.by_id.clear();
        inner.by_fingerprint.clear();
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_by_fingerprint(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<Document>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .by_fingerprint
            .get(fingerprint)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    async fn insert(&self, document: &NewDocument) -> Result<Uuid> {
        let mut inner = self.inner.write().unwrap();
        if let Some(existing) = inner.by_fingerprint.get(&document.fingerprint) {
            return Ok(*existing);
        }
        let id = Uuid::new_v4();
        inner.by_fingerprint.insert(document.fingerprint, id);
        inner.by_id.insert(id, document.clone().into_document(id));
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Document>> {
        Ok(self.inner.read().unwrap().by_id.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.inner.write().unwrap();
        match inner.by_id.remove(&id) {
            Some(document) => {
                inner.by_fingerprint.remove(&document.fingerprint);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> =
            self.inner.read().unwrap().by_id.values().cloned().collect();
        documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(documents)
    }
}
