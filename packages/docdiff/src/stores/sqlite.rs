//! SQLite storage implementation.
//!
//! File-based backend suited to local development and single-server
//! deployments. The fingerprint column carries a UNIQUE constraint;
//! inserts use ON CONFLICT DO NOTHING plus fetch-after-conflict so the
//! lookup-or-insert stays correct under concurrent writers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{DocdiffError, Result};
use crate::traits::store::DocumentStore;
use crate::types::{ContentFingerprint, Document, NewDocument};

/// SQLite-based document store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a store with the given connection URL.
    ///
    /// # Example URLs
    /// - `sqlite::memory:` - in-memory database (ephemeral)
    /// - `sqlite:./documents.db?mode=rwc` - file, created if absent
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_pool_size(database_url, 5).await
    }

    /// Create an in-memory store (for testing).
    ///
    /// Pinned to a single connection: every connection to `:memory:`
    /// gets its own database.
    pub async fn in_memory() -> Result<Self> {
        Self::with_pool_size("sqlite::memory:", 1).await
    }

    async fn with_pool_size(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(DocdiffError::storage)?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                filename TEXT NOT NULL,
                fingerprint TEXT NOT NULL UNIQUE,
                content TEXT NOT NULL,
                uploaded_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_uploaded_at
                ON documents(uploaded_at);
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(DocdiffError::storage)?;

        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    filename: String,
    fingerprint: String,
    content: String,
    uploaded_at: String,
}

impl DocumentRow {
    fn into_document(self) -> Result<Document> {
        Ok(Document {
            id: Uuid::parse_str(&self.id).map_err(DocdiffError::storage)?,
            filename: self.filename,
            fingerprint: self.fingerprint.parse().map_err(DocdiffError::storage)?,
            content: self.content,
            uploaded_at: DateTime::parse_from_rfc3339(&self.uploaded_at)
                .map_err(DocdiffError::storage)?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn find_by_fingerprint(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<Option<Document>> {
        let row: Option<DocumentRow> = sqlx::query_as(
            "SELECT id, filename, fingerprint, content, uploaded_at
             FROM documents WHERE fingerprint = ?1",
        )
        .bind(fingerprint.to_hex())
        .fetch_optional(&self.pool)
        .await
        .map_err(DocdiffError::storage)?;

        row.map(DocumentRow::into_document).transpose()
    }

    async fn insert(&self, document: &NewDocument) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let result = sqlx::query(
            "INSERT INTO documents (id, filename, fingerprint, content, uploaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(fingerprint) DO NOTHING",
        )
        .bind(id.to_string())
        .bind(&document.filename)
        .bind(document.fingerprint.to_hex())
        .bind(&document.content)
        .bind(document.uploaded_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(DocdiffError::storage)?;

        if result.rows_affected() == 0 {
            // Lost the race (or duplicate upload): fetch the winner's id
            let (existing,): (String,) =
                sqlx::query_as("SELECT id FROM documents WHERE fingerprint = ?1")
                    .bind(document.fingerprint.to_hex())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(DocdiffError::storage)?;
            return Uuid::parse_str(&existing).map_err(DocdiffError::storage);
        }

        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Document>> {
        let row: Option<DocumentRow> = sqlx::query_as(
            "SELECT id, filename, fingerprint, content, uploaded_at
             FROM documents WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(DocdiffError::storage)?;

        row.map(DocumentRow::into_document).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(DocdiffError::storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            "SELECT id, filename, fingerprint, content, uploaded_at
             FROM documents ORDER BY uploaded_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DocdiffError::storage)?;

        rows.into_iter().map(DocumentRow::into_document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_doc(filename: &str, bytes: &[u8], content: &str) -> NewDocument {
        NewDocument::new(filename, ContentFingerprint::of(bytes), content)
    }

    #[tokio::test]
    async fn test_insert_fetch_round_trip() {
        let store = SqliteStore::in_memory().await.unwrap();
        let doc = new_doc("report.txt", b"Hello\nWorld", "Hello\nWorld");
        let id = store.insert(&doc).await.unwrap();

        let fetched = store.fetch(id).await.unwrap().unwrap();
        assert_eq!(fetched.filename, "report.txt");
        assert_eq!(fetched.content, "Hello\nWorld");
        assert_eq!(fetched.fingerprint, doc.fingerprint);
    }

    #[tokio::test]
    async fn test_conflict_returns_existing_id() {
        let store = SqliteStore::in_memory().await.unwrap();
        let first = store
            .insert(&new_doc("a.txt", b"same", "same"))
            .await
            .unwrap();
        let second = store
            .insert(&new_doc("b.txt", b"same", "same"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_fingerprint() {
        let store = SqliteStore::in_memory().await.unwrap();
        let doc = new_doc("a.txt", b"bytes", "text");
        let id = store.insert(&doc).await.unwrap();

        let found = store
            .find_by_fingerprint(&doc.fingerprint)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id);

        let missing = ContentFingerprint::of(b"other bytes");
        assert!(store.find_by_fingerprint(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SqliteStore::in_memory().await.unwrap();
        let id = store.insert(&new_doc("a.txt", b"x", "x")).await.unwrap();

        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(store.fetch(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut older = new_doc("old.txt", b"old", "old");
        older.uploaded_at = Utc::now() - chrono::Duration::hours(2);
        store.insert(&older).await.unwrap();
        store
            .insert(&new_doc("new.txt", b"new", "new"))
            .await
            .unwrap();

        let listed = store.list_all().await.unwrap();
        assert_eq!(listed[0].filename, "new.txt");
        assert_eq!(listed[1].filename, "old.txt");
    }
}
