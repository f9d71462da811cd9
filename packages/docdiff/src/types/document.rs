//! Stored documents and ingestion outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::fingerprint::ContentFingerprint;

/// A stored document.
///
/// Created once per distinct fingerprint and immutable after creation;
/// the only way a row goes away is an explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier
    pub id: Uuid,

    /// Filename the content was first uploaded under
    pub filename: String,

    /// Fingerprint of the raw upload bytes
    pub fingerprint: ContentFingerprint,

    /// Extracted plain text
    pub content: String,

    /// When the document was ingested
    pub uploaded_at: DateTime<Utc>,
}

/// A document about to be inserted (no id yet).
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub filename: String,
    pub fingerprint: ContentFingerprint,
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
}

impl NewDocument {
    /// Create a new document stamped with the current time.
    pub fn new(
        filename: impl Into<String>,
        fingerprint: ContentFingerprint,
        content: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            fingerprint,
            content: content.into(),
            uploaded_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id, producing the stored form.
    pub fn into_document(self, id: Uuid) -> Document {
        Document {
            id,
            filename: self.filename,
            fingerprint: self.fingerprint,
            content: self.content,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Result of ingesting one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestOutcome {
    /// Id of the stored document (new or pre-existing)
    pub document_id: Uuid,

    /// False when the bytes were already stored under another upload
    pub is_new_document: bool,
}
