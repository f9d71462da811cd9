//! Ingestion pipeline - fingerprint, dedup, extract, store.

use tracing::{debug, info};

use crate::error::{DocdiffError, Result};
use crate::extract;
use crate::traits::store::DocumentStore;
use crate::types::{ContentFingerprint, IngestOutcome, NewDocument};

/// Ingest one uploaded file.
///
/// The fingerprint is computed over the raw bytes and checked against
/// the store *before* any extraction work, so a byte-identical
/// re-upload never pays the extraction cost. On a miss the text is
/// extracted and exactly one new document is inserted; an extraction
/// failure aborts the call with nothing written.
pub async fn ingest<S: DocumentStore + ?Sized>(
    store: &S,
    filename: &str,
    bytes: &[u8],
) -> Result<IngestOutcome> {
    let fingerprint = ContentFingerprint::of(bytes);

    if let Some(existing) = store.find_by_fingerprint(&fingerprint).await? {
        debug!(filename, id = %existing.id, "duplicate upload, reusing stored document");
        return Ok(IngestOutcome {
            document_id: existing.id,
            is_new_document: false,
        });
    }

    let content = run_extraction(filename, bytes).await?;
    let document = NewDocument::new(filename, fingerprint, content);
    let id = store.insert(&document).await?;
    info!(filename, %id, bytes = bytes.len(), "document ingested");

    Ok(IngestOutcome {
        document_id: id,
        is_new_document: true,
    })
}

/// Run the extractor on the blocking pool.
///
/// Extraction is CPU-bound with no suspension points; keeping it off
/// the runtime worker threads stops a large PDF from stalling other
/// requests.
async fn run_extraction(filename: &str, bytes: &[u8]) -> Result<String> {
    let filename = filename.to_owned();
    let bytes = bytes.to_vec();
    tokio::task::spawn_blocking(move || extract::extract(&filename, &bytes))
        .await
        .map_err(DocdiffError::storage)?
}
