//! Comparison pipeline - fetch two documents and diff them.

use tracing::debug;
use uuid::Uuid;

use crate::diff::{self, ComparisonResult};
use crate::error::{DocdiffError, Result};
use crate::traits::store::DocumentStore;

/// Compare two stored documents by id.
///
/// Read-only: fetches both contents and delegates to the similarity
/// engine. Fails with `DocumentNotFound` before any similarity work if
/// either id does not resolve.
pub async fn compare_pair<S: DocumentStore + ?Sized>(
    store: &S,
    first: Uuid,
    second: Uuid,
) -> Result<ComparisonResult> {
    let a = store
        .fetch(first)
        .await?
        .ok_or(DocdiffError::DocumentNotFound { id: first })?;
    let b = store
        .fetch(second)
        .await?
        .ok_or(DocdiffError::DocumentNotFound { id: second })?;

    // The block matcher is CPU-bound over full document contents;
    // run it on the blocking pool.
    let result = tokio::task::spawn_blocking(move || diff::compare(&a.content, &b.content))
        .await
        .map_err(DocdiffError::storage)?;
    debug!(%first, %second, similarity = result.similarity_percent, "documents compared");
    Ok(result)
}
