//! API route handlers.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use docdiff::{compare_pair, ingest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::{bad_request, ApiError};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub filename: String,
    pub is_new: bool,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub doc1_id: Uuid,
    pub doc2_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub similarity: f64,
    pub diff: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub filename: String,
    pub fingerprint: String,
    pub uploaded_at: DateTime<Utc>,
}

pub async fn health() -> &'static str {
    "ok"
}

/// `POST /api/upload` - multipart upload of one file under the `file` field.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return bad_request("No file"),
            Err(err) => return multipart_failure(err),
        };
        if field.name() != Some("file") {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => return bad_request("No filename"),
        };
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return multipart_failure(err),
        };

        // Extraction is CPU-bound; permits bound how many uploads are
        // processed at once.
        let _permit = state.extract_permits.acquire().await.unwrap();
        return match ingest(state.store.as_ref(), &filename, &bytes).await {
            Ok(outcome) => (
                StatusCode::CREATED,
                Json(UploadResponse {
                    id: outcome.document_id,
                    filename,
                    is_new: outcome.is_new_document,
                }),
            )
                .into_response(),
            Err(err) => ApiError(err).into_response(),
        };
    }
}

/// An upload body that could not be read: 413 when the configured
/// size cap was exceeded, 400 for a malformed multipart stream.
fn multipart_failure(err: MultipartError) -> Response {
    let status = err.status();
    (
        status,
        Json(serde_json::json!({ "error": err.body_text() })),
    )
        .into_response()
}

/// `POST /api/compare` - similarity and diff between two stored documents.
pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let _permit = state.extract_permits.acquire().await.unwrap();
    let result = compare_pair(state.store.as_ref(), request.doc1_id, request.doc2_id).await?;
    Ok(Json(CompareResponse {
        similarity: result.similarity_percent,
        diff: result.diff,
    }))
}

/// `GET /api/documents` - stored documents, newest first.
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    let documents = state.store.list_all().await?;
    Ok(Json(
        documents
            .into_iter()
            .map(|d| DocumentSummary {
                id: d.id,
                filename: d.filename,
                fingerprint: d.fingerprint.to_hex(),
                uploaded_at: d.uploaded_at,
            })
            .collect(),
    ))
}

/// `DELETE /api/documents/{id}`
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
