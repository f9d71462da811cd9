//! API integration tests over an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use docdiff::MemoryStore;
use http_body_util::BodyExt;
use serde_json::Value;
use server_core::{build_app, AppState};
use tower::ServiceExt;

const BOUNDARY: &str = "X-DOCDIFF-TEST-BOUNDARY";

fn test_app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), 4);
    build_app(state, 16 * 1024 * 1024)
}

fn multipart_upload(filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_dedup_and_compare_flow() {
    let app = test_app();

    // First upload creates a document
    let response = app
        .clone()
        .oneshot(multipart_upload("report.txt", b"Hello\nWorld"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = json_body(response).await;
    assert_eq!(first["is_new"], true);

    // Identical bytes under another name dedup to the same id
    let response = app
        .clone()
        .oneshot(multipart_upload("copy.txt", b"Hello\nWorld"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let duplicate = json_body(response).await;
    assert_eq!(duplicate["is_new"], false);
    assert_eq!(duplicate["id"], first["id"]);

    // A variant document
    let response = app
        .clone()
        .oneshot(multipart_upload("report2.txt", b"Hello\nPlanet"))
        .await
        .unwrap();
    let second = json_body(response).await;
    assert_eq!(second["is_new"], true);

    // Compare the two
    let request = Request::post("/api/compare")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "doc1_id": first["id"],
                "doc2_id": second["id"],
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let comparison = json_body(response).await;
    let similarity = comparison["similarity"].as_f64().unwrap();
    assert!(similarity > 0.0 && similarity < 100.0);
    assert!(comparison["diff"].as_str().unwrap().contains("- World"));

    // Both documents are listed, newest first
    let response = app
        .clone()
        .oneshot(Request::get("/api/documents").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upload_rejects_unparsable_pdf() {
    let response = test_app()
        .oneshot(multipart_upload("broken.pdf", b"not a pdf at all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("PDF"));
}

#[tokio::test]
async fn upload_over_body_limit_is_413() {
    let state = AppState::new(Arc::new(MemoryStore::new()), 4);
    let app = build_app(state, 256);

    let response = app
        .oneshot(multipart_upload("big.txt", &[b'a'; 1024]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let request = Request::post("/api/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(format!("--{BOUNDARY}--\r\n")))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compare_unknown_id_is_404() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(multipart_upload("a.txt", b"text"))
        .await
        .unwrap();
    let uploaded = json_body(response).await;

    let request = Request::post("/api/compare")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "doc1_id": uploaded["id"],
                "doc2_id": uuid::Uuid::new_v4(),
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_document() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(multipart_upload("a.txt", b"text"))
        .await
        .unwrap();
    let uploaded = json_body(response).await;
    let id = uploaded["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/api/documents/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Second delete finds nothing
    let response = app
        .oneshot(
            Request::delete(format!("/api/documents/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
