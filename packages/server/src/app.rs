//! Application setup and router wiring.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use docdiff::DocumentStore;
use tokio::sync::Semaphore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub extract_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, extract_workers: usize) -> Self {
        Self {
            store,
            extract_permits: Arc::new(Semaphore::new(extract_workers)),
        }
    }
}

/// Build the axum application.
pub fn build_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/upload", post(routes::upload))
        .route("/api/compare", post(routes::compare))
        .route("/api/documents", get(routes::list_documents))
        .route("/api/documents/:id", delete(routes::delete_document))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
