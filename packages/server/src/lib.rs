//! HTTP layer over the docdiff library.
//!
//! Thin plumbing only: request validation and response shaping live
//! here, the ingestion/comparison logic lives in `docdiff`.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
