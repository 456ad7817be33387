use crate::models::{InfoDocument, INFO_DOCUMENT};
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Serve the static product document. No error path: the document is
/// immutable and its serialization cannot fail.
pub async fn info() -> Json<&'static InfoDocument> {
    Json(&*INFO_DOCUMENT)
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "info-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
