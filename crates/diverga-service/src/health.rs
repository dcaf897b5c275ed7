//! Health endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of searchable documents
    pub documents: usize,
    /// "demo" or "live"
    pub assistant: String,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let assistant = if state.assistant.is_demo() {
        "demo"
    } else {
        "live"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: state.searcher.catalog().len(),
        assistant: assistant.to_string(),
    })
}
