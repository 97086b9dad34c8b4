// src/handlers/health.rs

use axum::{Json, response::IntoResponse};

/// Liveness probe at the API root.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "CCNA Training Platform API" }))
}
