/*
 * Responsibility
 * - GET /health (liveness)
 * - Mounted outside the api key middleware
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
