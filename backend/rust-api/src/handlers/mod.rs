use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::metrics;
use crate::services::AppState;

pub mod color_quiz;
pub mod pages;
pub mod scores;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status_code, store) = match tokio::time::timeout(
        std::time::Duration::from_secs(1),
        state.scores.load_all(),
    )
    .await
    {
        Ok(Ok(entries)) => (
            StatusCode::OK,
            json!({ "status": "healthy", "entries": entries.len() }),
        ),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "status": "unhealthy", "error": e.to_string() }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "status": "unhealthy", "error": "score store timeout after 1s" }),
        ),
    };

    let status = if status_code == StatusCode::OK {
        "healthy"
    } else {
        "degraded"
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "service": "kidsgames-api",
            "version": env!("CARGO_PKG_VERSION"),
            "questions": state.questions.bank().questions().len(),
            "dependencies": { "score_store": store }
        })),
    )
}

pub async fn metrics_handler() -> impl IntoResponse {
    match metrics::render_metrics() {
        Ok(metrics_text) => (StatusCode::OK, metrics_text),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render metrics: {}", e),
        ),
    }
}

/// JSON 404 for unknown routes.
pub async fn fallback() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
