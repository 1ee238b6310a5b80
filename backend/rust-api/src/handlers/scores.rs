use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::ApiError;
use crate::{extractors::LenientJson, models::ScoreSavedResponse, services::AppState};

pub const NO_JSON: &str = "no json";

/// POST /api/score - stores an arbitrary non-empty JSON object
pub async fn save_score(
    State(state): State<Arc<AppState>>,
    LenientJson(payload): LenientJson<Map<String, Value>>,
) -> Result<Json<ScoreSavedResponse>, ApiError> {
    let payload = payload
        .filter(|map| !map.is_empty())
        .ok_or_else(|| ApiError::bad_request(NO_JSON))?;

    state.scores.append_strict(&payload).await.map_err(|e| {
        tracing::error!("Failed to save score: {}", e);
        ApiError::internal(e.to_string())
    })?;

    tracing::info!(
        "Saved score for game {}",
        payload
            .get("game")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<unspecified>")
    );
    Ok(Json(ScoreSavedResponse { ok: true }))
}
