//! Global settings REST API handlers

use crate::{ApiResult, SuccessResponse};

use gsm_core::Settings;
use gsm_manager::AppState;

use axum::{Json, extract::State};

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.get().await)
}

/// POST /api/settings
///
/// Shallow-merge the request body into the settings document.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(patch): Json<serde_json::Value>,
) -> ApiResult<Json<SuccessResponse>> {
    state.settings.update(&patch).await?;
    Ok(Json(SuccessResponse::ok()))
}
