//! Server log file handlers

use crate::{ApiError, ApiResult, SuccessResponse};
use crate::api::resolve::resolve_profile;

use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

/// Tail length returned by the log endpoint.
const LOG_TAIL_LINES: usize = 100;

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: String,
}

/// GET /api/logs/{profile}
///
/// The last 100 lines of the server's log file, or a placeholder when
/// the server has not written one yet.
pub async fn get_logs(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<LogsResponse>> {
    let profile = resolve_profile(&state, &name).await?;
    let path = state.layout.paths_for(&profile).log_file;

    if !path.is_file() {
        return Ok(Json(LogsResponse {
            logs: "No log file yet...".to_string(),
        }));
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ApiError::internal(format!("Log read failed: {e}")))?;

    let lines: Vec<&str> = content.lines().collect();
    let tail_start = lines.len().saturating_sub(LOG_TAIL_LINES);

    Ok(Json(LogsResponse {
        logs: lines[tail_start..].join("\n"),
    }))
}

/// POST /api/logs/clear/{profile}
///
/// Truncate the log file. A missing file is already clear.
pub async fn clear_logs(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let profile = resolve_profile(&state, &name).await?;
    let path = state.layout.paths_for(&profile).log_file;

    if path.is_file() {
        tokio::fs::write(&path, "")
            .await
            .map_err(|e| ApiError::internal(format!("Log clear failed: {e}")))?;
    }

    Ok(Json(SuccessResponse::ok()))
}
