//! Server start/stop handlers

use crate::ApiResult;
use crate::api::resolve::resolve_profile;

use gsm_manager::{AppState, ServerEvent};

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_running: Option<bool>,
}

/// POST /api/server/start/{profile}
///
/// Spawn the profile's server, detached. Starting an already-running
/// profile is a no-op that reports `alreadyRunning`.
pub async fn start_server(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<StartResponse>> {
    let profile = resolve_profile(&state, &name).await?;
    let paths = state.layout.paths_for(&profile);

    let outcome = state.registry.start(&profile, &paths).await?;

    if outcome.started {
        state.notifier.notify_event(&profile, ServerEvent::Started);
    }

    Ok(Json(StartResponse {
        success: true,
        already_running: outcome.already_running.then_some(true),
    }))
}

#[derive(Debug, Serialize)]
pub struct StopResponse {
    pub success: bool,
}

/// POST /api/server/stop/{profile}
///
/// Best-effort: succeeds even when no process could be terminated.
pub async fn stop_server(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<StopResponse>> {
    let profile = resolve_profile(&state, &name).await?;

    state
        .registry
        .stop(&profile, state.layout.executable_name())
        .await;
    state.notifier.notify_event(&profile, ServerEvent::Stopped);

    Ok(Json(StopResponse { success: true }))
}
