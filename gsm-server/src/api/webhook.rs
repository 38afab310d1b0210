//! Operator webhook message handler

use crate::{ApiError, ApiResult, SuccessResponse};
use crate::api::resolve::resolve_profile;

use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AdminMessageRequest {
    pub message: String,
}

/// POST /api/discord/admin-msg/{profile}
///
/// Post an operator-supplied message to the profile's webhook.
/// Delivery is fire-and-forget; success means the message was queued.
pub async fn send_admin_message(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AdminMessageRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let profile = resolve_profile(&state, &name).await?;

    if !profile.has_webhook() {
        return Err(ApiError::bad_request("No webhook configured"));
    }

    state.notifier.notify(&profile, &request.message);

    Ok(Json(SuccessResponse::ok()))
}
