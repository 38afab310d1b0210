//! Profile REST API handlers

use crate::{ApiError, ApiResult, SuccessResponse};

use gsm_core::Profile;
use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub success: bool,
    pub profiles: Vec<Profile>,
}

/// GET /api/profiles
pub async fn list_profiles(State(state): State<AppState>) -> Json<Vec<Profile>> {
    Json(state.profiles.all().await)
}

/// POST /api/profiles
///
/// Create a profile and return the full list.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> ApiResult<Json<ProfileListResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Profile name must not be empty"));
    }
    if request.path.trim().is_empty() {
        return Err(ApiError::bad_request("Profile path must not be empty"));
    }

    state
        .profiles
        .insert(Profile::new(&request.name, &request.path))
        .await?;

    Ok(Json(ProfileListResponse {
        success: true,
        profiles: state.profiles.all().await,
    }))
}

/// DELETE /api/profiles/{name}
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.profiles.remove(&name).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/profiles/update/{name}
///
/// Shallow-merge the request body into the named profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> ApiResult<Json<SuccessResponse>> {
    state.profiles.update(&name, &patch).await?;
    Ok(Json(SuccessResponse::ok()))
}
