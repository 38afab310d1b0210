//! Backup and rollback handlers

use crate::{ApiResult, SuccessResponse};
use crate::api::resolve::resolve_profile;

use gsm_core::{BackupArtifact, BackupOrigin};
use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

/// GET /api/backups/{profile}
///
/// Artifacts newest-first; empty when the backup dir does not exist.
pub async fn list_backups(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<BackupArtifact>>> {
    let profile = resolve_profile(&state, &name).await?;
    Ok(Json(state.archiver.list(&profile)?))
}

#[derive(Debug, Serialize)]
pub struct CreateBackupResponse {
    pub success: bool,
    pub name: String,
}

/// POST /api/backups/create/{profile}
pub async fn create_backup(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<CreateBackupResponse>> {
    let profile = resolve_profile(&state, &name).await?;

    // Serialized against rollback and the retention scheduler.
    let lock = state.locks.for_profile(&profile.name).await;
    let _guard = lock.lock().await;

    let artifact = state.archiver.create(&profile, BackupOrigin::Manual).await?;

    Ok(Json(CreateBackupResponse {
        success: true,
        name: artifact.name,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RollbackRequest {
    pub filename: String,
}

/// POST /api/backups/rollback/{profile}
///
/// Replace the live save directory with the named artifact's contents.
pub async fn rollback_backup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<RollbackRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let profile = resolve_profile(&state, &name).await?;

    let lock = state.locks.for_profile(&profile.name).await;
    let _guard = lock.lock().await;

    state.rollback.rollback(&profile, &request.filename).await?;

    Ok(Json(SuccessResponse::ok()))
}
