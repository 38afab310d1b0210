//! Resource history handler

use gsm_core::ResourceSample;
use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/stats/{profile}
///
/// Oldest-first CPU/RAM samples; an unknown or never-sampled profile
/// yields an empty array.
pub async fn get_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<ResourceSample>> {
    Json(state.sampler.history(&name).await)
}
