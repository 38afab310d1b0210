//! Template REST API handlers

use crate::ApiResult;
use crate::api::resolve::resolve_profile;

use gsm_core::Template;
use gsm_manager::AppState;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub profile_name: String,
    pub template_name: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<Template>,
}

/// GET /api/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.templates.all().await)
}

/// POST /api/templates
///
/// Capture an existing profile's settings (minus the install path)
/// under a new template name.
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> ApiResult<Json<TemplateListResponse>> {
    let profile = resolve_profile(&state, &request.profile_name).await?;

    state
        .templates
        .insert(Template::from_profile(&profile, &request.template_name))
        .await?;

    Ok(Json(TemplateListResponse {
        success: true,
        templates: state.templates.all().await,
    }))
}
