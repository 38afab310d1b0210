//! Game configuration file handlers
//!
//! The server's own JSON config lives inside the install directory and
//! is owned by the game; these handlers edit it in place, preserving
//! the game's tab-indented formatting.

use crate::{ApiError, ApiResult, SuccessResponse};
use crate::api::resolve::resolve_profile;

use gsm_manager::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::Value;

/// Group names whose password is surfaced and edited.
const PASSWORD_GROUPS: [&str; 2] = ["Admin", "Friend"];

/// GET /api/config/{profile}
///
/// The raw game config plus a flattened `password` field pulled from
/// the first Admin/Friend user group.
pub async fn get_config(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let profile = resolve_profile(&state, &name).await?;
    let path = state.layout.paths_for(&profile).config_file;

    if !path.is_file() {
        return Err(ApiError::not_found("Config not found"));
    }

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ApiError::internal(format!("Config read failed: {e}")))?;
    let mut config: Value = serde_json::from_str(&raw)
        .map_err(|e| ApiError::internal(format!("Config parse failed: {e}")))?;

    let password = group_password(&config).unwrap_or_default();
    if let Some(object) = config.as_object_mut() {
        object.insert("password".to_string(), Value::String(password));
    }

    Ok(Json(config))
}

#[derive(Debug, Deserialize)]
pub struct UpdateConfigRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// POST /api/config/{profile}
///
/// Update the server name and/or the Admin/Friend group passwords. The
/// first write creates a one-time `.original.bak` copy of the untouched
/// config.
pub async fn update_config(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateConfigRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let profile = resolve_profile(&state, &name).await?;
    let path = state.layout.paths_for(&profile).config_file;

    let mut config = if path.is_file() {
        let mut backup = path.clone().into_os_string();
        backup.push(".original.bak");
        let backup = std::path::PathBuf::from(backup);
        if !backup.exists() {
            tokio::fs::copy(&path, &backup)
                .await
                .map_err(|e| ApiError::internal(format!("Config backup failed: {e}")))?;
        }

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ApiError::internal(format!("Config read failed: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| ApiError::internal(format!("Config parse failed: {e}")))?
    } else {
        Value::Object(serde_json::Map::new())
    };

    if let Some(server_name) = request.name {
        if let Some(object) = config.as_object_mut() {
            object.insert("name".to_string(), Value::String(server_name));
        }
    }

    if let Some(password) = request.password {
        set_group_passwords(&mut config, &password);
    }

    let rendered = render_tab_indented(&config)
        .map_err(|e| ApiError::internal(format!("Config serialize failed: {e}")))?;
    tokio::fs::write(&path, rendered)
        .await
        .map_err(|e| ApiError::internal(format!("Config write failed: {e}")))?;

    Ok(Json(SuccessResponse::ok()))
}

fn group_password(config: &Value) -> Option<String> {
    config
        .get("userGroups")?
        .as_array()?
        .iter()
        .find(|group| {
            group
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|n| PASSWORD_GROUPS.contains(&n))
        })?
        .get("password")
        .and_then(Value::as_str)
        .map(String::from)
}

fn set_group_passwords(config: &mut Value, password: &str) {
    let Some(groups) = config.get_mut("userGroups").and_then(Value::as_array_mut) else {
        return;
    };

    for group in groups {
        let matches = group
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|n| PASSWORD_GROUPS.contains(&n));

        if matches {
            if let Some(object) = group.as_object_mut() {
                object.insert("password".to_string(), Value::String(password.to_string()));
            }
        }
    }
}

/// Serialize with tab indentation, matching the game's own formatting.
fn render_tab_indented(config: &Value) -> serde_json::Result<Vec<u8>> {
    use serde::Serialize;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut output = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    config.serialize(&mut serializer)?;
    Ok(output)
}
