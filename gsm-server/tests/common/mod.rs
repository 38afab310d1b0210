#![allow(dead_code)]

//! Test infrastructure for gsm-server API tests

use gsm_core::Profile;
use gsm_manager::AppState;
use gsm_store::{ProfileStore, SettingsStore, TemplateStore};

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// Create AppState for testing, backed by a temp data directory.
/// The TempDir must be kept alive for the duration of the test.
pub fn create_test_app_state() -> (TempDir, AppState) {
    let data = TempDir::new().expect("Failed to create data dir");
    let config = gsm_config::Config::default();

    let profiles = ProfileStore::open(data.path()).expect("Failed to open profile store");
    let templates = TemplateStore::open(data.path()).expect("Failed to open template store");
    let settings = SettingsStore::open(data.path()).expect("Failed to open settings store");

    let state = AppState::new(&config, profiles, templates, settings);
    (data, state)
}

/// Register a profile pointing at an install directory.
pub async fn create_test_profile(state: &AppState, name: &str, install: &Path) -> Profile {
    let profile = Profile::new(name, install);
    state
        .profiles
        .insert(profile.clone())
        .await
        .expect("Failed to insert profile");
    profile
}

/// Seed the conventional save tree inside an install directory.
pub fn seed_save(install: &Path) {
    let save = install.join("savegame");
    std::fs::create_dir_all(save.join("sub")).expect("Failed to create save dir");
    std::fs::write(save.join("a.txt"), b"alpha save data").expect("Failed to write save file");
    std::fs::write(save.join("sub/b.txt"), b"nested bytes").expect("Failed to write save file");
}

/// Send a request through the router and decode the JSON response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("Failed to build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    };

    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };

    (status, json)
}
