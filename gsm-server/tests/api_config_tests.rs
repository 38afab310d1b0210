//! Integration tests for game config, log and webhook handlers
mod common;

use crate::common::{create_test_app_state, create_test_profile, send_json};

use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;

use gsm_server::routes::build_router;

const GAME_CONFIG: &str = r#"{
    "name": "My Server",
    "slotCount": 16,
    "userGroups": [
        { "name": "Admin", "password": "topsecret" },
        { "name": "Guest", "password": "open" }
    ]
}"#;

#[tokio::test]
async fn test_get_config_missing_file_is_not_found() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, _) = send_json(app, "GET", "/api/config/alpha", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_config_surfaces_admin_password() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    std::fs::write(install.path().join("enshrouded_server.json"), GAME_CONFIG).unwrap();
    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(app, "GET", "/api/config/alpha", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "My Server");
    assert_eq!(body["slotCount"], 16);
    assert_eq!(body["password"], "topsecret");
}

#[tokio::test]
async fn test_update_config_writes_backup_and_passwords() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    let config_path = install.path().join("enshrouded_server.json");
    std::fs::write(&config_path, GAME_CONFIG).unwrap();
    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(
        app,
        "POST",
        "/api/config/alpha",
        Some(json!({ "name": "Renamed", "password": "newpass" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // One-time safety copy of the untouched original.
    let backup = install.path().join("enshrouded_server.json.original.bak");
    assert_eq!(std::fs::read_to_string(&backup).unwrap(), GAME_CONFIG);

    let written = std::fs::read_to_string(&config_path).unwrap();
    // Tab-indented, like the game writes.
    assert!(written.contains("\n\t\"name\""));

    let updated: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["userGroups"][0]["password"], "newpass");
    // Non-admin groups keep their password.
    assert_eq!(updated["userGroups"][1]["password"], "open");
}

#[tokio::test]
async fn test_get_logs_placeholder_when_missing() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(app, "GET", "/api/logs/alpha", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logs"], "No log file yet...");
}

#[tokio::test]
async fn test_get_logs_returns_last_hundred_lines() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    let log_dir = install.path().join("logs");
    std::fs::create_dir_all(&log_dir).unwrap();

    let content: String = (0..150).map(|i| format!("line {i}\n")).collect();
    std::fs::write(log_dir.join("enshrouded_server.log"), content).unwrap();

    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(app, "GET", "/api/logs/alpha", None).await;

    assert_eq!(status, StatusCode::OK);
    let logs = body["logs"].as_str().unwrap();
    assert!(logs.starts_with("line 50"));
    assert!(logs.ends_with("line 149"));
    assert_eq!(logs.lines().count(), 100);
}

#[tokio::test]
async fn test_clear_logs_truncates_file() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    let log_dir = install.path().join("logs");
    std::fs::create_dir_all(&log_dir).unwrap();
    let log_path = log_dir.join("enshrouded_server.log");
    std::fs::write(&log_path, "old noise\n").unwrap();

    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(app, "POST", "/api/logs/clear/alpha", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");
}

#[tokio::test]
async fn test_admin_message_without_webhook_is_bad_request() {
    let (_data, state) = create_test_app_state();
    let install = TempDir::new().unwrap();
    create_test_profile(&state, "alpha", install.path()).await;
    let app = build_router(state);

    let (status, body) = send_json(
        app,
        "POST",
        "/api/discord/admin-msg/alpha",
        Some(json!({ "message": "maintenance soon" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
