use crate::api::{
    backups, config_editor, logs, profiles, server_control, settings, stats, templates, webhook,
};
use crate::health;

use gsm_manager::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Profiles and settings
        .route("/api/profiles", get(profiles::list_profiles))
        .route("/api/profiles", post(profiles::create_profile))
        .route("/api/profiles/{name}", delete(profiles::delete_profile))
        .route("/api/profiles/update/{name}", post(profiles::update_profile))
        .route("/api/templates", get(templates::list_templates))
        .route("/api/templates", post(templates::create_template))
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings", post(settings::update_settings))
        // Server control and monitoring
        .route("/api/server/start/{profile}", post(server_control::start_server))
        .route("/api/server/stop/{profile}", post(server_control::stop_server))
        .route("/api/stats/{profile}", get(stats::get_stats))
        .route("/api/config/{profile}", get(config_editor::get_config))
        .route("/api/config/{profile}", post(config_editor::update_config))
        // Backups and rollback
        .route("/api/backups/{profile}", get(backups::list_backups))
        .route("/api/backups/create/{profile}", post(backups::create_backup))
        .route(
            "/api/backups/rollback/{profile}",
            post(backups::rollback_backup),
        )
        // Logs
        .route("/api/logs/{profile}", get(logs::get_logs))
        .route("/api/logs/clear/{profile}", post(logs::clear_logs))
        // Webhook
        .route(
            "/api/discord/admin-msg/{profile}",
            post(webhook::send_admin_message),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware (the browser UI is served from the desktop shell)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
