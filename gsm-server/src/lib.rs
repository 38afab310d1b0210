pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    backups::{CreateBackupResponse, RollbackRequest, create_backup, list_backups, rollback_backup},
    config_editor::{UpdateConfigRequest, get_config, update_config},
    error::ApiError,
    error::Result as ApiResult,
    logs::{LogsResponse, clear_logs, get_logs},
    profiles::{
        CreateProfileRequest, ProfileListResponse, create_profile, delete_profile, list_profiles,
        update_profile,
    },
    server_control::{StartResponse, StopResponse, start_server, stop_server},
    settings::{get_settings, update_settings},
    stats::get_stats,
    success_response::SuccessResponse,
    templates::{CreateTemplateRequest, TemplateListResponse, create_template, list_templates},
    webhook::{AdminMessageRequest, send_admin_message},
};

pub use crate::routes::build_router;
