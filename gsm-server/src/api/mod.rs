pub mod backups;
pub mod config_editor;
pub mod error;
pub mod logs;
pub mod profiles;
pub mod resolve;
pub mod server_control;
pub mod settings;
pub mod stats;
pub mod success_response;
pub mod templates;
pub mod webhook;
