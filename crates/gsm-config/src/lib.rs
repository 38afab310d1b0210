mod config;
mod error;
mod log_level;
mod logging_config;
mod manager_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use manager_config::ManagerConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_SERVER_EXECUTABLE: &str = "enshrouded_server.exe";
const DEFAULT_SERVER_CONFIG_FILE: &str = "enshrouded_server.json";
const DEFAULT_SAVE_DIR: &str = "savegame";
const DEFAULT_BACKUP_DIR: &str = "backups_manager";
const DEFAULT_SAMPLE_INTERVAL_SECS: u64 = 5;
const DEFAULT_RETENTION_TICK_SECS: u64 = 300;
