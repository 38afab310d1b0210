use crate::{ConfigError, ConfigErrorResult, LoggingConfig, ManagerConfig, ServerConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub manager: ManagerConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for GSM_CONFIG_DIR env var, else use ./.gsm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GSM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GSM_CONFIG_DIR env var > ./.gsm/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("GSM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".gsm"))
    }

    /// Get the data directory holding the persisted JSON documents
    /// (profiles.json, templates.json, settings.json).
    /// Priority: GSM_DATA_DIR env var > OS data dir (e.g. ~/.local/share/gsm)
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("GSM_DATA_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::data_dir()
            .map(|d| d.join("gsm"))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.manager.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  manager: exe={}, save={}, backups={}",
            self.manager.executable, self.manager.save_dir, self.manager.backup_dir
        );
        info!(
            "  timers: sample={}s, retention tick={}s",
            self.manager.sample_interval_secs, self.manager.retention_tick_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GSM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GSM_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("GSM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GSM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GSM_LOG_FILE", &mut self.logging.file);

        // Manager
        Self::apply_env_string("GSM_MANAGER_EXECUTABLE", &mut self.manager.executable);
        Self::apply_env_string("GSM_MANAGER_CONFIG_FILE", &mut self.manager.config_file);
        Self::apply_env_string("GSM_MANAGER_SAVE_DIR", &mut self.manager.save_dir);
        Self::apply_env_string("GSM_MANAGER_BACKUP_DIR", &mut self.manager.backup_dir);
        Self::apply_env_parse(
            "GSM_SAMPLE_INTERVAL_SECS",
            &mut self.manager.sample_interval_secs,
        );
        Self::apply_env_parse(
            "GSM_RETENTION_TICK_SECS",
            &mut self.manager.retention_tick_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
