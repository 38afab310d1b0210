use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKUP_DIR, DEFAULT_RETENTION_TICK_SECS,
    DEFAULT_SAMPLE_INTERVAL_SECS, DEFAULT_SAVE_DIR, DEFAULT_SERVER_CONFIG_FILE,
    DEFAULT_SERVER_EXECUTABLE,
};

use serde::Deserialize;

/// Names and timers for the managed installation.
///
/// The defaults reproduce the layout the console has always managed;
/// changing them only makes sense when pointing at a different game
/// server binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Server binary file name inside each profile's install path.
    pub executable: String,
    /// Server JSON configuration file name.
    pub config_file: String,
    /// Save-data subdirectory name.
    pub save_dir: String,
    /// Backup subdirectory name. Fixed location for artifact compatibility.
    pub backup_dir: String,
    /// Seconds between CPU/RAM samples.
    pub sample_interval_secs: u64,
    /// Seconds between retention scheduler ticks.
    pub retention_tick_secs: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            executable: String::from(DEFAULT_SERVER_EXECUTABLE),
            config_file: String::from(DEFAULT_SERVER_CONFIG_FILE),
            save_dir: String::from(DEFAULT_SAVE_DIR),
            backup_dir: String::from(DEFAULT_BACKUP_DIR),
            sample_interval_secs: DEFAULT_SAMPLE_INTERVAL_SECS,
            retention_tick_secs: DEFAULT_RETENTION_TICK_SECS,
        }
    }
}

impl ManagerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (field, value) in [
            ("manager.executable", &self.executable),
            ("manager.config_file", &self.config_file),
            ("manager.save_dir", &self.save_dir),
            ("manager.backup_dir", &self.backup_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::manager(format!("{field} must not be empty")));
            }
            if value.contains('/') || value.contains('\\') || value.contains("..") {
                return Err(ConfigError::manager(format!(
                    "{field} must be a plain file name, got {value:?}"
                )));
            }
        }

        if self.save_dir == self.backup_dir {
            return Err(ConfigError::manager(
                "manager.save_dir and manager.backup_dir must differ",
            ));
        }

        if self.sample_interval_secs == 0 {
            return Err(ConfigError::manager(
                "manager.sample_interval_secs must be >= 1",
            ));
        }

        if self.retention_tick_secs == 0 {
            return Err(ConfigError::manager(
                "manager.retention_tick_secs must be >= 1",
            ));
        }

        Ok(())
    }
}
