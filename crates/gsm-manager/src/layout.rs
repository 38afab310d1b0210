//! Fixed file layout beneath a profile's install path.

use gsm_core::Profile;

use std::path::PathBuf;

use gsm_config::ManagerConfig;

/// Names of the managed files relative to an install directory.
/// Built once from configuration and shared read-only.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    pub executable: String,
    pub config_file: String,
    pub save_dir: String,
    pub backup_dir: String,
}

impl InstallLayout {
    pub fn paths_for(&self, profile: &Profile) -> ProfilePaths {
        let log_name = format!(
            "{}.log",
            PathBuf::from(&self.executable)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.executable.clone())
        );

        ProfilePaths {
            install: profile.path.clone(),
            executable: profile.path.join(&self.executable),
            config_file: profile.path.join(&self.config_file),
            save: profile.path.join(&self.save_dir),
            backups: profile.path.join(&self.backup_dir),
            log_file: profile.path.join("logs").join(log_name),
        }
    }

    /// Executable file name used for name-based process discovery.
    pub fn executable_name(&self) -> &str {
        &self.executable
    }
}

impl From<&ManagerConfig> for InstallLayout {
    fn from(config: &ManagerConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            config_file: config.config_file.clone(),
            save_dir: config.save_dir.clone(),
            backup_dir: config.backup_dir.clone(),
        }
    }
}

/// Resolved absolute paths for one profile.
#[derive(Debug, Clone)]
pub struct ProfilePaths {
    pub install: PathBuf,
    pub executable: PathBuf,
    pub config_file: PathBuf,
    pub save: PathBuf,
    pub backups: PathBuf,
    pub log_file: PathBuf,
}
