//! Profile entity - a named configuration pointing at one server install.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A managed server installation. Identity is the unique `name`;
/// everything else can be edited through the update API.
///
/// Field names serialize camelCase for compatibility with the persisted
/// `profiles.json` documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Server installation directory.
    pub path: PathBuf,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub webhook_start_msg: String,
    #[serde(default)]
    pub webhook_stop_msg: String,
    #[serde(default)]
    pub auto_backup: bool,
    /// Minutes between automatic backups. Ignored unless `auto_backup`.
    #[serde(default = "default_backup_interval")]
    pub backup_interval: u64,
}

fn default_backup_interval() -> u64 {
    60
}

impl Profile {
    /// Create a new profile with automatic backups disabled.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            webhook_url: String::new(),
            webhook_start_msg: String::new(),
            webhook_stop_msg: String::new(),
            auto_backup: false,
            backup_interval: default_backup_interval(),
        }
    }

    /// Check whether the retention scheduler should consider this profile.
    pub fn wants_auto_backup(&self) -> bool {
        self.auto_backup && self.backup_interval > 0
    }

    /// Check whether a status webhook is configured.
    pub fn has_webhook(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}
