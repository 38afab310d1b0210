//! Profile template - reusable settings without an install path.

use crate::Profile;

use serde::{Deserialize, Serialize};

/// A saved copy of a profile's settings, minus the install path,
/// used to stamp out new profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub webhook_start_msg: String,
    #[serde(default)]
    pub webhook_stop_msg: String,
    #[serde(default)]
    pub auto_backup: bool,
    #[serde(default)]
    pub backup_interval: u64,
}

impl Template {
    /// Capture a profile's settings under a new template name.
    pub fn from_profile(profile: &Profile, template_name: impl Into<String>) -> Self {
        Self {
            name: template_name.into(),
            webhook_url: profile.webhook_url.clone(),
            webhook_start_msg: profile.webhook_start_msg.clone(),
            webhook_stop_msg: profile.webhook_stop_msg.clone(),
            auto_backup: profile.auto_backup,
            backup_interval: profile.backup_interval,
        }
    }
}
