//! Global console settings, persisted wholesale.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub active_profile: Option<String>,
}

fn default_language() -> String {
    String::from("en")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            active_profile: None,
        }
    }
}
