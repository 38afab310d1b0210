//! Global settings persistence - `settings.json`.

use crate::{Result, SETTINGS_FILE, StoreError, document};

use gsm_core::Settings;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).map_err(|e| StoreError::Io {
            path: data_dir.to_path_buf(),
            source: e,
        })?;

        let path = data_dir.join(SETTINGS_FILE);
        let settings: Settings = document::read_or_default(&path)?;

        Ok(Self {
            path,
            settings: Arc::new(RwLock::new(settings)),
        })
    }

    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Shallow-merge a JSON patch into the settings document.
    pub async fn update(&self, patch: &serde_json::Value) -> Result<Settings> {
        let mut settings = self.settings.write().await;

        let patched: Settings = document::merge_patch(&*settings, patch)?;
        *settings = patched.clone();

        document::write(&self.path, &*settings)?;
        Ok(patched)
    }
}
