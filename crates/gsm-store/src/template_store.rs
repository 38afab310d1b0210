//! Template persistence - `templates.json`.

use crate::{Result, StoreError, TEMPLATES_FILE, document};

use gsm_core::Template;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct TemplateStore {
    path: PathBuf,
    templates: Arc<RwLock<Vec<Template>>>,
}

impl TemplateStore {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).map_err(|e| StoreError::Io {
            path: data_dir.to_path_buf(),
            source: e,
        })?;

        let path = data_dir.join(TEMPLATES_FILE);
        let templates: Vec<Template> = document::read_or_default(&path)?;

        Ok(Self {
            path,
            templates: Arc::new(RwLock::new(templates)),
        })
    }

    pub async fn all(&self) -> Vec<Template> {
        self.templates.read().await.clone()
    }

    pub async fn insert(&self, template: Template) -> Result<()> {
        let mut templates = self.templates.write().await;
        templates.push(template);
        document::write(&self.path, &*templates)
    }
}
