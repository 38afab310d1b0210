//! Profile persistence - `profiles.json`, read and written wholesale.

use crate::{PROFILES_FILE, Result, StoreError, document};

use gsm_core::Profile;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl ProfileStore {
    /// Open (or create) the profile document under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).map_err(|e| StoreError::Io {
            path: data_dir.to_path_buf(),
            source: e,
        })?;

        let path = data_dir.join(PROFILES_FILE);
        let profiles: Vec<Profile> = document::read_or_default(&path)?;

        Ok(Self {
            path,
            profiles: Arc::new(RwLock::new(profiles)),
        })
    }

    pub async fn all(&self) -> Vec<Profile> {
        self.profiles.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Profile> {
        self.profiles
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }

    /// Add a new profile. Names are identities; duplicates are rejected.
    pub async fn insert(&self, profile: Profile) -> Result<()> {
        let mut profiles = self.profiles.write().await;

        if profiles.iter().any(|p| p.name == profile.name) {
            return Err(StoreError::conflict(format!(
                "Profile {} already exists",
                profile.name
            )));
        }

        profiles.push(profile);
        document::write(&self.path, &*profiles)
    }

    /// Remove a profile by name. Removing an absent name is a no-op.
    pub async fn remove(&self, name: &str) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.retain(|p| p.name != name);
        document::write(&self.path, &*profiles)
    }

    /// Shallow-merge a JSON patch into the named profile.
    pub async fn update(&self, name: &str, patch: &serde_json::Value) -> Result<Profile> {
        let mut profiles = self.profiles.write().await;

        let slot = profiles
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::not_found(format!("Profile {name} not found")))?;

        let patched = document::merge_patch(slot, patch)?;
        *slot = patched.clone();

        document::write(&self.path, &*profiles)?;
        Ok(patched)
    }
}
