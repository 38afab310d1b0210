//! Per-profile mutation locks.
//!
//! Backup creation and rollback mutate the same save directory; holding
//! the profile's lock around either operation keeps them from observing
//! each other's half-written trees.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct ProfileLocks {
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl ProfileLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (lazily creating) the mutation lock for a profile name.
    pub async fn for_profile(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
