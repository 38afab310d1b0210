use crate::{
    BackupArchiver, InstallLayout, ProcessRegistry, ProfileLocks, ResourceSampler,
    RetentionScheduler, RollbackEngine, WebhookNotifier,
};

use gsm_config::Config;
use gsm_store::{ProfileStore, SettingsStore, TemplateStore};

use std::time::Duration;

/// Shared application state for the HTTP handlers and background tasks.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    pub templates: TemplateStore,
    pub settings: SettingsStore,
    pub layout: InstallLayout,
    pub registry: ProcessRegistry,
    pub sampler: ResourceSampler,
    pub archiver: BackupArchiver,
    pub rollback: RollbackEngine,
    pub notifier: WebhookNotifier,
    pub locks: ProfileLocks,
    sample_interval: Duration,
    retention_tick: Duration,
}

impl AppState {
    pub fn new(
        config: &Config,
        profiles: ProfileStore,
        templates: TemplateStore,
        settings: SettingsStore,
    ) -> Self {
        let layout = InstallLayout::from(&config.manager);

        Self {
            profiles,
            templates,
            settings,
            registry: ProcessRegistry::new(),
            sampler: ResourceSampler::new(),
            archiver: BackupArchiver::new(layout.clone()),
            rollback: RollbackEngine::new(layout.clone()),
            notifier: WebhookNotifier::new(),
            locks: ProfileLocks::new(),
            layout,
            sample_interval: Duration::from_secs(config.manager.sample_interval_secs),
            retention_tick: Duration::from_secs(config.manager.retention_tick_secs),
        }
    }

    /// Launch the sampler and retention loops. Handles are returned so
    /// the caller can abort them on shutdown.
    pub fn spawn_background_tasks(&self) -> Vec<tokio::task::JoinHandle<()>> {
        let sampler = self.sampler.spawn(
            self.profiles.clone(),
            self.registry.clone(),
            self.layout.executable_name().to_string(),
            self.sample_interval,
        );

        let scheduler = RetentionScheduler::new(
            self.archiver.clone(),
            self.profiles.clone(),
            self.locks.clone(),
        );
        let retention = scheduler.spawn(self.retention_tick);

        vec![sampler, retention]
    }
}
