//! Background CPU/RAM sampling for every known profile.

use crate::ProcessRegistry;

use gsm_core::{ResourceHistory, ResourceSample};
use gsm_store::ProfileStore;

use std::collections::HashMap;
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tokio::sync::RwLock;

/// Periodically discovers each profile's server process and appends a
/// CPU/memory sample to its bounded in-memory history.
///
/// Failures at any step (process gone, sampling error) skip the profile
/// for that tick; the loop itself never stops and never raises.
#[derive(Clone, Default)]
pub struct ResourceSampler {
    history: Arc<RwLock<HashMap<String, ResourceHistory>>>,
}

impl ResourceSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest-first snapshot of a profile's history; empty when the
    /// profile has never been sampled.
    pub async fn history(&self, profile_name: &str) -> Vec<ResourceSample> {
        self.history
            .read()
            .await
            .get(profile_name)
            .map(|h| h.snapshot())
            .unwrap_or_default()
    }

    /// Append a sample, evicting the oldest entry at capacity.
    pub async fn record(&self, profile_name: &str, sample: ResourceSample) {
        self.history
            .write()
            .await
            .entry(profile_name.to_string())
            .or_default()
            .push(sample);
    }

    /// Run the sampling loop on its own task.
    pub fn spawn(
        &self,
        profiles: ProfileStore,
        registry: ProcessRegistry,
        executable_name: String,
        interval: Duration,
    ) -> tokio::task::JoinHandle<()> {
        let sampler = self.clone();

        tokio::spawn(async move {
            let mut system = System::new();
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                sampler
                    .sample_once(&mut system, &profiles, &registry, &executable_name)
                    .await;
            }
        })
    }

    /// One sampling pass over every known profile.
    pub async fn sample_once(
        &self,
        system: &mut System,
        profiles: &ProfileStore,
        registry: &ProcessRegistry,
        executable_name: &str,
    ) {
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::everything(),
        );

        for profile in profiles.all().await {
            let Some(pid) = resolve_pid(system, registry, &profile.name, executable_name).await
            else {
                debug!("No live process for profile {}, skipping tick", profile.name);
                continue;
            };

            let Some(process) = system.process(Pid::from_u32(pid)) else {
                continue;
            };

            let sample = ResourceSample::now(process.cpu_usage(), process.memory());
            self.record(&profile.name, sample).await;
        }
    }
}

/// Resolve a live PID for a profile: the tracked PID when it is still
/// alive, otherwise the first process matching the server executable
/// name. With several profiles sharing one executable name the fallback
/// can misattribute samples; the tracked-PID preference narrows that
/// window but does not close it.
pub(crate) async fn resolve_pid(
    system: &mut System,
    registry: &ProcessRegistry,
    profile_name: &str,
    executable_name: &str,
) -> Option<u32> {
    if let Some(pid) = registry.tracked_pid(profile_name).await {
        let target = Pid::from_u32(pid);

        if system.process(target).is_none() {
            // The snapshot may predate the spawn; re-check the one PID
            // before concluding the process is gone.
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[target]),
                true,
                ProcessRefreshKind::everything(),
            );
        }

        if system.process(target).is_some() {
            return Some(pid);
        }

        // Tracked process died outside our control.
        registry.mark_exited(profile_name).await;
    }

    system
        .processes_by_exact_name(OsStr::new(executable_name))
        .next()
        .map(|process| process.pid().as_u32())
}
