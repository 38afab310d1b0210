//! Scheduled automatic backups.

use crate::{BackupArchiver, ProfileLocks};

use gsm_core::{BackupOrigin, Profile};
use gsm_store::ProfileStore;

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Timer-driven loop that creates automatic backups for profiles whose
/// cadence has elapsed.
///
/// Due-ness is recomputed from the filesystem on every tick, never from
/// in-memory bookkeeping, so a restart of the console cannot trigger a
/// burst of catch-up backups for profiles that are already covered.
/// Only `auto_` artifacts count toward the cadence; manual backups do
/// not reset it.
#[derive(Clone)]
pub struct RetentionScheduler {
    archiver: BackupArchiver,
    profiles: ProfileStore,
    locks: ProfileLocks,
}

impl RetentionScheduler {
    pub fn new(archiver: BackupArchiver, profiles: ProfileStore, locks: ProfileLocks) -> Self {
        Self {
            archiver,
            profiles,
            locks,
        }
    }

    /// Run the retention loop on its own task.
    pub fn spawn(&self, tick: Duration) -> tokio::task::JoinHandle<()> {
        let scheduler = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                scheduler.run_once(Utc::now()).await;
            }
        })
    }

    /// One pass over every profile. Per-profile failures are logged and
    /// never abort the remainder of the tick.
    pub async fn run_once(&self, now: DateTime<Utc>) {
        for profile in self.profiles.all().await {
            if !profile.wants_auto_backup() {
                continue;
            }

            match self.is_due(&profile, now) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("Skipping auto backup for {}: {e}", profile.name);
                    continue;
                }
            }

            let lock = self.locks.for_profile(&profile.name).await;
            let _guard = lock.lock().await;

            if let Err(e) = self.archiver.create(&profile, BackupOrigin::Automatic).await {
                warn!("Auto backup failed for {}: {e}", profile.name);
            }
        }
    }

    /// A profile is due when it has no automatic artifact at all, or the
    /// newest one is at least `backupInterval` minutes old.
    fn is_due(&self, profile: &Profile, now: DateTime<Utc>) -> crate::Result<bool> {
        let newest_auto = self
            .archiver
            .list(profile)?
            .into_iter()
            .find(|artifact| artifact.origin == Some(BackupOrigin::Automatic));

        let Some(artifact) = newest_auto else {
            return Ok(true);
        };

        let elapsed_minutes = now.signed_duration_since(artifact.date).num_minutes();
        let interval_minutes = i64::try_from(profile.backup_interval).unwrap_or(i64::MAX);
        let due = elapsed_minutes >= interval_minutes;

        if !due {
            debug!(
                "Profile {} not due ({} of {} minutes elapsed)",
                profile.name, elapsed_minutes, profile.backup_interval
            );
        }

        Ok(due)
    }
}
