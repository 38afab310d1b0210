use super::{seed_save, test_layout};
use crate::{BackupArchiver, ProfileLocks, RetentionScheduler};

use gsm_core::{BackupOrigin, Profile};
use gsm_store::ProfileStore;

use chrono::{Duration, Utc};
use tempfile::TempDir;

struct Fixture {
    _data: TempDir,
    _install: TempDir,
    profile: Profile,
    archiver: BackupArchiver,
    scheduler: RetentionScheduler,
}

async fn fixture(auto_backup: bool) -> Fixture {
    let data = TempDir::new().unwrap();
    let install = TempDir::new().unwrap();
    seed_save(install.path());

    let mut profile = Profile::new("alpha", install.path());
    profile.auto_backup = auto_backup;
    profile.backup_interval = 60;

    let profiles = ProfileStore::open(data.path()).unwrap();
    profiles.insert(profile.clone()).await.unwrap();

    let archiver = BackupArchiver::new(test_layout());
    let scheduler = RetentionScheduler::new(archiver.clone(), profiles, ProfileLocks::new());

    Fixture {
        _data: data,
        _install: install,
        profile,
        archiver,
        scheduler,
    }
}

#[tokio::test]
async fn test_fresh_automatic_artifact_is_not_due() {
    let f = fixture(true).await;
    f.archiver
        .create(&f.profile, BackupOrigin::Automatic)
        .await
        .unwrap();

    f.scheduler.run_once(Utc::now()).await;

    assert_eq!(f.archiver.list(&f.profile).unwrap().len(), 1);
}

#[tokio::test]
async fn test_artifact_older_than_interval_triggers_one_backup() {
    let f = fixture(true).await;
    f.archiver
        .create(&f.profile, BackupOrigin::Automatic)
        .await
        .unwrap();

    f.scheduler.run_once(Utc::now() + Duration::minutes(61)).await;

    assert_eq!(f.archiver.list(&f.profile).unwrap().len(), 2);
}

#[tokio::test]
async fn test_profile_without_artifacts_is_due_immediately() {
    let f = fixture(true).await;

    f.scheduler.run_once(Utc::now()).await;

    let artifacts = f.archiver.list(&f.profile).unwrap();
    assert_eq!(artifacts.len(), 1);
    assert!(artifacts[0].name.starts_with("auto_"));
}

#[tokio::test]
async fn test_manual_artifacts_do_not_reset_the_cadence() {
    let f = fixture(true).await;
    f.archiver
        .create(&f.profile, BackupOrigin::Manual)
        .await
        .unwrap();

    f.scheduler.run_once(Utc::now()).await;

    // The fresh manual backup is ignored, so an automatic one is created.
    let artifacts = f.archiver.list(&f.profile).unwrap();
    assert_eq!(artifacts.len(), 2);
    assert!(artifacts.iter().any(|a| a.name.starts_with("auto_")));
}

#[tokio::test]
async fn test_interval_above_i64_range_is_never_due() {
    let data = TempDir::new().unwrap();
    let install = TempDir::new().unwrap();
    seed_save(install.path());

    let mut profile = Profile::new("alpha", install.path());
    profile.auto_backup = true;
    profile.backup_interval = u64::MAX;

    let profiles = ProfileStore::open(data.path()).unwrap();
    profiles.insert(profile.clone()).await.unwrap();

    let archiver = BackupArchiver::new(test_layout());
    archiver
        .create(&profile, BackupOrigin::Automatic)
        .await
        .unwrap();

    let scheduler = RetentionScheduler::new(archiver.clone(), profiles, ProfileLocks::new());
    scheduler.run_once(Utc::now() + Duration::days(365)).await;

    // The fresh artifact must keep the profile covered.
    assert_eq!(archiver.list(&profile).unwrap().len(), 1);
}

#[tokio::test]
async fn test_disabled_profile_is_never_backed_up() {
    let f = fixture(false).await;

    f.scheduler.run_once(Utc::now() + Duration::days(365)).await;

    assert!(f.archiver.list(&f.profile).unwrap().is_empty());
}
