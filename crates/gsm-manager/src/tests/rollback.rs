use super::{profile_at, seed_save, test_layout};
use crate::{BackupArchiver, RollbackEngine};

use gsm_core::BackupOrigin;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_rollback_restores_archived_contents_exactly() {
    let install = TempDir::new().unwrap();
    seed_save(install.path());
    let archiver = BackupArchiver::new(test_layout());
    let engine = RollbackEngine::new(test_layout());
    let profile = profile_at(install.path());

    let artifact = archiver.create(&profile, BackupOrigin::Manual).await.unwrap();

    // Mutate the live tree: change, delete, and add files.
    let save = install.path().join("savegame");
    std::fs::write(save.join("a.txt"), b"corrupted").unwrap();
    std::fs::remove_file(save.join("sub/b.txt")).unwrap();
    std::fs::write(save.join("extra.txt"), b"should vanish").unwrap();

    engine.rollback(&profile, &artifact.name).await.unwrap();

    assert_eq!(std::fs::read(save.join("a.txt")).unwrap(), b"alpha save data");
    assert_eq!(std::fs::read(save.join("sub/b.txt")).unwrap(), b"nested bytes");
    assert!(!save.join("extra.txt").exists());
}

#[tokio::test]
async fn test_rollback_leaves_no_working_directories_behind() {
    let install = TempDir::new().unwrap();
    seed_save(install.path());
    let archiver = BackupArchiver::new(test_layout());
    let engine = RollbackEngine::new(test_layout());
    let profile = profile_at(install.path());

    let artifact = archiver.create(&profile, BackupOrigin::Manual).await.unwrap();
    engine.rollback(&profile, &artifact.name).await.unwrap();

    assert!(!install.path().join("savegame.staging").exists());
    assert!(!install.path().join("savegame.previous").exists());
}

#[tokio::test]
async fn test_rollback_unknown_artifact_is_not_found() {
    let install = TempDir::new().unwrap();
    seed_save(install.path());
    let engine = RollbackEngine::new(test_layout());

    let result = engine
        .rollback(&profile_at(install.path()), "backup_missing.zip")
        .await;

    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn test_rollback_rejects_traversal_in_artifact_name() {
    let install = TempDir::new().unwrap();
    seed_save(install.path());
    let engine = RollbackEngine::new(test_layout());

    let result = engine
        .rollback(&profile_at(install.path()), "../outside.zip")
        .await;

    assert_that!(result, err(anything()));
}
