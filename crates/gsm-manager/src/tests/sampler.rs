use crate::ResourceSampler;

#[tokio::test]
async fn test_history_for_unsampled_profile_is_empty() {
    let sampler = ResourceSampler::new();

    assert!(sampler.history("alpha").await.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_stale_snapshot_does_not_untrack_live_process() {
    use super::{profile_at, test_layout};
    use crate::ProcessRegistry;
    use crate::sampler::resolve_pid;

    use std::os::unix::fs::PermissionsExt;

    use sysinfo::System;
    use tempfile::TempDir;

    let install = TempDir::new().unwrap();
    let profile = profile_at(install.path());
    let paths = test_layout().paths_for(&profile);

    std::fs::write(&paths.executable, "#!/bin/sh\nsleep 30\n").unwrap();
    std::fs::set_permissions(&paths.executable, std::fs::Permissions::from_mode(0o755)).unwrap();

    let registry = ProcessRegistry::new();
    registry.start(&profile, &paths).await.unwrap();
    let tracked = registry.tracked_pid(&profile.name).await.unwrap();

    // A snapshot taken before the spawn knows nothing about the PID.
    let mut system = System::new();

    let resolved =
        resolve_pid(&mut system, &registry, &profile.name, "enshrouded_server.exe").await;

    assert_eq!(resolved, Some(tracked));
    assert!(registry.is_running(&profile.name).await);

    assert!(registry.stop(&profile, "enshrouded_server.exe").await);
}
