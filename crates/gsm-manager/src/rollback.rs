//! Restore a save directory from a backup artifact.

use crate::{InstallLayout, ManagerError, Result};

use gsm_core::Profile;

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use zip::ZipArchive;

/// Replaces a profile's live save directory with the contents of a
/// previously created artifact.
///
/// Restoration is stage-then-swap: the archive is fully extracted into
/// a staging directory beside the save dir, and only then swapped into
/// place with two renames. A failure at any point before the final
/// rename leaves the live data untouched, and a failed swap restores
/// the original directory.
#[derive(Clone)]
pub struct RollbackEngine {
    layout: InstallLayout,
}

impl RollbackEngine {
    pub fn new(layout: InstallLayout) -> Self {
        Self { layout }
    }

    pub async fn rollback(&self, profile: &Profile, artifact_name: &str) -> Result<()> {
        // Artifact names are plain filenames inside the backup dir.
        if artifact_name.contains(['/', '\\']) || artifact_name.contains("..") {
            return Err(ManagerError::not_found(format!(
                "Backup not found: {artifact_name}"
            )));
        }

        let paths = self.layout.paths_for(profile);
        let archive = paths.backups.join(artifact_name);

        if !archive.is_file() {
            return Err(ManagerError::not_found(format!(
                "Backup not found: {artifact_name}"
            )));
        }

        let save = paths.save.clone();
        let name = artifact_name.to_string();
        let profile_name = profile.name.clone();

        tokio::task::spawn_blocking(move || {
            let staging = sibling(&save, ".staging");
            extract_archive(&archive, &staging)?;
            swap_in(&staging, &save)?;
            info!("Rolled back profile {profile_name} to {name}");
            Ok(())
        })
        .await
        .map_err(|e| ManagerError::process(format!("Rollback task failed: {e}")))?
    }
}

/// Extract every entry of `archive` into `target`, which is recreated
/// from scratch. Entries that escape the target directory are skipped.
fn extract_archive(archive: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        std::fs::remove_dir_all(target).map_err(|e| ManagerError::io(target, e))?;
    }
    std::fs::create_dir_all(target).map_err(|e| ManagerError::io(target, e))?;

    let file = File::open(archive).map_err(|e| ManagerError::io(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| ManagerError::archive(archive, e))?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|e| ManagerError::archive(archive, e))?;

        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping unsafe archive entry: {}", entry.name());
            continue;
        };
        let destination = target.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&destination)
                .map_err(|e| ManagerError::io(&destination, e))?;
        } else {
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ManagerError::io(parent, e))?;
            }
            let mut output =
                File::create(&destination).map_err(|e| ManagerError::io(&destination, e))?;
            std::io::copy(&mut entry, &mut output)
                .map_err(|e| ManagerError::io(&destination, e))?;
        }
    }

    Ok(())
}

/// Swap a fully extracted staging directory into place of the live one.
/// The live directory is renamed aside first and restored if the swap
/// fails, so the save data survives a mid-swap error.
fn swap_in(staging: &Path, live: &Path) -> Result<()> {
    let aside = sibling(live, ".previous");

    if aside.exists() {
        std::fs::remove_dir_all(&aside).map_err(|e| ManagerError::io(&aside, e))?;
    }

    let had_live = live.exists();
    if had_live {
        std::fs::rename(live, &aside).map_err(|e| ManagerError::io(live, e))?;
    }

    if let Err(e) = std::fs::rename(staging, live) {
        if had_live {
            if let Err(restore) = std::fs::rename(&aside, live) {
                error!(
                    "Failed to restore {} after aborted swap: {restore}",
                    live.display()
                );
            }
        }
        return Err(ManagerError::io(live, e));
    }

    if had_live {
        // The aside copy is disposable once the swap landed.
        if let Err(e) = std::fs::remove_dir_all(&aside) {
            warn!("Could not remove {}: {e}", aside.display());
        }
    }

    Ok(())
}

fn sibling(dir: &Path, suffix: &str) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "save".to_string());
    dir.with_file_name(format!("{name}{suffix}"))
}
