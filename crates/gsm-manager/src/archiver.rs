//! Save-directory snapshots: creation and listing.

use crate::{InstallLayout, ManagerError, Result};

use gsm_core::{BackupArtifact, BackupOrigin, Profile};

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Creates compressed snapshots of a profile's save-data directory,
/// for on-demand backups and the retention scheduler alike.
#[derive(Clone)]
pub struct BackupArchiver {
    layout: InstallLayout,
}

impl BackupArchiver {
    pub fn new(layout: InstallLayout) -> Self {
        Self { layout }
    }

    /// Stream the whole save tree into one zip artifact.
    ///
    /// The archive is fully written, finished and synced before the
    /// artifact is reported; compression runs on the blocking pool so
    /// timers keep firing while a backup is in flight.
    pub async fn create(&self, profile: &Profile, origin: BackupOrigin) -> Result<BackupArtifact> {
        let paths = self.layout.paths_for(profile);

        if !paths.save.is_dir() {
            return Err(ManagerError::not_found(format!(
                "Save directory not found: {}",
                paths.save.display()
            )));
        }

        std::fs::create_dir_all(&paths.backups)
            .map_err(|e| ManagerError::io(&paths.backups, e))?;

        let name = origin.filename_at(Utc::now());
        let destination = paths.backups.join(&name);

        let save_dir = paths.save.clone();
        let dest = destination.clone();
        let size = tokio::task::spawn_blocking(move || write_archive(&save_dir, &dest))
            .await
            .map_err(|e| ManagerError::process(format!("Archive task failed: {e}")))?
            .map_err(|e| ManagerError::archive(&destination, e))?;

        info!(
            "Created {} backup {} for profile {} ({} bytes)",
            match origin {
                BackupOrigin::Manual => "manual",
                BackupOrigin::Automatic => "automatic",
            },
            name,
            profile.name,
            size
        );

        Ok(BackupArtifact {
            name,
            size,
            date: Utc::now(),
            origin: Some(origin),
        })
    }

    /// List the profile's artifacts, newest first. A missing backup
    /// directory yields an empty list, not an error.
    pub fn list(&self, profile: &Profile) -> Result<Vec<BackupArtifact>> {
        let paths = self.layout.paths_for(profile);
        list_artifacts(&paths.backups)
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }
}

/// Scan a backup directory for zip artifacts, newest first.
pub(crate) fn list_artifacts(backups_dir: &Path) -> Result<Vec<BackupArtifact>> {
    if !backups_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries =
        std::fs::read_dir(backups_dir).map_err(|e| ManagerError::io(backups_dir, e))?;

    let mut artifacts = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !name.ends_with(".zip") || !path.is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| ManagerError::io(&path, e))?;
        let modified = metadata.modified().map_err(|e| ManagerError::io(&path, e))?;

        artifacts.push(BackupArtifact {
            origin: BackupOrigin::of_filename(&name),
            name,
            size: metadata.len(),
            date: DateTime::<Utc>::from(modified),
        });
    }

    // Strictly newest-first; name as tie-break for stable ordering.
    artifacts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.name.cmp(&a.name)));

    Ok(artifacts)
}

/// Write every file under `save_dir` into a new zip at `destination`,
/// paths relative to the save root, maximum deflate compression.
/// Returns the finished archive's size in bytes.
fn write_archive(save_dir: &Path, destination: &Path) -> zip::result::ZipResult<u64> {
    let file = File::create(destination)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    add_directory(&mut zip, options, save_dir, save_dir)?;

    let file = zip.finish()?;
    // Flushed and closed before success is reported - no declaring
    // victory while compression is still in flight.
    file.sync_all()?;

    Ok(file.metadata()?.len())
}

fn add_directory(
    zip: &mut ZipWriter<File>,
    options: SimpleFileOptions,
    root: &Path,
    dir: &Path,
) -> zip::result::ZipResult<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = relative_name(root, &path);

        if path.is_dir() {
            zip.add_directory(format!("{relative}/"), options)?;
            add_directory(zip, options, root, &path)?;
        } else {
            zip.start_file(relative, options)?;
            let mut source = File::open(&path)?;
            std::io::copy(&mut source, zip)?;
        }
    }

    Ok(())
}

fn relative_name(root: &Path, path: &Path) -> String {
    let relative: PathBuf = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
