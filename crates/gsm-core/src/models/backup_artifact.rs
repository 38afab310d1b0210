//! Backup artifacts - compressed snapshots of a save directory.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Whether a snapshot was requested by the operator or produced by the
/// retention scheduler. The origin is encoded in the filename prefix so
/// the scheduler can recompute its cadence purely from the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupOrigin {
    Manual,
    Automatic,
}

impl BackupOrigin {
    /// Filename prefix, fixed for artifact compatibility.
    pub fn prefix(self) -> &'static str {
        match self {
            BackupOrigin::Manual => "backup_",
            BackupOrigin::Automatic => "auto_",
        }
    }

    /// Classify an artifact filename by its prefix.
    pub fn of_filename(name: &str) -> Option<Self> {
        if name.starts_with(BackupOrigin::Automatic.prefix()) {
            Some(BackupOrigin::Automatic)
        } else if name.starts_with(BackupOrigin::Manual.prefix()) {
            Some(BackupOrigin::Manual)
        } else {
            None
        }
    }

    /// Build the artifact filename for a creation instant:
    /// `<prefix><UTC ISO-8601 with ':' and '.' replaced by '-'>.zip`.
    pub fn filename_at(self, at: DateTime<Utc>) -> String {
        let stamp = at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        format!("{}{}.zip", self.prefix(), stamp)
    }
}

/// A single immutable zip snapshot in a profile's backup directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupArtifact {
    pub name: String,
    /// Archive size in bytes.
    pub size: u64,
    /// Creation time, derived from the file's modification time.
    pub date: DateTime<Utc>,
    #[serde(skip)]
    pub origin: Option<BackupOrigin>,
}
