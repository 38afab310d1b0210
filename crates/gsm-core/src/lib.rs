pub mod models;

#[cfg(test)]
mod tests;

pub use models::backup_artifact::{BackupArtifact, BackupOrigin};
pub use models::profile::Profile;
pub use models::resource_sample::{ResourceHistory, ResourceSample};
pub use models::settings::Settings;
pub use models::template::Template;
pub use models::tracked_process::TrackedProcess;

/// Bounded length of every per-profile resource history.
/// Roughly 15-20 minutes of samples at the default 5s tick.
pub const RESOURCE_HISTORY_CAPACITY: usize = 200;
