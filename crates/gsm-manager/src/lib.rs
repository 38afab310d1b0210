//! Process lifecycle and backup/restore subsystem.
//!
//! Owns the running-process registry, the CPU/RAM sampler, backup
//! creation and retention scheduling, and save-directory rollback.
//! The HTTP layer consumes all of it through [`AppState`].

mod app_state;
mod archiver;
mod error;
mod layout;
mod locks;
mod notifier;
mod process_registry;
mod retention;
mod rollback;
mod sampler;

#[cfg(test)]
mod tests;

pub use app_state::AppState;
pub use archiver::BackupArchiver;
pub use error::{ManagerError, Result};
pub use layout::{InstallLayout, ProfilePaths};
pub use locks::ProfileLocks;
pub use notifier::{ServerEvent, WebhookNotifier};
pub use process_registry::{ProcessRegistry, StartOutcome};
pub use retention::RetentionScheduler;
pub use rollback::RollbackEngine;
pub use sampler::ResourceSampler;
