//! Tracked server process - one live OS handle per profile.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A server process spawned (or adopted) for a profile.
/// At most one exists per profile name; that uniqueness is the
/// registry's core invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProcess {
    pub profile_name: String,
    pub pid: u32,
    pub started_at: DateTime<Utc>,
}

impl TrackedProcess {
    pub fn new(profile_name: impl Into<String>, pid: u32) -> Self {
        Self {
            profile_name: profile_name.into(),
            pid,
            started_at: Utc::now(),
        }
    }
}
