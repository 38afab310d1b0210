//! CPU/RAM samples and the bounded per-profile history.

use crate::RESOURCE_HISTORY_CAPACITY;

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One CPU/memory observation of a profile's server process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceSample {
    pub time: DateTime<Utc>,
    /// Percent of one core; may exceed 100 on multi-core hosts.
    pub cpu: f32,
    /// Resident memory in bytes.
    pub ram: u64,
}

impl ResourceSample {
    pub fn now(cpu: f32, ram: u64) -> Self {
        Self {
            time: Utc::now(),
            cpu,
            ram,
        }
    }
}

/// Ordered sample sequence with ring-buffer semantics: appends at the
/// tail and evicts the oldest entry once `RESOURCE_HISTORY_CAPACITY` is
/// reached. In-memory only; empties on restart.
#[derive(Debug, Clone, Default)]
pub struct ResourceHistory {
    samples: VecDeque<ResourceSample>,
}

impl ResourceHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(RESOURCE_HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest when at capacity.
    pub fn push(&mut self, sample: ResourceSample) {
        if self.samples.len() == RESOURCE_HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest-first snapshot of the stored samples.
    pub fn snapshot(&self) -> Vec<ResourceSample> {
        self.samples.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<&ResourceSample> {
        self.samples.back()
    }
}
