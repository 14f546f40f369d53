//! Schedule configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest accepted interval between runs (one year).
pub const MAX_INTERVAL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// How often the scheduler triggers a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds between batch runs
    pub interval_seconds: u64,
    /// Run a batch immediately instead of waiting one interval first
    pub run_on_startup: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
            run_on_startup: false,
        }
    }
}

impl ScheduleConfig {
    /// Interval between runs, capped at [`MAX_INTERVAL_SECONDS`].
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.min(MAX_INTERVAL_SECONDS))
    }
}
