//! Probe configuration

use crate::batch::{default_user_agent, BatchOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest accepted per-request deadline (one day).
pub const MAX_TIMEOUT_SECONDS: u64 = 24 * 60 * 60;

/// What to ping and how long to wait for each target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Target URLs; `URLS_TO_PING` replaces this list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    /// Per-request deadline
    pub timeout_seconds: u64,
    /// In-flight probe bound; 0 = unbounded
    pub max_concurrency: usize,
    pub user_agent: String,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            urls: None,
            timeout_seconds: 30,
            max_concurrency: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl PingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.min(MAX_TIMEOUT_SECONDS))
    }

    /// Options for a batch run built from this configuration.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            timeout: self.timeout(),
            max_concurrency: self.max_concurrency,
            user_agent: self.user_agent.clone(),
        }
    }
}
