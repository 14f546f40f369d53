//! Configuration module for url-pinger
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`URLS_TO_PING`, `PINGER_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use pinger::config::PingerConfig;
//!
//! let config = PingerConfig::default();
//! assert_eq!(config.ping.timeout_seconds, 30);
//!
//! let toml = r#"
//! [ping]
//! urls = ["https://example.com/health"]
//! "#;
//! let config: PingerConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.ping.urls.unwrap().len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod ping;
pub mod schedule;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use ping::{PingConfig, MAX_TIMEOUT_SECONDS};
pub use schedule::{ScheduleConfig, MAX_INTERVAL_SECONDS};

use crate::probe::{parse_target_list, TargetSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the comma-separated target list.
pub const URLS_ENV: &str = "URLS_TO_PING";

/// Unified configuration for url-pinger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PingerConfig {
    /// Targets and per-request settings
    pub ping: PingConfig,
    /// Batch trigger settings
    pub schedule: ScheduleConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl PingerConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// A non-empty `URLS_TO_PING` replaces `ping.urls`; an empty one is treated
    /// as unset. Invalid numeric values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(URLS_ENV) {
            if !raw.is_empty() {
                self.ping.urls = Some(raw.split(',').map(str::to_string).collect());
            }
        }

        if let Ok(timeout) = std::env::var("PINGER_TIMEOUT_SECONDS") {
            if let Ok(t) = timeout.parse() {
                self.ping.timeout_seconds = t;
            }
        }
        if let Ok(max) = std::env::var("PINGER_MAX_CONCURRENCY") {
            if let Ok(m) = max.parse() {
                self.ping.max_concurrency = m;
            }
        }

        if let Ok(interval) = std::env::var("PINGER_INTERVAL_SECONDS") {
            if let Ok(i) = interval.parse() {
                self.schedule.interval_seconds = i;
            }
        }
        if let Ok(on_startup) = std::env::var("PINGER_RUN_ON_STARTUP") {
            self.schedule.run_on_startup = on_startup.to_lowercase() == "true";
        }

        if let Ok(level) = std::env::var("PINGER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PINGER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Replace the configured targets with an explicit delimited list.
    pub fn with_urls(mut self, raw: &str) -> Self {
        self.ping.urls = Some(
            parse_target_list(raw)
                .into_iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        );
        self
    }

    /// Resolve the configured URL list into targets.
    pub fn target_source(&self) -> TargetSource {
        TargetSource::from_entries(self.ping.urls.as_deref())
    }

    /// Validate configuration
    ///
    /// Malformed URLs are not rejected here; they are probed and reported as
    /// transport errors like any other unreachable target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ping.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "ping.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }
        if self.ping.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::Validation {
                field: "ping.timeout_seconds".to_string(),
                message: format!("timeout cannot exceed {} seconds", MAX_TIMEOUT_SECONDS),
            });
        }

        if self.schedule.interval_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "schedule.interval_seconds".to_string(),
                message: "interval must be non-zero".to_string(),
            });
        }
        if self.schedule.interval_seconds > MAX_INTERVAL_SECONDS {
            return Err(ConfigError::Validation {
                field: "schedule.interval_seconds".to_string(),
                message: format!("interval cannot exceed {} seconds", MAX_INTERVAL_SECONDS),
            });
        }

        if self.ping.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "ping.user_agent".to_string(),
                message: "user agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
