//! Probe targets and target-list parsing.

use serde::Serialize;
use std::fmt;

/// Delimiter between URLs in a configured target list.
pub const TARGET_DELIMITER: char = ',';

/// A single URL to be health-checked.
///
/// Always trimmed and never empty; the only way to obtain one is through
/// [`Target::new`] or [`parse_target_list`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    /// Build a target from raw input. Returns `None` for blank input.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the target parses as an absolute `http` or `https` URL.
    ///
    /// Targets that fail this check are still probed; the transport reports
    /// them as transport errors.
    pub fn is_http_url(&self) -> bool {
        url::Url::parse(&self.0)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
            .unwrap_or(false)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split a delimited URL list into targets, dropping blank entries.
pub fn parse_target_list(raw: &str) -> Vec<Target> {
    raw.split(TARGET_DELIMITER).filter_map(Target::new).collect()
}

/// Where a run's targets came from, after resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// No URL list configured at all (or configured as an empty string).
    Unset,
    /// A URL list was configured but every entry was blank.
    Blank,
    /// At least one usable target.
    Targets(Vec<Target>),
}

impl TargetSource {
    /// Resolve a raw delimited string, e.g. the value of `URLS_TO_PING`.
    pub fn from_delimited(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Unset,
            Some(raw) => Self::from_targets(parse_target_list(raw)),
        }
    }

    /// Resolve an already-split list of entries, e.g. `ping.urls` from a config file.
    pub fn from_entries<S: AsRef<str>>(entries: Option<&[S]>) -> Self {
        match entries {
            None => Self::Unset,
            Some(entries) => Self::from_targets(entries.iter().filter_map(Target::new).collect()),
        }
    }

    fn from_targets(targets: Vec<Target>) -> Self {
        if targets.is_empty() {
            Self::Blank
        } else {
            Self::Targets(targets)
        }
    }

    /// Targets to probe; empty for `Unset` and `Blank`.
    pub fn targets(&self) -> &[Target] {
        match self {
            Self::Targets(targets) => targets,
            Self::Unset | Self::Blank => &[],
        }
    }
}
