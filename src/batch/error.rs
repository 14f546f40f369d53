//! Orchestration-layer errors.

use thiserror::Error;

/// Faults that abort a whole batch.
///
/// Target misbehaviour never produces one of these; they indicate a broken
/// deployment rather than a down endpoint.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The HTTP client could not be constructed
    #[error("failed to initialize HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
