//! Classified probe outcomes.

use super::error::TransportFault;
use super::target::Target;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The four ways a probe can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Success,
    FailureStatus,
    Timeout,
    TransportError,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 4] = [
        ProbeKind::Success,
        ProbeKind::FailureStatus,
        ProbeKind::Timeout,
        ProbeKind::TransportError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Success => "success",
            ProbeKind::FailureStatus => "failure_status",
            ProbeKind::Timeout => "timeout",
            ProbeKind::TransportError => "transport_error",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a probe. Status-code outcomes carry the code, fault outcomes
/// carry a human-readable cause; never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Response with a status in [200, 300)
    Success { status: u16 },
    /// Response with any other status
    FailureStatus { status: u16 },
    /// No response before the deadline
    Timeout { detail: String },
    /// Any other transport-level fault
    TransportError { detail: String },
}

impl ProbeOutcome {
    /// Classify a received status code.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            ProbeOutcome::Success { status }
        } else {
            ProbeOutcome::FailureStatus { status }
        }
    }

    /// Classify a transport fault.
    pub fn from_fault(fault: TransportFault) -> Self {
        match fault {
            TransportFault::Timeout(_) => ProbeOutcome::Timeout {
                detail: fault.to_string(),
            },
            TransportFault::Failed(detail) if detail.trim().is_empty() => {
                ProbeOutcome::TransportError {
                    detail: "unknown transport error".to_string(),
                }
            }
            TransportFault::Failed(detail) => ProbeOutcome::TransportError { detail },
        }
    }

    pub fn kind(&self) -> ProbeKind {
        match self {
            ProbeOutcome::Success { .. } => ProbeKind::Success,
            ProbeOutcome::FailureStatus { .. } => ProbeKind::FailureStatus,
            ProbeOutcome::Timeout { .. } => ProbeKind::Timeout,
            ProbeOutcome::TransportError { .. } => ProbeKind::TransportError,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status } | ProbeOutcome::FailureStatus { status } => {
                Some(*status)
            }
            ProbeOutcome::Timeout { .. } | ProbeOutcome::TransportError { .. } => None,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Timeout { detail } | ProbeOutcome::TransportError { detail } => {
                Some(detail)
            }
            ProbeOutcome::Success { .. } | ProbeOutcome::FailureStatus { .. } => None,
        }
    }
}

/// Result of probing one target.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// The URL that was probed
    pub target: Target,
    /// Classified outcome
    pub outcome: ProbeOutcome,
    /// Wall-clock time spent waiting on the transport
    pub elapsed: Duration,
    /// When the probe completed
    pub checked_at: DateTime<Utc>,
}

impl ProbeResult {
    pub fn new(target: Target, outcome: ProbeOutcome, elapsed: Duration) -> Self {
        Self {
            target,
            outcome,
            elapsed,
            checked_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> ProbeKind {
        self.outcome.kind()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.outcome.status_code()
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.outcome.error_detail()
    }

    pub fn is_success(&self) -> bool {
        self.kind() == ProbeKind::Success
    }
}
