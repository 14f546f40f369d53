//! Transport fault types.

use std::time::Duration;
use thiserror::Error;

/// Faults reported by a [`Transport`](super::Transport) for a single request.
///
/// A non-2xx response is not a fault; it is returned as a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFault {
    /// No response before the request deadline.
    #[error("request timed out after {}", format_deadline(*.0))]
    Timeout(Duration),

    /// Connection refused, DNS failure, malformed response and so on.
    #[error("{0}")]
    Failed(String),
}

/// Render a deadline as whole seconds when possible, milliseconds otherwise.
pub fn format_deadline(deadline: Duration) -> String {
    if deadline.subsec_nanos() == 0 {
        format!("{}s", deadline.as_secs())
    } else {
        format!("{}ms", deadline.as_millis())
    }
}
