//! Probe runner: one HTTP GET against one target under a fixed deadline.
//!
//! [`probe`] never returns an error. Every transport fault and timeout is
//! converted into a [`ProbeResult`] and logged exactly once, which is what
//! lets the batch orchestrator run probes side by side without one failure
//! affecting another.

mod error;
mod result;
mod target;
mod transport;


pub use error::*;
pub use result::*;
pub use target::*;
pub use transport::*;

use std::time::{Duration, Instant};

/// Probe a single target and log the outcome.
///
/// The deadline is enforced here as well as being handed to the transport, so
/// a transport that ignores its timeout still cannot hang the probe.
pub async fn probe(transport: &dyn Transport, target: &Target, timeout: Duration) -> ProbeResult {
    let start = Instant::now();

    let outcome = match tokio::time::timeout(timeout, transport.get(target.as_str(), timeout)).await
    {
        Ok(Ok(status)) => ProbeOutcome::from_status(status),
        Ok(Err(fault)) => ProbeOutcome::from_fault(fault),
        Err(_elapsed) => ProbeOutcome::from_fault(TransportFault::Timeout(timeout)),
    };

    let result = ProbeResult::new(target.clone(), outcome, start.elapsed());
    log_result(&result);
    result
}

/// Emit the single log line for a finished probe.
pub(crate) fn log_result(result: &ProbeResult) {
    let elapsed_ms = result.elapsed.as_millis() as u64;
    match &result.outcome {
        ProbeOutcome::Success { status } => tracing::info!(
            url = %result.target,
            status = *status,
            elapsed_ms,
            "SUCCESS: {} responded with status {}",
            result.target,
            status
        ),
        ProbeOutcome::FailureStatus { status } => tracing::warn!(
            url = %result.target,
            status = *status,
            elapsed_ms,
            "FAILURE: {} responded with status {}",
            result.target,
            status
        ),
        ProbeOutcome::Timeout { detail } => tracing::error!(
            url = %result.target,
            error = %detail,
            elapsed_ms,
            "ERROR: pinging {} failed with a timeout",
            result.target
        ),
        ProbeOutcome::TransportError { detail } => tracing::error!(
            url = %result.target,
            error = %detail,
            elapsed_ms,
            "ERROR: pinging {} failed: {}",
            result.target,
            detail
        ),
    }
}
