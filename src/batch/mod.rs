//! Batch orchestrator: fan out one probe per target, fan in on all of them.
//!
//! A batch never fails because of a target. Each probe runs in its own task
//! and always yields a [`ProbeResult`]; even a panicking probe task is
//! converted into a `TransportError` result for its target.

mod error;


pub use error::*;

use crate::logging::generate_run_id;
use crate::probe::{
    probe, ProbeKind, ProbeOutcome, ProbeResult, ReqwestTransport, Target, Transport,
};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::Instrument;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every probe unless configured otherwise.
pub fn default_user_agent() -> String {
    format!("url-pinger/{}", env!("CARGO_PKG_VERSION"))
}

/// Knobs for a single batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Deadline applied to each probe individually
    pub timeout: Duration,
    /// Upper bound on in-flight probes; 0 means one task per target, unbounded
    pub max_concurrency: usize,
    /// User agent for the HTTP client built at batch start
    pub user_agent: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl BatchOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }
}

/// Results of one batch. Result order is completion-independent but not
/// guaranteed to match input order.
#[derive(Debug, Clone)]
pub struct BatchRun {
    /// Correlation ID attached to every log line of the batch
    pub run_id: String,
    /// When the batch started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the whole batch
    pub elapsed: Duration,
    /// One result per target
    pub results: Vec<ProbeResult>,
}

impl BatchRun {
    fn empty(run_id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            started_at,
            elapsed: Duration::ZERO,
            results: Vec::new(),
        }
    }

    /// A run that probed nothing.
    pub fn skipped() -> Self {
        Self::empty(generate_run_id(), Utc::now())
    }

    pub fn target_count(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn count_of(&self, kind: ProbeKind) -> usize {
        self.results.iter().filter(|r| r.kind() == kind).count()
    }

    /// Result counts for every kind, including zero counts.
    pub fn kind_counts(&self) -> BTreeMap<ProbeKind, usize> {
        ProbeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count_of(kind)))
            .collect()
    }

    /// True when every probe succeeded (vacuously true for an empty run).
    pub fn all_up(&self) -> bool {
        self.results.iter().all(ProbeResult::is_success)
    }
}

/// Run one batch over a freshly built HTTP client.
///
/// The client is created only when there is something to probe and is
/// dropped, closing its connections, when the batch returns.
///
/// # Errors
///
/// Returns [`BatchError::ClientBuild`] if the HTTP client cannot be built.
/// Individual target failures are reported inside the returned [`BatchRun`].
pub async fn run_batch(targets: &[Target], options: &BatchOptions) -> Result<BatchRun, BatchError> {
    if targets.is_empty() {
        return Ok(skip_empty_batch());
    }

    let transport = ReqwestTransport::new(&options.user_agent).map_err(BatchError::ClientBuild)?;
    Ok(run_batch_with(Arc::new(transport), targets, options).await)
}

/// Run one batch over the given transport.
pub async fn run_batch_with(
    transport: Arc<dyn Transport>,
    targets: &[Target],
    options: &BatchOptions,
) -> BatchRun {
    if targets.is_empty() {
        return skip_empty_batch();
    }

    let run_id = generate_run_id();
    let started_at = Utc::now();
    let start = Instant::now();

    tracing::info!(
        run_id = %run_id,
        target_count = targets.len(),
        max_concurrency = options.max_concurrency,
        "Pinging {} URLs",
        targets.len()
    );

    let limiter = (options.max_concurrency > 0)
        .then(|| Arc::new(Semaphore::new(options.max_concurrency)));
    let span = tracing::info_span!("batch", run_id = %run_id);

    // Fan out: every task is spawned before any is awaited.
    let handles: Vec<_> = targets
        .iter()
        .map(|target| {
            let transport = Arc::clone(&transport);
            let limiter = limiter.clone();
            let task_target = target.clone();
            let timeout = options.timeout;

            tokio::spawn(
                async move {
                    let _permit = match limiter {
                        Some(limiter) => limiter.acquire_owned().await.ok(),
                        None => None,
                    };
                    probe(transport.as_ref(), &task_target, timeout).await
                }
                .instrument(span.clone()),
            )
        })
        .collect();

    // Fan in: wait for every task, whatever it ended with.
    let joined = join_all(handles).await;

    let results: Vec<ProbeResult> = targets
        .iter()
        .zip(joined)
        .map(|(target, joined)| match joined {
            Ok(result) => result,
            Err(join_error) => {
                let result = ProbeResult::new(
                    target.clone(),
                    ProbeOutcome::TransportError {
                        detail: format!("probe task failed: {}", join_error),
                    },
                    start.elapsed(),
                );
                span.in_scope(|| crate::probe::log_result(&result));
                result
            }
        })
        .collect();

    let run = BatchRun {
        run_id,
        started_at,
        elapsed: start.elapsed(),
        results,
    };

    tracing::info!(
        run_id = %run.run_id,
        target_count = run.target_count(),
        succeeded = run.count_of(ProbeKind::Success),
        failed = run.count_of(ProbeKind::FailureStatus),
        timed_out = run.count_of(ProbeKind::Timeout),
        errored = run.count_of(ProbeKind::TransportError),
        elapsed_ms = run.elapsed.as_millis() as u64,
        "Pinging task completed"
    );

    run
}

fn skip_empty_batch() -> BatchRun {
    tracing::warn!("No targets configured, nothing to ping");
    BatchRun::skipped()
}
