//! Periodic trigger for batch runs.
//!
//! [`Pinger::ping_once`] is the per-invocation entry point: it resolves the
//! configured targets, warns when there are none, and otherwise runs a batch.
//! [`Pinger::start`] drives it on a fixed interval until cancelled.

use crate::batch::{run_batch, BatchError, BatchOptions, BatchRun};
use crate::config::{PingerConfig, ScheduleConfig, URLS_ENV};
use crate::probe::TargetSource;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Background service that pings the configured targets on a schedule.
#[derive(Debug, Clone)]
pub struct Pinger {
    /// Targets resolved once at construction
    source: TargetSource,
    /// Per-batch settings
    options: BatchOptions,
    /// Trigger settings
    schedule: ScheduleConfig,
}

impl Pinger {
    pub fn new(config: &PingerConfig) -> Self {
        Self {
            source: config.target_source(),
            options: config.ping.batch_options(),
            schedule: config.schedule.clone(),
        }
    }

    /// Create a pinger from explicit parts (for testing).
    pub fn with_parts(
        source: TargetSource,
        options: BatchOptions,
        schedule: ScheduleConfig,
    ) -> Self {
        Self {
            source,
            options,
            schedule,
        }
    }

    pub fn source(&self) -> &TargetSource {
        &self.source
    }

    /// Run a single batch over the configured targets.
    ///
    /// Missing or blank configuration is a warning, not an error: no request
    /// is sent and an empty run is returned.
    pub async fn ping_once(&self) -> Result<BatchRun, BatchError> {
        match &self.source {
            TargetSource::Unset => {
                tracing::warn!(
                    setting = URLS_ENV,
                    "The '{}' setting is not set. No URLs to ping.",
                    URLS_ENV
                );
                Ok(BatchRun::skipped())
            }
            TargetSource::Blank => {
                tracing::warn!(
                    setting = URLS_ENV,
                    "The '{}' setting was present but contained no valid URLs.",
                    URLS_ENV
                );
                Ok(BatchRun::skipped())
            }
            TargetSource::Targets(targets) => run_batch(targets, &self.options).await,
        }
    }

    /// Start the pinger background task.
    ///
    /// Returns a JoinHandle that resolves when the pinger stops. A batch that
    /// is already running when `cancel_token` fires is allowed to finish. An
    /// orchestration fault ends the task with the error.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<Result<(), BatchError>> {
        tokio::spawn(async move {
            let period = self.schedule.interval();
            let mut interval = interval_at(Instant::now() + self.initial_delay(), period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            tracing::info!(
                interval_seconds = self.schedule.interval_seconds,
                run_on_startup = self.schedule.run_on_startup,
                targets = self.source.targets().len(),
                "Pinger started"
            );

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("Pinger shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let run = self.ping_once().await?;
                        tracing::debug!(
                            run_id = %run.run_id,
                            targets_checked = run.target_count(),
                            "Ping cycle completed"
                        );
                    }
                }
            }

            Ok::<(), BatchError>(())
        })
    }

    /// Time until the first batch after [`start`](Self::start).
    pub fn initial_delay(&self) -> Duration {
        if self.schedule.run_on_startup {
            Duration::ZERO
        } else {
            self.schedule.interval()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::parse_target_list;

    fn schedule(interval_seconds: u64, run_on_startup: bool) -> ScheduleConfig {
        ScheduleConfig {
            interval_seconds,
            run_on_startup,
        }
    }

    #[tokio::test]
    async fn test_ping_once_unset_is_noop() {
        let pinger = Pinger::with_parts(
            TargetSource::Unset,
            BatchOptions::default(),
            ScheduleConfig::default(),
        );
        let run = pinger.ping_once().await.unwrap();
        assert!(run.is_empty());
    }

    #[tokio::test]
    async fn test_ping_once_blank_is_noop() {
        let pinger = Pinger::with_parts(
            TargetSource::from_delimited(Some(" , ")),
            BatchOptions::default(),
            ScheduleConfig::default(),
        );
        let run = pinger.ping_once().await.unwrap();
        assert!(run.is_empty());
    }

    #[tokio::test]
    async fn test_start_with_huge_interval_does_not_panic() {
        let pinger = Pinger::with_parts(
            TargetSource::Unset,
            BatchOptions::default(),
            schedule(u64::MAX, false),
        );
        let cancel_token = CancellationToken::new();
        let handle = pinger.start(cancel_token.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_token.cancel();

        assert!(handle.await.unwrap().is_ok());
    }

    #[test]
    fn test_initial_delay_is_capped() {
        let pinger = Pinger::with_parts(
            TargetSource::Unset,
            BatchOptions::default(),
            schedule(u64::MAX, false),
        );
        assert_eq!(
            pinger.initial_delay(),
            Duration::from_secs(crate::config::MAX_INTERVAL_SECONDS)
        );
    }

    #[test]
    fn test_pinger_from_config() {
        let mut config = PingerConfig::default().with_urls("https://a.example,https://b.example");
        config.ping.timeout_seconds = 7;
        config.schedule.run_on_startup = true;

        let pinger = Pinger::new(&config);
        assert_eq!(
            pinger.source().targets(),
            parse_target_list("https://a.example,https://b.example")
        );
        assert_eq!(pinger.options.timeout, Duration::from_secs(7));
        assert_eq!(pinger.initial_delay(), Duration::ZERO);
    }

    #[test]
    fn test_initial_delay_waits_one_interval_by_default() {
        let pinger = Pinger::with_parts(
            TargetSource::Unset,
            BatchOptions::default(),
            schedule(300, false),
        );
        assert_eq!(pinger.initial_delay(), Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_pinger_stops_on_cancel() {
        let pinger = Pinger::with_parts(
            TargetSource::Unset,
            BatchOptions::default(),
            schedule(1, true),
        );

        let cancel = CancellationToken::new();
        let handle = pinger.start(cancel.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(matches!(result, Ok(Ok(Ok(())))));
    }
}
