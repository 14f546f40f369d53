//! Run command implementation

use crate::cli::RunArgs;
use crate::config::PingerConfig;
use crate::logging::init_tracing;
use crate::probe::Target;
use crate::scheduler::Pinger;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Load configuration from `path` if it exists, then apply environment overrides
pub fn load_config(path: &Path) -> Result<PingerConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        PingerConfig::load(Some(path))?
    } else {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        PingerConfig::default()
    };

    Ok(config.with_env_overrides())
}

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &RunArgs,
) -> Result<PingerConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;

    if let Some(interval) = args.interval {
        config.schedule.interval_seconds = interval;
    }
    if let Some(timeout) = args.timeout {
        config.ping.timeout_seconds = timeout;
    }
    if args.run_on_startup {
        config.schedule.run_on_startup = true;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Log a warning for every configured target that is not an http(s) URL
pub fn warn_on_suspicious_targets(targets: &[Target]) {
    for target in targets.iter().filter(|t| !t.is_http_url()) {
        tracing::warn!(
            url = %target,
            "Target is not an absolute http(s) URL and will likely fail"
        );
    }
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
        _ = cancel_token.cancelled() => {}
    }

    cancel_token.cancel();
}

/// Main run command handler
pub async fn run_pinger(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;

    tracing::info!("Starting url-pinger");
    tracing::debug!(?config, "Loaded configuration");

    // 3. Resolve targets and start the schedule
    let pinger = Pinger::new(&config);
    warn_on_suspicious_targets(pinger.source().targets());

    let cancel_token = CancellationToken::new();
    let handle = pinger.start(cancel_token.clone());
    let signal_handle = tokio::spawn(shutdown_signal(cancel_token.clone()));

    // 4. Wait for the pinger to stop, either on signal or on a fatal fault
    let result = handle.await;
    cancel_token.cancel();
    signal_handle.await?;
    result??;

    tracing::info!("url-pinger stopped");
    Ok(())
}
