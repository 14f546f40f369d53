//! Check command implementation

use crate::cli::output::{format_results_json, format_results_table};
use crate::cli::run::{load_config, warn_on_suspicious_targets};
use crate::cli::CheckArgs;
use crate::config::PingerConfig;
use crate::logging::init_tracing;
use crate::scheduler::Pinger;

/// Rendered result of a one-off check
#[derive(Debug)]
pub struct CheckReport {
    /// Table or JSON, ready to print
    pub output: String,
    /// Whether every pinged URL returned a 2xx status
    pub all_up: bool,
}

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &CheckArgs,
) -> Result<PingerConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;

    if !args.urls.is_empty() {
        config = config.with_urls(&args.urls.join(","));
    }
    if let Some(timeout) = args.timeout {
        config.ping.timeout_seconds = timeout;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Handle `pinger check`: run exactly one batch and render it
pub async fn run_check(args: &CheckArgs) -> Result<CheckReport, Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    let pinger = Pinger::new(&config);
    warn_on_suspicious_targets(pinger.source().targets());

    let run = pinger.ping_once().await?;

    let output = if args.json {
        format_results_json(&run)?
    } else {
        format_results_table(&run)
    };

    Ok(CheckReport {
        output,
        all_up: run.all_up(),
    })
}
