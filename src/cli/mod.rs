//! CLI module for url-pinger
//!
//! # Commands
//!
//! - `run` - Ping the configured URLs on a fixed interval until interrupted
//! - `check` - Ping once and print a summary
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Ping every 5 minutes
//! URLS_TO_PING="https://example.com,https://example.org" pinger run
//!
//! # One-off check with JSON output
//! pinger check --json https://example.com
//! ```

pub mod check;
pub mod completions;
pub mod config;
pub mod output;
pub mod run;

pub use check::run_check;
pub use completions::handle_completions;
pub use config::handle_config_init;
pub use run::run_pinger;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// url-pinger - periodic HTTP liveness probe
#[derive(Parser, Debug)]
#[command(
    name = "pinger",
    version,
    about = "Periodically pings a list of URLs and logs the outcome"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ping the configured URLs on a schedule
    Run(RunArgs),
    /// Ping the configured URLs once and print the results
    Check(CheckArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "pinger.toml")]
    pub config: PathBuf,

    /// Override seconds between runs
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Override per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Run a batch immediately at startup
    #[arg(long)]
    pub run_on_startup: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PINGER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URLs to ping instead of the configured list
    pub urls: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "pinger.toml")]
    pub config: PathBuf,

    /// Override per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 if any URL did not respond with a 2xx status
    #[arg(long)]
    pub fail_on_down: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PINGER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "pinger.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
