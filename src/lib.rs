//! url-pinger - periodic concurrent HTTP liveness probe
//!
//! Pings a configured list of URLs in parallel on every run and logs a
//! success, failure, timeout or transport-error outcome for each one.

pub mod batch;
pub mod cli;
pub mod config;
pub mod logging;
pub mod probe;
pub mod scheduler;
