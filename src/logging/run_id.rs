//! Batch run ID generation

use uuid::Uuid;

/// Generate a new batch run ID using UUID v4
///
/// Attached as `run_id` to the start, end and per-probe log lines of a
/// batch so that concurrent output can be grouped back together.
///
/// # Examples
///
/// ```
/// use pinger::logging::generate_run_id;
///
/// let run_id = generate_run_id();
/// assert!(!run_id.is_empty());
/// ```
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}
