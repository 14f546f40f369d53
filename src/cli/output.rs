//! Output formatting helpers for CLI commands

use crate::batch::BatchRun;
use crate::probe::{ProbeKind, ProbeResult};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

/// View model for a single probe result
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResultView {
    pub url: String,
    pub kind: ProbeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
    pub checked_at: String,
}

impl From<&ProbeResult> for ProbeResultView {
    fn from(result: &ProbeResult) -> Self {
        Self {
            url: result.target.to_string(),
            kind: result.kind(),
            status_code: result.status_code(),
            error: result.error_detail().map(str::to_string),
            elapsed_ms: result.elapsed.as_millis() as u64,
            checked_at: result.checked_at.to_rfc3339(),
        }
    }
}

/// View model for a whole batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchRunView {
    pub run_id: String,
    pub started_at: String,
    pub elapsed_ms: u64,
    pub target_count: usize,
    pub all_up: bool,
    pub results: Vec<ProbeResultView>,
}

impl From<&BatchRun> for BatchRunView {
    fn from(run: &BatchRun) -> Self {
        let mut results: Vec<ProbeResultView> =
            run.results.iter().map(ProbeResultView::from).collect();
        results.sort_by(|a, b| a.url.cmp(&b.url));

        Self {
            run_id: run.run_id.clone(),
            started_at: run.started_at.to_rfc3339(),
            elapsed_ms: run.elapsed.as_millis() as u64,
            target_count: run.target_count(),
            all_up: run.all_up(),
            results,
        }
    }
}

/// Colored label for a probe kind
pub fn kind_label(kind: ProbeKind) -> String {
    match kind {
        ProbeKind::Success => "Success".green().to_string(),
        ProbeKind::FailureStatus => "Failure".yellow().to_string(),
        ProbeKind::Timeout => "Timeout".red().to_string(),
        ProbeKind::TransportError => "Error".red().to_string(),
    }
}

/// Format batch results as a table followed by a one-line summary
pub fn format_results_table(run: &BatchRun) -> String {
    if run.is_empty() {
        return "No targets configured; nothing was pinged.".to_string();
    }

    let view = BatchRunView::from(run);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["URL", "Outcome", "Status", "Latency", "Detail"]);

    for r in &view.results {
        table.add_row(vec![
            Cell::new(&r.url),
            Cell::new(kind_label(r.kind)),
            Cell::new(
                r.status_code
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(format!("{}ms", r.elapsed_ms)),
            Cell::new(r.error.as_deref().unwrap_or("")),
        ]);
    }

    format!("{}\n{}", table, format_summary(run))
}

/// One-line summary of a batch
pub fn format_summary(run: &BatchRun) -> String {
    format!(
        "{} URLs in {}ms: {} up, {} failed, {} timed out, {} errors",
        run.target_count(),
        run.elapsed.as_millis(),
        run.count_of(ProbeKind::Success),
        run.count_of(ProbeKind::FailureStatus),
        run.count_of(ProbeKind::Timeout),
        run.count_of(ProbeKind::TransportError),
    )
}

/// Format batch results as JSON
pub fn format_results_json(run: &BatchRun) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BatchRunView::from(run))
}
