//! Integration tests for the pinger binary.

mod common;

use assert_cmd::Command;
use common::{mock_target, unreachable_url};
use predicates::prelude::*;
use std::time::Duration;

const PINGER_ENV: [&str; 7] = [
    "URLS_TO_PING",
    "PINGER_TIMEOUT_SECONDS",
    "PINGER_MAX_CONCURRENCY",
    "PINGER_INTERVAL_SECONDS",
    "PINGER_RUN_ON_STARTUP",
    "PINGER_LOG_LEVEL",
    "PINGER_LOG_FORMAT",
];

/// `pinger` running in an empty directory with a clean environment.
fn pinger(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pinger").unwrap();
    cmd.current_dir(dir.path());
    for var in PINGER_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    pinger(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_check_without_urls_warns_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    pinger(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No targets configured"))
        .stderr(predicate::str::contains("URLS_TO_PING"));
}

#[test]
fn test_check_blank_env_counts_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let output = pinger(&dir)
        .arg("check")
        .env("URLS_TO_PING", "")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not set"), "stderr: {}", stderr);
    assert_eq!(stderr.matches("WARN").count(), 1, "stderr: {}", stderr);
}

#[test]
fn test_check_delimiters_only_is_blank() {
    let dir = tempfile::tempdir().unwrap();
    let output = pinger(&dir)
        .arg("check")
        .env("URLS_TO_PING", " , ,")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contained no valid URLs"), "stderr: {}", stderr);
    assert_eq!(stderr.matches("WARN").count(), 1, "stderr: {}", stderr);
}

#[test]
fn test_check_blank_positional_urls_warn_as_blank() {
    let dir = tempfile::tempdir().unwrap();
    let output = pinger(&dir).args(["check", " ", " , "]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contained no valid URLs"), "stderr: {}", stderr);
    assert!(!stderr.contains("is not set"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_logs_one_line_per_url_between_start_and_end() {
    let ok = mock_target("/ok", 200, Duration::ZERO).await;
    let broken = mock_target("/broken", 500, Duration::ZERO).await;
    let urls = [
        format!("{}/ok", ok.uri()),
        format!("{}/broken", broken.uri()),
        unreachable_url(),
    ];
    let dir = tempfile::tempdir().unwrap();

    let output = pinger(&dir)
        .args(["check", "--timeout", "5"])
        .args(&urls)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.contains("Pinging 3 URLs"))
        .unwrap_or_else(|| panic!("no start line in: {}", stderr));
    let end = lines
        .iter()
        .position(|l| l.contains("Pinging task completed"))
        .unwrap_or_else(|| panic!("no end line in: {}", stderr));
    assert!(start < end);

    let is_outcome = |l: &&str| {
        l.contains("SUCCESS: ") || l.contains("FAILURE: ") || l.contains("ERROR: pinging")
    };
    let between: Vec<&str> = lines[start + 1..end]
        .iter()
        .copied()
        .filter(is_outcome)
        .collect();
    assert_eq!(between.len(), 3, "stderr: {}", stderr);
    assert_eq!(lines.iter().copied().filter(is_outcome).count(), 3);

    for url in &urls {
        assert_eq!(
            between.iter().filter(|l| l.contains(url.as_str())).count(),
            1,
            "expected one line for {} in: {}",
            url,
            stderr
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_json_reports_success() {
    let server = mock_target("/health", 200, Duration::ZERO).await;
    let url = format!("{}/health", server.uri());
    let dir = tempfile::tempdir().unwrap();

    let output = pinger(&dir)
        .args(["check", "--json", url.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["target_count"], 1);
    assert_eq!(report["all_up"], true);
    assert_eq!(report["results"][0]["url"], url.as_str());
    assert_eq!(report["results"][0]["kind"], "success");
    assert_eq!(report["results"][0]["status_code"], 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_reads_urls_from_env() {
    let server = mock_target("/health", 200, Duration::ZERO).await;
    let url = format!("{}/health", server.uri());
    let dir = tempfile::tempdir().unwrap();

    let output = pinger(&dir)
        .args(["check", "--json"])
        .env("URLS_TO_PING", format!(" {} , ", url))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["target_count"], 1);
    assert_eq!(report["results"][0]["url"], url.as_str());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_fail_on_down_exits_nonzero() {
    let server = mock_target("/health", 500, Duration::ZERO).await;
    let url = format!("{}/health", server.uri());
    let dir = tempfile::tempdir().unwrap();

    pinger(&dir)
        .args(["check", "--fail-on-down", url.as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("1 failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_failures_without_flag_still_succeed() {
    let server = mock_target("/health", 404, Duration::ZERO).await;
    let url = format!("{}/health", server.uri());
    let dir = tempfile::tempdir().unwrap();

    pinger(&dir).args(["check", url.as_str()]).assert().success();
}

#[test]
fn test_config_init_writes_example() {
    let dir = tempfile::tempdir().unwrap();
    pinger(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let written = std::fs::read_to_string(dir.path().join("pinger.toml")).unwrap();
    assert!(written.contains("[ping]"));
}

#[test]
fn test_invalid_timeout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    pinger(&dir)
        .args(["check", "--timeout", "0", "http://127.0.0.1:9/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_run_rejects_oversized_interval() {
    let dir = tempfile::tempdir().unwrap();
    pinger(&dir)
        .args(["run", "--interval", "18446744073709551615"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("interval cannot exceed"));
}
