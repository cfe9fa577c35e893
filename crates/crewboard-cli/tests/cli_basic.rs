//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. None of
//! them require a running solver backend; network-touching commands are
//! pointed at an unroutable port and expected to fail cleanly.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "crewboard-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for subcommand in ["demo", "schedule", "solve", "stop", "analyze", "config"] {
        assert!(stdout.contains(subcommand), "help is missing '{subcommand}'");
    }
}

#[test]
fn test_config_show_prints_toml() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("base_url"));
    assert!(stdout.contains("poll_interval_secs"));
}

#[test]
fn test_demo_list_fails_cleanly_without_backend() {
    let (_, stderr, code) = run_cli(&["--base-url", "http://127.0.0.1:1", "demo", "list"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_solve_requires_a_dataset() {
    let (_, stderr, code) = run_cli(&["--base-url", "http://127.0.0.1:1", "solve"]);
    if code != 0 {
        // Without a configured default dataset the command must explain itself.
        assert!(stderr.contains("error:"));
    }
}

#[test]
fn test_schedule_rejects_malformed_job_id() {
    let (_, stderr, code) = run_cli(&["schedule", "not-a-uuid"]);
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_invalid_base_url_is_reported() {
    let (_, stderr, code) = run_cli(&["--base-url", "not a url", "demo", "list"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}
