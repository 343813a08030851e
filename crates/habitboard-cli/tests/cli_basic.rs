//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a temporary home directory and a
//! snapshot fixture, and verify outputs.

use std::path::Path;
use std::process::Command;

const SNAPSHOT: &str = r#"{
    "habits": [
        {"id": "read", "name": "Read", "tracking_start_date": "2025-06-27"},
        {"id": "run", "name": "Run", "tracking_start_date": "2025-06-27"}
    ],
    "instances": [
        {"id": "1", "habit_id": "read", "date": "2025-06-27", "completed": true},
        {"id": "2", "habit_id": "run", "date": "2025-06-27", "completed": true},
        {"id": "3", "habit_id": "read", "date": "2025-06-28", "completed": true},
        {"id": "4", "habit_id": "run", "date": "2025-06-28", "completed": true},
        {"id": "5", "habit_id": "read", "date": "2025-06-29", "completed": false}
    ]
}"#;

struct Fixture {
    home: tempfile::TempDir,
    snapshot: String,
}

impl Fixture {
    fn new() -> Self {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join("snapshot.json");
        std::fs::write(&path, SNAPSHOT).unwrap();
        let snapshot = path.to_string_lossy().to_string();
        Self { home, snapshot }
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        run_cli(self.home.path(), args)
    }

    /// Run with `--snapshot` pointing at the fixture.
    fn run_with_snapshot(&self, args: &[&str]) -> (String, String, i32) {
        let mut full = vec!["--snapshot", self.snapshot.as_str()];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitboard"))
        .args(args)
        .env("HOME", home)
        .env_remove("HABITBOARD_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_status_plain() {
    let fx = Fixture::new();
    let (stdout, _, code) = fx.run_with_snapshot(&[
        "status", "--habit", "read", "--date", "2025-06-29", "--today", "2025-06-30",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "not_completed");

    let (stdout, _, _) = fx.run_with_snapshot(&[
        "status", "--habit", "run", "--date", "2025-06-26", "--today", "2025-06-30",
    ]);
    assert_eq!(stdout.trim(), "not_tracked");
}

#[test]
fn test_status_json() {
    let fx = Fixture::new();
    let (stdout, _, code) = fx.run_with_snapshot(&[
        "status", "--habit", "read", "--date", "2025-06-28", "--today", "2025-06-30", "--json",
    ]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["status"], "completed");
    assert_eq!(json["date"], "2025-06-28");
    assert_eq!(json["progress"], 1.0);
}

#[test]
fn test_today_summary() {
    let fx = Fixture::new();
    let (stdout, _, code) =
        fx.run_with_snapshot(&["today", "--date", "2025-06-29", "--today", "2025-06-30"]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["totals"]["missed"], 1);
    assert_eq!(json["totals"]["pending"], 1);
    assert_eq!(json["totals"]["total"], 2);
    assert_eq!(json["per_habit"]["run"], "pending");
}

#[test]
fn test_streak() {
    let fx = Fixture::new();
    let (stdout, _, code) =
        fx.run_with_snapshot(&["streak", "--date", "2025-06-28", "--today", "2025-06-30"]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["length"], 2);
    assert_eq!(json["start_date"], "2025-06-27");

    let (stdout, _, _) = fx.run_with_snapshot(&[
        "streak", "--date", "2025-06-28", "--today", "2025-06-30", "--max-lookback", "1",
    ]);
    let json = parse_json(&stdout);
    assert_eq!(json["length"], 1);
    assert_eq!(json["truncated"], true);
}

#[test]
fn test_grid_ascii_and_json() {
    let fx = Fixture::new();
    let (stdout, _, code) = fx.run_with_snapshot(&[
        "grid", "--habit", "read", "--year", "2025", "--today", "2025-06-30",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Habit read - 2025"));
    assert!(stdout.contains("Completion rate: 50%"));

    let (stdout, _, code) = fx.run_with_snapshot(&[
        "grid", "--habit", "read", "--year", "2025", "--today", "2025-06-30", "--json",
    ]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["total_tracked_days"], 4);
    assert_eq!(json["completed_days"], 2);
    assert_eq!(json["days"].as_array().unwrap().len(), 53);
}

#[test]
fn test_snapshot_from_config() {
    let fx = Fixture::new();
    let (_, _, code) = fx.run(&["config", "set", "snapshot.path", fx.snapshot.as_str()]);
    assert_eq!(code, 0);

    let (stdout, _, code) = fx.run(&[
        "status", "--habit", "read", "--date", "2025-06-28", "--today", "2025-06-30",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "completed");
}

#[test]
fn test_missing_snapshot_fails() {
    let fx = Fixture::new();
    let (_, stderr, code) = fx.run(&["today"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("No snapshot configured"));
}

#[test]
fn test_unknown_habit_fails() {
    let fx = Fixture::new();
    let (_, stderr, code) = fx.run_with_snapshot(&["grid", "--habit", "ghost", "--year", "2025"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown habit: ghost"));
}

#[test]
fn test_malformed_date_fails() {
    let fx = Fixture::new();
    let (_, stderr, code) = fx.run_with_snapshot(&["today", "--date", "June 28"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid date"));
}

#[test]
fn test_config_get_set_list() {
    let fx = Fixture::new();
    let (stdout, _, code) = fx.run(&["config", "get", "streak.max_lookback_days"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let (stdout, _, code) = fx.run(&["config", "set", "streak.max_lookback_days", "45"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, _) = fx.run(&["config", "list"]);
    let json = parse_json(&stdout);
    assert_eq!(json["streak"]["max_lookback_days"], 45);

    let (_, _, code) = fx.run(&["config", "get", "streak.nope"]);
    assert_ne!(code, 0);

    let (stdout, _, code) = fx.run(&["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
}
