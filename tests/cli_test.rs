// ABOUTME: End-to-end tests for the zenwork-cli binary
// ABOUTME: Runs subcommands against a temporary log export and checks JSON output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::Utc;
use serde_json::Value;
use tempfile::TempDir;

const LOGS: &str = r#"[
    {"id": "d1", "date": "2025-03-08T09:00:00Z", "mood": 3, "stressLevel": 8, "hoursWorked": 8, "waterIntake": 8},
    {"id": "d2", "date": "2025-03-09T09:00:00Z", "mood": 3, "stressLevel": 8, "hoursWorked": 8, "waterIntake": 8},
    {"id": "d3", "date": "2025-03-10T09:00:00Z", "mood": 3, "stressLevel": 8, "hoursWorked": 8, "waterIntake": 8},
    {"id": "d4", "date": "2025-03-11T09:00:00Z", "mood": 3, "stressLevel": 9, "hoursWorked": 10, "waterIntake": 8}
]"#;

fn write_logs(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("logs.json");
    fs::write(&path, contents).unwrap();
    path
}

fn run(logs: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zenwork-cli"))
        .arg("--logs")
        .arg(logs)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("ZENWORK_WATER_GOAL")
        .env_remove("ZENWORK_WELLNESS_GOAL")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_metrics_command() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let json = stdout_json(&run(&logs, &["--date", "2025-03-11", "metrics"]));
    assert_eq!(json["stressScore"], 100.0);
    assert_eq!(json["nervousSystem"]["state"], "activated");
    let negative = json["contributors"]["negative"].as_array().unwrap();
    assert!(negative
        .iter()
        .any(|factor| factor == "Accumulated stress from past 3 days"));
}

#[test]
fn test_zen_score_command() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let json = stdout_json(&run(&logs, &["--date", "2025-03-11", "zen-score"]));
    // 24 + 4 + 20
    assert_eq!(json["zenScore"], 48);
    assert_eq!(json["checkedIn"], true);

    let json = stdout_json(&run(&logs, &["--date", "2025-03-12", "zen-score"]));
    assert_eq!(json["zenScore"], 0);
}

#[test]
fn test_dashboard_commands() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let quests = stdout_json(&run(
        &logs,
        &["--date", "2025-03-11", "quests", "--breathing-completed"],
    ));
    assert_eq!(quests["xpEarned"], 100);

    let summary = stdout_json(&run(&logs, &["--date", "2025-03-11", "summary"]));
    assert_eq!(summary["currentStreak"], 4);
    assert_eq!(summary["logCount"], 4);

    let journal = stdout_json(&run(&logs, &["journal", "--filter", "high-stress"]));
    let ids: Vec<_> = journal
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids, vec!["d4", "d3", "d2", "d1"]);
}

#[test]
fn test_summary_and_journal_stop_at_scoring_date() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let summary = stdout_json(&run(&logs, &["--date", "2025-03-10", "summary"]));
    assert_eq!(summary["logCount"], 3);
    assert_eq!(summary["currentStreak"], 3);
    assert_eq!(summary["averageStress"], 8.0);

    let journal = stdout_json(&run(
        &logs,
        &["--date", "2025-03-10", "journal", "--filter", "high-stress"],
    ));
    let ids: Vec<_> = journal
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids, vec!["d3", "d2", "d1"]);
}

#[test]
fn test_default_date_is_utc_day() {
    let dir = TempDir::new().unwrap();
    let now = Utc::now().to_rfc3339();
    let logs = write_logs(
        &dir,
        &format!(
            r#"[{{"id": "now", "date": "{now}", "mood": 3, "stressLevel": 9, "hoursWorked": 8, "waterIntake": 8}}]"#
        ),
    );

    // Kiritimati is UTC+14, so its local date differs from the UTC date for most of the day
    let output = Command::new(env!("CARGO_BIN_EXE_zenwork-cli"))
        .arg("--logs")
        .arg(&logs)
        .arg("metrics")
        .env("RUST_LOG", "error")
        .env("TZ", "Pacific/Kiritimati")
        .env_remove("ZENWORK_WATER_GOAL")
        .env_remove("ZENWORK_WELLNESS_GOAL")
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["stressScore"], 90.0);
}

#[test]
fn test_coach_context_command() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let json = stdout_json(&run(
        &logs,
        &[
            "--date",
            "2025-03-11",
            "coach-context",
            "--name",
            "Sam",
            "--role",
            "Staff Engineer",
            "--goal",
            "reduce-stress",
        ],
    ));
    assert_eq!(json["roleCategory"], "developer");
    assert_eq!(json["goalHeadline"], "REDUCE STRESS");
    assert_eq!(
        json["leadingFactor"],
        "Work hours higher than average (+2.0h)"
    );
    assert_eq!(json["recentLogs"].as_array().unwrap().len(), 4);
}

#[test]
fn test_series_command() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let json = stdout_json(&run(&logs, &["series"]));
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["logId"], "d1");
    assert_eq!(entries[3]["date"], "2025-03-11");
    // 2025-03-10 is a Monday with history
    assert_eq!(entries[2]["metrics"]["recoveryScore"], 65.0);
}

#[test]
fn test_zero_water_goal_exits_with_data_error() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(&dir, LOGS);

    let output = run(&logs, &["--water-goal", "0", "metrics"]);
    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("VALUE_OUT_OF_RANGE"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_export_exits_with_no_input() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir.path().join("absent.json"), &["metrics"]);
    assert_eq!(output.status.code(), Some(66));
}

#[test]
fn test_invalid_log_is_rejected() {
    let dir = TempDir::new().unwrap();
    let logs = write_logs(
        &dir,
        r#"[{"id": "x", "date": "2025-03-11", "mood": 3, "stressLevel": 11, "hoursWorked": 8, "waterIntake": 8}]"#,
    );
    let output = run(&logs, &["summary"]);
    assert_eq!(output.status.code(), Some(65));
}
