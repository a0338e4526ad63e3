// ABOUTME: Integration tests for loading Log Store JSON exports
// ABOUTME: Accepted shapes, date formats, boundary validation, and file errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{day, init_test_logging};
use tempfile::TempDir;
use zenwork::errors::ErrorCode;
use zenwork::log_export::{load_logs, parse_logs};

const TWO_LOGS: &str = r#"[
    {"id": "a", "date": "2025-03-10T09:30:00Z", "mood": 4, "stressLevel": 3,
     "hoursWorked": 7.5, "waterIntake": 8, "notes": "good focus"},
    {"id": "b", "date": "2025-03-11", "mood": 2, "stressLevel": 8,
     "hoursWorked": 10, "waterIntake": 3}
]"#;

#[test]
fn test_parse_bare_array() {
    init_test_logging();
    let logs = parse_logs(TWO_LOGS).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].notes, "good focus");
    assert_eq!(logs[1].calendar_date(), day(2025, 3, 11));
    assert!(logs[1].notes.is_empty());
}

#[test]
fn test_parse_wrapped_backup() {
    let json = format!(r#"{{"logs": {TWO_LOGS}}}"#);
    let logs = parse_logs(&json).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, "a");
}

#[test]
fn test_out_of_range_mood_is_rejected() {
    let json = r#"[{"id": "bad", "date": "2025-03-10", "mood": 6, "stressLevel": 3,
                    "hoursWorked": 8, "waterIntake": 8}]"#;
    let err = parse_logs(json).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.resource_id.as_deref(), Some("bad"));
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = parse_logs("[{\"id\": ").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    let err = parse_logs(r#"[{"id": "x", "date": "10/03/2025", "mood": 3, "stressLevel": 3,
                             "hoursWorked": 8, "waterIntake": 8}]"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_load_logs_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs.json");
    fs::write(&path, TWO_LOGS).unwrap();

    let logs = load_logs(&path).unwrap();
    assert_eq!(logs.len(), 2);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_logs(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.exit_code(), 66);
}
