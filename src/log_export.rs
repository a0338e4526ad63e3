// ABOUTME: Loads a Log Store JSON export from disk and validates every check-in
// ABOUTME: The only I/O in the workspace; the scoring engine itself never touches storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Log export loading
//!
//! Accepts either a bare JSON array of check-ins or an object with a `logs`
//! array, which is the shape the Log Store's backup feature writes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use zenwork_core::errors::{AppError, AppResult};
use zenwork_core::models::DailyLog;

#[derive(Deserialize)]
#[serde(untagged)]
enum LogExport {
    Bare(Vec<DailyLog>),
    Wrapped { logs: Vec<DailyLog> },
}

impl From<LogExport> for Vec<DailyLog> {
    fn from(export: LogExport) -> Self {
        match export {
            LogExport::Bare(logs) | LogExport::Wrapped { logs } => logs,
        }
    }
}

/// Parse and validate check-ins from JSON text
///
/// # Errors
///
/// Returns a serialization error for malformed JSON, or the first log
/// validation failure (out-of-range mood/stress, bad hours, missing id)
pub fn parse_logs(json: &str) -> AppResult<Vec<DailyLog>> {
    let logs: Vec<DailyLog> = serde_json::from_str::<LogExport>(json)?.into();
    for log in &logs {
        log.validate().map_err(|e| {
            warn!(
                log_id = e.log_id().unwrap_or("<missing>"),
                error = %e,
                "Rejected invalid check-in"
            );
            AppError::from(e)
        })?;
    }
    Ok(logs)
}

/// Read, parse, and validate a log export file
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, `StorageError` for
/// other read failures, and the errors of [`parse_logs`] otherwise
pub fn load_logs(path: &Path) -> AppResult<Vec<DailyLog>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let display = path.display().to_string();
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Log export {display}")).with_resource_id(display)
        } else {
            AppError::storage(format!("Failed to read log export {display}")).with_source(e)
        }
    })?;

    let logs = parse_logs(&contents)?;
    debug!(path = %path.display(), count = logs.len(), "Loaded log export");
    Ok(logs)
}
