// ABOUTME: Validation errors for daily log records supplied by the Log Store
// ABOUTME: Structured variants that convert into the unified AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! # Log Validation Errors
//!
//! The scoring engine accepts whatever records the Log Store hands it; these
//! errors are raised when a caller chooses to validate at the storage boundary
//! (see `DailyLog::validate`).

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors describing a malformed `DailyLog`
#[derive(Debug, Clone, PartialEq)]
pub enum LogValidationError {
    /// Log id is empty
    MissingId,
    /// Mood outside 1..=5
    MoodOutOfRange {
        /// Offending log id
        log_id: String,
        /// Reported mood
        mood: u8,
    },
    /// Stress level outside 1..=10
    StressOutOfRange {
        /// Offending log id
        log_id: String,
        /// Reported stress level
        stress_level: u8,
    },
    /// Hours worked negative, non-finite, or longer than a day
    InvalidHoursWorked {
        /// Offending log id
        log_id: String,
        /// Reported hours
        hours_worked: f64,
    },
}

impl LogValidationError {
    /// Id of the log that failed validation, if it has one
    #[must_use]
    pub fn log_id(&self) -> Option<&str> {
        match self {
            Self::MissingId => None,
            Self::MoodOutOfRange { log_id, .. }
            | Self::StressOutOfRange { log_id, .. }
            | Self::InvalidHoursWorked { log_id, .. } => Some(log_id),
        }
    }
}

impl fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Daily log is missing an id"),
            Self::MoodOutOfRange { log_id, mood } => {
                write!(f, "Log '{log_id}' has mood {mood}, expected 1-5")
            }
            Self::StressOutOfRange {
                log_id,
                stress_level,
            } => {
                write!(
                    f,
                    "Log '{log_id}' has stress level {stress_level}, expected 1-10"
                )
            }
            Self::InvalidHoursWorked {
                log_id,
                hours_worked,
            } => {
                write!(
                    f,
                    "Log '{log_id}' has {hours_worked} hours worked, expected 0-24"
                )
            }
        }
    }
}

impl Error for LogValidationError {}

impl From<LogValidationError> for AppError {
    fn from(error: LogValidationError) -> Self {
        let code = match error {
            LogValidationError::MissingId => ErrorCode::MissingRequiredField,
            _ => ErrorCode::ValueOutOfRange,
        };
        let app_error = Self::new(code, error.to_string());
        match error.log_id() {
            Some(id) => app_error.with_resource_id(id),
            None => app_error,
        }
    }
}
