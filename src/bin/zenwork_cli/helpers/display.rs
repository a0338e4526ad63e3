// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
// ABOUTME: Output formatting helpers for zenwork-cli
// ABOUTME: Results go to stdout as pretty JSON, failures to stderr as an error envelope

use serde::Serialize;
use tracing::error;
use zenwork::errors::{AppError, AppResult, ErrorResponse};

/// Print a command result as pretty JSON on stdout
///
/// # Errors
/// Returns a serialization error if the value cannot be encoded
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print a failed command as a JSON error envelope on stderr
pub fn print_error(app_error: AppError) {
    error!(code = ?app_error.code, "{}", app_error.message);
    let response = ErrorResponse::from(app_error);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(e) => eprintln!("{}: {e}", response.error.message),
    }
}
