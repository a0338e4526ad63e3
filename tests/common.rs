// ABOUTME: Shared test utilities and fixtures for ZenWork integration tests
// ABOUTME: Provides quiet logging setup and check-in builders anchored to fixed calendar days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `zenwork`

use std::env;
use std::sync::Once;

use chrono::{Days, NaiveDate, TimeZone, Utc};
use tracing::Level;
use zenwork::models::DailyLog;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day helper
pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

/// Check-in recorded at 09:00 UTC on the given day
pub fn check_in(
    on: NaiveDate,
    mood: u8,
    stress_level: u8,
    hours_worked: f64,
    water_intake: u32,
) -> DailyLog {
    DailyLog {
        id: format!("log-{on}"),
        date: Utc.from_utc_datetime(&on.and_hms_opt(9, 0, 0).unwrap()),
        mood,
        stress_level,
        hours_worked,
        water_intake,
        notes: String::new(),
    }
}

/// An unremarkable day: mood 3, stress 5, eight hours, eight cups
pub fn ordinary_day(on: NaiveDate) -> DailyLog {
    check_in(on, 3, 5, 8.0, 8)
}

/// Consecutive ordinary days ending the day before `today`, oldest first
pub fn ordinary_history(today: NaiveDate, days: u32) -> Vec<DailyLog> {
    (1..=days)
        .rev()
        .map(|offset| ordinary_day(today - Days::new(u64::from(offset))))
        .collect()
}

/// Float comparison with a tolerance suited to score arithmetic
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
