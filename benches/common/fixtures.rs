// ABOUTME: Benchmark fixtures generating realistic daily check-in histories
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Benchmark fixtures for daily check-ins.

use chrono::{Days, NaiveDate, TimeZone, Utc};
use zenwork::models::DailyLog;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One week of check-ins
    Week,
    /// A quarter of check-ins
    Quarter,
    /// Two years of daily check-ins
    TwoYears,
}

impl HistoryLength {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Quarter => 90,
            Self::TwoYears => 730,
        }
    }
}

/// First day of every generated history
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Consecutive daily check-ins, oldest first, with cycling values
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_logs(length: HistoryLength) -> Vec<DailyLog> {
    let start = start_date();
    (0..length.count())
        .map(|index| {
            let day = start + Days::new(index as u64);
            let noon = day.and_hms_opt(12, 0, 0).unwrap_or_default();
            DailyLog {
                id: format!("bench_log_{index}"),
                date: Utc.from_utc_datetime(&noon),
                mood: 1 + (index % 5) as u8,
                stress_level: 1 + ((index * 7) % 10) as u8,
                hours_worked: 4.0 + ((index * 13) % 80) as f64 / 10.0,
                water_intake: ((index * 3) % 12) as u32,
                notes: String::new(),
            }
        })
        .collect()
}
