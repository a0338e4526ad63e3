// ABOUTME: Dashboard summary statistics over a user's check-ins
// ABOUTME: Averages that stay None on empty input and a real consecutive-day check-in streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use zenwork_core::models::DailyLog;

/// Aggregates shown alongside the wellness scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    /// Number of check-ins considered
    pub log_count: usize,
    /// Mean mood
    pub average_mood: Option<f64>,
    /// Mean stress level
    pub average_stress: Option<f64>,
    /// Mean hours worked
    pub average_hours_worked: Option<f64>,
    /// Mean water intake in cups
    pub average_water_intake: Option<f64>,
    /// Consecutive days with a check-in, ending today (or yesterday if today is still open)
    pub current_streak: u32,
}

impl WellnessSummary {
    /// Summarize `logs` as seen on `today`
    #[must_use]
    pub fn from_logs(logs: &[DailyLog], today: NaiveDate) -> Self {
        Self {
            log_count: logs.len(),
            average_mood: mean(logs, |log| f64::from(log.mood)),
            average_stress: mean(logs, |log| f64::from(log.stress_level)),
            average_hours_worked: mean(logs, |log| log.hours_worked),
            average_water_intake: mean(logs, |log| f64::from(log.water_intake)),
            current_streak: check_in_streak(logs, today),
        }
    }
}

fn mean(logs: &[DailyLog], value: impl Fn(&DailyLog) -> f64) -> Option<f64> {
    if logs.is_empty() {
        return None;
    }
    Some(logs.iter().map(value).sum::<f64>() / logs.len() as f64)
}

/// Length of the run of consecutive calendar days with at least one check-in
///
/// An unfinished today does not break the streak: counting starts from
/// yesterday when there is no check-in yet today.
#[must_use]
pub fn check_in_streak(logs: &[DailyLog], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = logs.iter().map(DailyLog::calendar_date).collect();

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };
    let mut streak = 0;
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
