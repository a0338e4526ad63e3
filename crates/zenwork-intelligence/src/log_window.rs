// ABOUTME: Splits a raw log list into today's check-in and the prior history
// ABOUTME: Guarantees the engine's precondition that history excludes today and is oldest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::engine::ScoringRequest;
use zenwork_core::models::DailyLog;

/// Logs partitioned around one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct LogWindow {
    /// Day being scored
    pub date: NaiveDate,
    /// Last check-in recorded on `date`, if any
    pub today: Option<DailyLog>,
    /// Check-ins dated before `date`, oldest first
    pub history: Vec<DailyLog>,
}

impl LogWindow {
    /// Partition `logs` around `date`
    ///
    /// Logs are sorted oldest first (stable, so same-instant duplicates keep
    /// their order). When several check-ins share `date`, the latest one is
    /// today's. Records dated after `date` are dropped.
    #[must_use]
    pub fn partition(mut logs: Vec<DailyLog>, date: NaiveDate) -> Self {
        logs.sort_by(|a, b| a.date.cmp(&b.date));

        let mut today = None;
        let mut history = Vec::with_capacity(logs.len());
        let mut ignored = 0_usize;
        for log in logs {
            match log.calendar_date().cmp(&date) {
                Ordering::Less => history.push(log),
                Ordering::Equal => today = Some(log),
                Ordering::Greater => ignored += 1,
            }
        }

        debug!(
            %date,
            history_len = history.len(),
            has_today = today.is_some(),
            ignored,
            "Partitioned log window"
        );

        Self {
            date,
            today,
            history,
        }
    }

    /// Scoring request for this window, pinned to the window's weekday
    #[must_use]
    pub fn request(&self, water_goal: u32) -> ScoringRequest<'_> {
        ScoringRequest::new(self.today.as_ref(), &self.history, water_goal)
            .with_weekday(self.date.weekday())
    }
}
