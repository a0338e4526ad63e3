// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
// ABOUTME: Shared state for zenwork-cli commands
// ABOUTME: Loads the log export once and resolves the scoring date and water goal

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::info;
use zenwork::config::AppConfig;
use zenwork::errors::AppResult;
use zenwork::intelligence::{require_water_goal, LogWindow, WellnessEngine};
use zenwork::log_export::load_logs;
use zenwork::models::DailyLog;

/// Everything a command needs, resolved once from flags and environment
pub struct CliContext {
    /// Every validated check-in from the export
    pub logs: Vec<DailyLog>,
    /// Day being scored
    pub date: NaiveDate,
    /// Daily water goal in cups, never zero
    pub water_goal: u32,
    /// Engine bound to the process-wide scoring configuration
    pub engine: WellnessEngine,
}

impl CliContext {
    /// Load the export and resolve defaults
    ///
    /// # Errors
    /// Returns an error when the export cannot be loaded or the water goal is zero
    pub fn load(
        logs_path: &Path,
        date: Option<NaiveDate>,
        water_goal: Option<u32>,
        config: &AppConfig,
    ) -> AppResult<Self> {
        let water_goal = water_goal.unwrap_or(config.preferences.water_goal);
        require_water_goal(water_goal)?;

        let logs = load_logs(logs_path)?;
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        info!(
            path = %logs_path.display(),
            logs = logs.len(),
            %date,
            water_goal,
            "Loaded check-ins"
        );

        Ok(Self {
            logs,
            date,
            water_goal,
            engine: WellnessEngine::from_global(),
        })
    }

    /// Today/history split for the scoring date
    #[must_use]
    pub fn window(&self) -> LogWindow {
        LogWindow::partition(self.logs.clone(), self.date)
    }

    /// Every check-in on or before the scoring date, same-day entries included
    #[must_use]
    pub fn logs_through_date(&self) -> Vec<DailyLog> {
        self.logs
            .iter()
            .filter(|log| log.calendar_date() <= self.date)
            .cloned()
            .collect()
    }
}
