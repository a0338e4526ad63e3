// ABOUTME: Baseline calculator reducing check-in history into rolling averages
// ABOUTME: Mean hours worked, stress, and mood with fixed defaults for a new user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use crate::config::intelligence::BaselineConfig;
use zenwork_core::models::{Baselines, DailyLog};

/// Reduces history into the "expected" reference point for today's check-in
pub struct BaselineCalculator;

impl BaselineCalculator {
    /// Arithmetic mean over the whole supplied history
    ///
    /// No windowing or decay is applied; trimming the window is the caller's
    /// job. An empty history yields the configured defaults.
    #[must_use]
    pub fn calculate(history: &[DailyLog], config: &BaselineConfig) -> Baselines {
        if history.is_empty() {
            return config.defaults();
        }

        let count = history.len() as f64;
        let (hours, stress, mood) =
            history
                .iter()
                .fold((0.0, 0.0, 0.0), |(hours, stress, mood), log| {
                    (
                        hours + log.hours_worked,
                        stress + f64::from(log.stress_level),
                        mood + f64::from(log.mood),
                    )
                });

        Baselines {
            avg_hours: hours / count,
            avg_stress: stress / count,
            avg_mood: mood / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn log(mood: u8, stress_level: u8, hours_worked: f64) -> DailyLog {
        DailyLog {
            id: format!("{mood}-{stress_level}-{hours_worked}"),
            date: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            mood,
            stress_level,
            hours_worked,
            water_intake: 4,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_history_uses_defaults() {
        let baselines = BaselineCalculator::calculate(&[], &BaselineConfig::default());
        assert_eq!(baselines, Baselines::default());
    }

    #[test]
    fn test_mean_over_full_history() {
        let history = [log(2, 4, 6.0), log(4, 8, 10.0), log(3, 6, 8.0)];
        let baselines = BaselineCalculator::calculate(&history, &BaselineConfig::default());
        assert!((baselines.avg_hours - 8.0).abs() < f64::EPSILON);
        assert!((baselines.avg_stress - 6.0).abs() < f64::EPSILON);
        assert!((baselines.avg_mood - 3.0).abs() < f64::EPSILON);
    }
}
