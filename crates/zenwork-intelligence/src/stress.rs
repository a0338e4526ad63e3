// ABOUTME: Stress score estimator from today's self-report, workload deviation, and streaks
// ABOUTME: Produces a bounded 0-100 stress score and records stress contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Stress Score Estimator
//!
//! Scoring steps:
//! 1. Base = today's stress level (or the conservative default) x multiplier
//! 2. Workload: hours worked today vs. the baseline average
//! 3. Streak: every one of the last N prior days at or above the streak threshold
//! 4. Clamp into score bounds

use crate::config::intelligence::{ScoreBounds, StressScoringConfig};
use zenwork_core::constants::contributors::{
    work_hours_above_average, ACCUMULATED_STRESS, LIGHTER_WORK_LOAD,
};
use zenwork_core::models::{Baselines, Contributors, DailyLog};

/// Converts stress self-reports into a bounded stress score
pub struct StressEstimator;

impl StressEstimator {
    /// Estimate today's stress score, appending contributors in discovery order
    #[must_use]
    pub fn estimate(
        today: Option<&DailyLog>,
        baselines: &Baselines,
        history: &[DailyLog],
        config: &StressScoringConfig,
        bounds: &ScoreBounds,
        contributors: &mut Contributors,
    ) -> f64 {
        let level = today.map_or(config.default_stress_level, |log| log.stress_level);
        let mut score = f64::from(level) * config.level_multiplier;

        if let Some(log) = today {
            let hour_diff = log.hours_worked - baselines.avg_hours;
            if hour_diff > config.hour_deviation_threshold {
                score += config.overtime_penalty;
                contributors.push_negative(work_hours_above_average(hour_diff));
            } else if hour_diff < -config.hour_deviation_threshold {
                score -= config.light_load_bonus;
                contributors.push_positive(LIGHTER_WORK_LOAD);
            }
        }

        if Self::has_high_stress_streak(history, config) {
            score += config.streak_penalty;
            contributors.push_negative(ACCUMULATED_STRESS);
        }

        bounds.clamp(score)
    }

    /// True only when at least `streak_days` prior entries exist and all of the
    /// most recent ones reach the streak threshold
    #[must_use]
    pub fn has_high_stress_streak(history: &[DailyLog], config: &StressScoringConfig) -> bool {
        if config.streak_days == 0 {
            return false;
        }
        history
            .len()
            .checked_sub(config.streak_days)
            .and_then(|start| history.get(start..))
            .is_some_and(|recent| {
                recent
                    .iter()
                    .all(|log| log.stress_level >= config.streak_level_threshold)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn log_with_stress(stress_level: u8) -> DailyLog {
        DailyLog {
            id: format!("s{stress_level}"),
            date: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            mood: 3,
            stress_level,
            hours_worked: 8.0,
            water_intake: 8,
            notes: String::new(),
        }
    }

    #[test]
    fn test_short_history_never_reports_streak() {
        let config = StressScoringConfig::default();
        assert!(!StressEstimator::has_high_stress_streak(&[], &config));
        let two = [log_with_stress(9), log_with_stress(9)];
        assert!(!StressEstimator::has_high_stress_streak(&two, &config));
    }

    #[test]
    fn test_streak_only_inspects_most_recent_days() {
        let config = StressScoringConfig::default();
        let history = [
            log_with_stress(2),
            log_with_stress(7),
            log_with_stress(8),
            log_with_stress(10),
        ];
        assert!(StressEstimator::has_high_stress_streak(&history, &config));

        let broken = [
            log_with_stress(9),
            log_with_stress(9),
            log_with_stress(6),
            log_with_stress(9),
        ];
        assert!(!StressEstimator::has_high_stress_streak(&broken, &config));
    }

    #[test]
    fn test_no_check_in_uses_default_level() {
        let mut contributors = Contributors::default();
        let score = StressEstimator::estimate(
            None,
            &Baselines::default(),
            &[],
            &StressScoringConfig::default(),
            &ScoreBounds::default(),
            &mut contributors,
        );
        assert!((score - 30.0).abs() < f64::EPSILON);
        assert!(contributors.is_empty());
    }
}
