// ABOUTME: Recovery readiness estimator driven only by the previous day's strain
// ABOUTME: Today's own check-in never influences this score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Recovery Readiness Estimator
//!
//! Measures readiness entering the day:
//! - High recovery: yesterday's mood was good and stress was low
//! - Strain: `stress * 10 + hours * 5` from yesterday; heavy strain costs points
//!   but, unlike the other branches, adds no contributor text
//! - Monday: a small rest-effect bonus

use chrono::Weekday;

use crate::config::intelligence::{RecoveryScoringConfig, ScoreBounds};
use zenwork_core::constants::contributors::HIGH_RECOVERY;
use zenwork_core::models::{Contributors, DailyLog};

/// Derives readiness from the immediately preceding day
pub struct RecoveryEstimator;

impl RecoveryEstimator {
    /// Estimate recovery readiness for a day falling on `weekday`
    #[must_use]
    pub fn estimate(
        history: &[DailyLog],
        weekday: Weekday,
        config: &RecoveryScoringConfig,
        bounds: &ScoreBounds,
        contributors: &mut Contributors,
    ) -> f64 {
        let mut score = config.baseline_score;

        if let Some(yesterday) = history.last() {
            if yesterday.mood >= config.good_mood_threshold
                && yesterday.stress_level <= config.low_stress_threshold
            {
                score += config.high_recovery_bonus;
                contributors.push_positive(HIGH_RECOVERY);
            }

            if Self::strain(yesterday, config) > config.strain_limit {
                score -= config.heavy_strain_penalty;
            }

            if weekday == Weekday::Mon {
                score += config.monday_bonus;
            }
        }

        bounds.clamp(score)
    }

    /// Composite load of a single day
    #[must_use]
    pub fn strain(log: &DailyLog, config: &RecoveryScoringConfig) -> f64 {
        f64::from(log.stress_level).mul_add(
            config.strain_stress_weight,
            log.hours_worked * config.strain_hours_weight,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_strain_formula() {
        let log = DailyLog {
            id: "y".into(),
            date: Utc.with_ymd_and_hms(2025, 3, 9, 9, 0, 0).unwrap(),
            mood: 3,
            stress_level: 6,
            hours_worked: 9.0,
            water_intake: 8,
            notes: String::new(),
        };
        let strain = RecoveryEstimator::strain(&log, &RecoveryScoringConfig::default());
        assert!((strain - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_monday_without_history_gets_no_bonus() {
        let mut contributors = Contributors::default();
        let score = RecoveryEstimator::estimate(
            &[],
            Weekday::Mon,
            &RecoveryScoringConfig::default(),
            &ScoreBounds::default(),
            &mut contributors,
        );
        assert!((score - 80.0).abs() < f64::EPSILON);
    }
}
