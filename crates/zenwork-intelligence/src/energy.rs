// ABOUTME: Energy score estimator from today's mood, hydration, and yesterday's carry-over
// ABOUTME: Produces a bounded 0-100 energy score and records energy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::num::NonZeroU32;

use crate::config::intelligence::{EnergyScoringConfig, ScoreBounds};
use zenwork_core::constants::contributors::{
    LOW_HYDRATION, WELL_HYDRATED, YESTERDAY_LINGERING_STRESS, YESTERDAY_LONG_HOURS,
};
use zenwork_core::models::{Contributors, DailyLog};

/// Converts mood and hydration into a bounded energy score
pub struct EnergyEstimator;

impl EnergyEstimator {
    /// Estimate today's energy score, appending contributors in discovery order
    ///
    /// Hydration is only evaluated when there is a check-in today. Yesterday is
    /// the last element of `history`.
    #[must_use]
    pub fn estimate(
        today: Option<&DailyLog>,
        water_goal: NonZeroU32,
        history: &[DailyLog],
        config: &EnergyScoringConfig,
        bounds: &ScoreBounds,
        contributors: &mut Contributors,
    ) -> f64 {
        let mood = today.map_or(config.default_mood, |log| log.mood);
        let mut score = f64::from(mood) * config.mood_multiplier;

        if let Some(log) = today {
            let ratio = Self::hydration_ratio(log.water_intake, water_goal);
            if ratio < config.low_hydration_ratio {
                score -= config.low_hydration_penalty;
                contributors.push_negative(LOW_HYDRATION);
            } else if ratio >= config.well_hydrated_ratio {
                score += config.well_hydrated_bonus;
                contributors.push_positive(WELL_HYDRATED);
            }
        }

        if let Some(yesterday) = history.last() {
            if yesterday.hours_worked > config.long_hours_threshold {
                score -= config.long_hours_penalty;
                contributors.push_negative(YESTERDAY_LONG_HOURS);
            }
            if yesterday.stress_level >= config.lingering_stress_threshold {
                score -= config.lingering_stress_penalty;
                contributors.push_negative(YESTERDAY_LINGERING_STRESS);
            }
        }

        bounds.clamp(score)
    }

    /// Water intake as a fraction of the daily goal
    #[must_use]
    pub fn hydration_ratio(water_intake: u32, water_goal: NonZeroU32) -> f64 {
        f64::from(water_intake) / f64::from(water_goal.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydration_ratio() {
        let goal = NonZeroU32::new(8).unwrap();
        assert!((EnergyEstimator::hydration_ratio(4, goal) - 0.5).abs() < f64::EPSILON);
        assert!((EnergyEstimator::hydration_ratio(0, goal)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_check_in_skips_hydration() {
        let mut contributors = Contributors::default();
        let score = EnergyEstimator::estimate(
            None,
            NonZeroU32::new(8).unwrap(),
            &[],
            &EnergyScoringConfig::default(),
            &ScoreBounds::default(),
            &mut contributors,
        );
        assert!((score - 60.0).abs() < f64::EPSILON);
        assert!(contributors.is_empty());
    }
}
