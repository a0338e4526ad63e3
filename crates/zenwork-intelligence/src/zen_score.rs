// ABOUTME: Daily Zen Score combining mood, inverted stress, and hydration progress
// ABOUTME: Single 0-100 headline number for the dashboard; zero before the first check-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use crate::config::intelligence::ZenScoreConfig;
use crate::engine::require_water_goal;
use zenwork_core::constants::score_bounds::{MAX_SCORE, MIN_SCORE};
use zenwork_core::constants::zen_score::{MOOD_SCALE, STRESS_SCALE};
use zenwork_core::errors::AppResult;
use zenwork_core::models::DailyLog;

/// Headline score for today's check-in
pub struct ZenScoreCalculator;

impl ZenScoreCalculator {
    /// `round(mood/5 * w_mood + (10 - stress)/10 * w_stress + min(water/goal, 1) * w_water)`
    ///
    /// # Errors
    /// Returns a `ValueOutOfRange` error when the water goal is zero
    pub fn calculate(
        today: Option<&DailyLog>,
        water_goal: u32,
        config: &ZenScoreConfig,
    ) -> AppResult<u8> {
        let goal = f64::from(require_water_goal(water_goal)?.get());
        let Some(log) = today else {
            return Ok(0);
        };

        // Multiply before dividing so integer inputs stay exact until rounding
        let mood_part = config.mood_weight * f64::from(log.mood) / MOOD_SCALE;
        let stress_part =
            config.stress_weight * (STRESS_SCALE - f64::from(log.stress_level)) / STRESS_SCALE;
        let hydration_part =
            (config.hydration_weight * f64::from(log.water_intake) / goal).min(config.hydration_weight);

        let score = (mood_part + stress_part + hydration_part)
            .round()
            .clamp(MIN_SCORE, MAX_SCORE);
        Ok(score as u8)
    }
}
