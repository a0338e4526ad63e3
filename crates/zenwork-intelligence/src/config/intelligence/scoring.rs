// ABOUTME: Per-estimator scoring configuration for the wellness engine
// ABOUTME: Baseline defaults, stress/energy/recovery weights, classifier thresholds, zen weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Scoring Configuration
//!
//! Every weight and threshold the estimators use, with defaults taken from
//! `zenwork_core::constants`. Control flow in the estimators never hardcodes a
//! number; it reads one of these fields.

use serde::{Deserialize, Serialize};
use zenwork_core::constants::{
    baseline_defaults, energy, nervous_system, recovery, score_bounds, stress, zen_score,
};
use zenwork_core::models::Baselines;

/// Baselines substituted when history is empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Default average hours worked
    pub default_avg_hours: f64,
    /// Default average stress level
    pub default_avg_stress: f64,
    /// Default average mood
    pub default_avg_mood: f64,
}

impl BaselineConfig {
    /// Baselines for a user with no history
    #[must_use]
    pub const fn defaults(&self) -> Baselines {
        Baselines {
            avg_hours: self.default_avg_hours,
            avg_stress: self.default_avg_stress,
            avg_mood: self.default_avg_mood,
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            default_avg_hours: baseline_defaults::AVG_HOURS,
            default_avg_stress: baseline_defaults::AVG_STRESS,
            default_avg_mood: baseline_defaults::AVG_MOOD,
        }
    }
}

/// Stress score configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressScoringConfig {
    /// Stress level assumed without a check-in today
    pub default_stress_level: u8,
    /// Multiplier from stress level to score
    pub level_multiplier: f64,
    /// Hours above/below baseline before workload matters
    pub hour_deviation_threshold: f64,
    /// Penalty for overtime
    pub overtime_penalty: f64,
    /// Bonus for a light day
    pub light_load_bonus: f64,
    /// Prior days inspected for a high-stress streak
    pub streak_days: usize,
    /// Level at or above which a day counts toward the streak
    pub streak_level_threshold: u8,
    /// Penalty when a streak is present
    pub streak_penalty: f64,
}

impl Default for StressScoringConfig {
    fn default() -> Self {
        Self {
            default_stress_level: stress::DEFAULT_STRESS_LEVEL,
            level_multiplier: stress::LEVEL_MULTIPLIER,
            hour_deviation_threshold: stress::HOUR_DEVIATION_THRESHOLD,
            overtime_penalty: stress::OVERTIME_PENALTY,
            light_load_bonus: stress::LIGHT_LOAD_BONUS,
            streak_days: stress::STREAK_DAYS,
            streak_level_threshold: stress::STREAK_LEVEL_THRESHOLD,
            streak_penalty: stress::STREAK_PENALTY,
        }
    }
}

/// Energy score configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyScoringConfig {
    /// Mood assumed without a check-in today
    pub default_mood: u8,
    /// Multiplier from mood to score
    pub mood_multiplier: f64,
    /// Hydration ratio below which energy is penalized
    pub low_hydration_ratio: f64,
    /// Low hydration penalty
    pub low_hydration_penalty: f64,
    /// Hydration ratio at or above which energy gets a bonus
    pub well_hydrated_ratio: f64,
    /// Hydration bonus
    pub well_hydrated_bonus: f64,
    /// Yesterday's hours above which fatigue carries over
    pub long_hours_threshold: f64,
    /// Long hours penalty
    pub long_hours_penalty: f64,
    /// Yesterday's stress at or above which it lingers
    pub lingering_stress_threshold: u8,
    /// Lingering stress penalty
    pub lingering_stress_penalty: f64,
}

impl Default for EnergyScoringConfig {
    fn default() -> Self {
        Self {
            default_mood: energy::DEFAULT_MOOD,
            mood_multiplier: energy::MOOD_MULTIPLIER,
            low_hydration_ratio: energy::LOW_HYDRATION_RATIO,
            low_hydration_penalty: energy::LOW_HYDRATION_PENALTY,
            well_hydrated_ratio: energy::WELL_HYDRATED_RATIO,
            well_hydrated_bonus: energy::WELL_HYDRATED_BONUS,
            long_hours_threshold: energy::LONG_HOURS_THRESHOLD,
            long_hours_penalty: energy::LONG_HOURS_PENALTY,
            lingering_stress_threshold: energy::LINGERING_STRESS_THRESHOLD,
            lingering_stress_penalty: energy::LINGERING_STRESS_PENALTY,
        }
    }
}

/// Recovery readiness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryScoringConfig {
    /// Starting score
    pub baseline_score: f64,
    /// Yesterday's mood at or above which recovery is high
    pub good_mood_threshold: u8,
    /// Yesterday's stress at or below which recovery is high
    pub low_stress_threshold: u8,
    /// High recovery bonus
    pub high_recovery_bonus: f64,
    /// Strain per stress point
    pub strain_stress_weight: f64,
    /// Strain per hour worked
    pub strain_hours_weight: f64,
    /// Strain above which recovery is penalized
    pub strain_limit: f64,
    /// Heavy strain penalty
    pub heavy_strain_penalty: f64,
    /// Monday bonus
    pub monday_bonus: f64,
}

impl Default for RecoveryScoringConfig {
    fn default() -> Self {
        Self {
            baseline_score: recovery::BASELINE_SCORE,
            good_mood_threshold: recovery::GOOD_MOOD_THRESHOLD,
            low_stress_threshold: recovery::LOW_STRESS_THRESHOLD,
            high_recovery_bonus: recovery::HIGH_RECOVERY_BONUS,
            strain_stress_weight: recovery::STRAIN_STRESS_WEIGHT,
            strain_hours_weight: recovery::STRAIN_HOURS_WEIGHT,
            strain_limit: recovery::STRAIN_LIMIT,
            heavy_strain_penalty: recovery::HEAVY_STRAIN_PENALTY,
            monday_bonus: recovery::MONDAY_BONUS,
        }
    }
}

/// Nervous system classifier thresholds (strict greater-than)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NervousSystemConfig {
    /// Stress score above which stress is high
    pub high_stress_threshold: f64,
    /// Energy score above which energy is high
    pub high_energy_threshold: f64,
}

impl Default for NervousSystemConfig {
    fn default() -> Self {
        Self {
            high_stress_threshold: nervous_system::HIGH_STRESS_THRESHOLD,
            high_energy_threshold: nervous_system::HIGH_ENERGY_THRESHOLD,
        }
    }
}

/// Daily Zen Score weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZenScoreConfig {
    /// Weight of mood
    pub mood_weight: f64,
    /// Weight of inverted stress
    pub stress_weight: f64,
    /// Weight of hydration progress
    pub hydration_weight: f64,
}

impl ZenScoreConfig {
    /// Sum of all weights; must be 100
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.mood_weight + self.stress_weight + self.hydration_weight
    }
}

impl Default for ZenScoreConfig {
    fn default() -> Self {
        Self {
            mood_weight: zen_score::MOOD_WEIGHT,
            stress_weight: zen_score::STRESS_WEIGHT,
            hydration_weight: zen_score::HYDRATION_WEIGHT,
        }
    }
}

/// Inclusive bounds every score is clamped into
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBounds {
    /// Lowest score
    pub min_score: f64,
    /// Highest score
    pub max_score: f64,
}

impl ScoreBounds {
    /// Clamp a raw score into bounds
    #[must_use]
    pub fn clamp(&self, score: f64) -> f64 {
        score.clamp(self.min_score, self.max_score)
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            min_score: score_bounds::MIN_SCORE,
            max_score: score_bounds::MAX_SCORE,
        }
    }
}
