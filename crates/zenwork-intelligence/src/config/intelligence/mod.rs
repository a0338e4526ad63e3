// ABOUTME: Wellness scoring configuration with environment overrides and validation
// ABOUTME: Orchestrates per-estimator configs and provides unified loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Scoring Configuration Module
//!
//! Configuration is organized by estimator:
//! - `baselines` - defaults used when there is no history
//! - `stress` - self-report mapping, workload deviation, high-stress streak
//! - `energy` - mood mapping, hydration, yesterday's carry-over
//! - `recovery` - strain and high-recovery detection
//! - `nervous_system` - quadrant thresholds
//! - `zen_score` - daily zen score weights
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export ZENWORK_STRESS_STREAK_DAYS=4
//!    export ZENWORK_NERVOUS_STRESS_THRESHOLD=65
//!    ```
//!
//! 2. Default values (if env vars not set)

pub mod error;
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    BaselineConfig, EnergyScoringConfig, NervousSystemConfig, RecoveryScoringConfig, ScoreBounds,
    StressScoringConfig, ZenScoreConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<WellnessScoringConfig> = OnceLock::new();

/// Tolerance when checking that zen score weights sum to 100
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Main scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellnessScoringConfig {
    /// Baseline defaults for empty history
    pub baselines: BaselineConfig,
    /// Stress estimator
    pub stress: StressScoringConfig,
    /// Energy estimator
    pub energy: EnergyScoringConfig,
    /// Recovery estimator
    pub recovery: RecoveryScoringConfig,
    /// Nervous system classifier
    pub nervous_system: NervousSystemConfig,
    /// Daily zen score
    pub zen_score: ZenScoreConfig,
    /// Clamp bounds for every score
    pub score_bounds: ScoreBounds,
}

impl WellnessScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = &self.score_bounds;
        if !(bounds.min_score.is_finite() && bounds.max_score.is_finite())
            || bounds.min_score >= bounds.max_score
        {
            return Err(ConfigError::InvalidRange("min_score must be < max_score"));
        }

        if self.stress.streak_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "stress streak_days must be at least 1",
            ));
        }
        if self.stress.hour_deviation_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stress hour_deviation_threshold must be non-negative",
            ));
        }

        if self.energy.low_hydration_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "energy low_hydration_ratio must be positive",
            ));
        }
        if self.energy.low_hydration_ratio >= self.energy.well_hydrated_ratio {
            return Err(ConfigError::InvalidRange(
                "low_hydration_ratio must be < well_hydrated_ratio",
            ));
        }

        if !(bounds.min_score..=bounds.max_score).contains(&self.recovery.baseline_score) {
            return Err(ConfigError::ValueOutOfRange(
                "recovery baseline_score must lie within score bounds",
            ));
        }

        let ns = &self.nervous_system;
        if !(bounds.min_score..=bounds.max_score).contains(&ns.high_stress_threshold)
            || !(bounds.min_score..=bounds.max_score).contains(&ns.high_energy_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "nervous system thresholds must lie within score bounds",
            ));
        }

        let zen = &self.zen_score;
        if zen.mood_weight < 0.0 || zen.stress_weight < 0.0 || zen.hydration_weight < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "zen score weights must be non-negative",
            ));
        }
        if (zen.total_weight() - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "zen score weights must sum to 100",
            ));
        }

        Ok(())
    }

    /// Helper to apply a single environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Baselines
        Self::apply_env_var(
            "ZENWORK_BASELINE_AVG_HOURS",
            &mut self.baselines.default_avg_hours,
        )?;
        Self::apply_env_var(
            "ZENWORK_BASELINE_AVG_STRESS",
            &mut self.baselines.default_avg_stress,
        )?;
        Self::apply_env_var(
            "ZENWORK_BASELINE_AVG_MOOD",
            &mut self.baselines.default_avg_mood,
        )?;

        // Stress
        Self::apply_env_var(
            "ZENWORK_STRESS_DEFAULT_LEVEL",
            &mut self.stress.default_stress_level,
        )?;
        Self::apply_env_var(
            "ZENWORK_STRESS_OVERTIME_PENALTY",
            &mut self.stress.overtime_penalty,
        )?;
        Self::apply_env_var(
            "ZENWORK_STRESS_LIGHT_LOAD_BONUS",
            &mut self.stress.light_load_bonus,
        )?;
        Self::apply_env_var("ZENWORK_STRESS_STREAK_DAYS", &mut self.stress.streak_days)?;
        Self::apply_env_var(
            "ZENWORK_STRESS_STREAK_THRESHOLD",
            &mut self.stress.streak_level_threshold,
        )?;
        Self::apply_env_var(
            "ZENWORK_STRESS_STREAK_PENALTY",
            &mut self.stress.streak_penalty,
        )?;

        // Energy
        Self::apply_env_var("ZENWORK_ENERGY_DEFAULT_MOOD", &mut self.energy.default_mood)?;
        Self::apply_env_var(
            "ZENWORK_ENERGY_LOW_HYDRATION_RATIO",
            &mut self.energy.low_hydration_ratio,
        )?;
        Self::apply_env_var(
            "ZENWORK_ENERGY_WELL_HYDRATED_RATIO",
            &mut self.energy.well_hydrated_ratio,
        )?;
        Self::apply_env_var(
            "ZENWORK_ENERGY_LONG_HOURS_THRESHOLD",
            &mut self.energy.long_hours_threshold,
        )?;
        Self::apply_env_var(
            "ZENWORK_ENERGY_LINGERING_STRESS_THRESHOLD",
            &mut self.energy.lingering_stress_threshold,
        )?;

        // Recovery
        Self::apply_env_var(
            "ZENWORK_RECOVERY_BASELINE",
            &mut self.recovery.baseline_score,
        )?;
        Self::apply_env_var(
            "ZENWORK_RECOVERY_STRAIN_LIMIT",
            &mut self.recovery.strain_limit,
        )?;
        Self::apply_env_var(
            "ZENWORK_RECOVERY_MONDAY_BONUS",
            &mut self.recovery.monday_bonus,
        )?;

        // Nervous system
        Self::apply_env_var(
            "ZENWORK_NERVOUS_STRESS_THRESHOLD",
            &mut self.nervous_system.high_stress_threshold,
        )?;
        Self::apply_env_var(
            "ZENWORK_NERVOUS_ENERGY_THRESHOLD",
            &mut self.nervous_system.high_energy_threshold,
        )?;

        // Zen score
        Self::apply_env_var("ZENWORK_ZEN_MOOD_WEIGHT", &mut self.zen_score.mood_weight)?;
        Self::apply_env_var(
            "ZENWORK_ZEN_STRESS_WEIGHT",
            &mut self.zen_score.stress_weight,
        )?;
        Self::apply_env_var(
            "ZENWORK_ZEN_HYDRATION_WEIGHT",
            &mut self.zen_score.hydration_weight,
        )?;

        Ok(self)
    }
}
