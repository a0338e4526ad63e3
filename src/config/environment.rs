// ABOUTME: Environment configuration for the ZenWork application layer
// ABOUTME: Parses deployment mode, log level, and user preferences from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Environment-based configuration
//!
//! | Variable                | Default             |
//! |-------------------------|---------------------|
//! | `ENVIRONMENT`           | `development`       |
//! | `RUST_LOG`              | `info`              |
//! | `LOG_FORMAT`            | `pretty`            |
//! | `ZENWORK_WATER_GOAL`    | `8`                 |
//! | `ZENWORK_WELLNESS_GOAL` | `work_life_balance` |
//!
//! Scoring weights and thresholds are configured separately through the
//! `ZENWORK_*` overrides read by `WellnessScoringConfig`.

use std::env;
use std::fmt::{self, Display, Formatter};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

use crate::logging::LogFormat;
use zenwork_core::config::{UserPreferences, WellnessGoal};
use zenwork_core::constants::log_limits::DEFAULT_WATER_GOAL;
use zenwork_intelligence::WellnessScoringConfig;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug detail, including per-estimator scores
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production batch jobs
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Log output format
    pub log_format: LogFormat,
    /// Scoring preferences (water goal, wellness goal)
    pub preferences: UserPreferences,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or if
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let water_goal = env_var_or("ZENWORK_WATER_GOAL", &DEFAULT_WATER_GOAL.to_string())
            .parse::<u32>()
            .context("Invalid ZENWORK_WATER_GOAL value")?;
        let wellness_goal = match env::var("ZENWORK_WELLNESS_GOAL") {
            Ok(value) => value
                .parse::<WellnessGoal>()
                .context("Invalid ZENWORK_WELLNESS_GOAL value")?,
            Err(_) => WellnessGoal::default(),
        };

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            log_format: LogFormat::from_str_or_default(&env_var_or("LOG_FORMAT", "pretty")),
            preferences: UserPreferences {
                wellness_goal,
                water_goal,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error when the water goal is zero
    pub fn validate(&self) -> Result<()> {
        self.preferences
            .validate()
            .context("Invalid ZENWORK_WATER_GOAL value")?;
        Ok(())
    }

    /// Load the scoring configuration so override errors surface at startup
    /// instead of silently falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a `ZENWORK_*` scoring override is invalid
    pub fn init_all_configs(&self) -> Result<()> {
        WellnessScoringConfig::load().context("Invalid scoring configuration")?;
        let scoring = WellnessScoringConfig::global();
        info!(
            environment = %self.environment,
            stress_threshold = scoring.nervous_system.high_stress_threshold,
            energy_threshold = scoring.nervous_system.high_energy_threshold,
            "All configurations initialized"
        );
        Ok(())
    }

    /// Human-readable summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "ZenWork Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Log Format: {:?}\n\
             - Water Goal: {} cups\n\
             - Wellness Goal: {}",
            self.environment,
            self.log_level,
            self.log_format,
            self.preferences.water_goal,
            self.preferences.wellness_goal.headline(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
