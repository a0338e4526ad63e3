// ABOUTME: User profile preferences consumed by the wellness engine and its callers
// ABOUTME: Water goal, primary wellness goal, and the role description used for coaching context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! User preference types
//!
//! The engine only reads `water_goal`; the rest travels to the coaching
//! context so a downstream generator can tailor its advice.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::log_limits::DEFAULT_WATER_GOAL;
use crate::errors::{AppError, AppResult};

/// Primary wellness goal selected in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WellnessGoal {
    /// Reduce stress and anxiety
    ReduceStress,
    /// Improve focus and productivity
    ImproveFocus,
    /// Better sleep quality
    BetterSleep,
    /// Better work-life balance
    #[default]
    WorkLifeBalance,
    /// Boost physical energy
    BoostEnergy,
}

impl WellnessGoal {
    /// Wire name (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReduceStress => "reduce_stress",
            Self::ImproveFocus => "improve_focus",
            Self::BetterSleep => "better_sleep",
            Self::WorkLifeBalance => "work_life_balance",
            Self::BoostEnergy => "boost_energy",
        }
    }

    /// Upper-case headline form, e.g. `WORK LIFE BALANCE`
    #[must_use]
    pub fn headline(self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl Display for WellnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WellnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reduce_stress" => Ok(Self::ReduceStress),
            "improve_focus" => Ok(Self::ImproveFocus),
            "better_sleep" => Ok(Self::BetterSleep),
            "work_life_balance" => Ok(Self::WorkLifeBalance),
            "boost_energy" => Ok(Self::BoostEnergy),
            other => Err(AppError::invalid_input(format!(
                "Unknown wellness goal: {other}"
            ))),
        }
    }
}

/// Per-user preferences relevant to scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Primary wellness goal
    pub wellness_goal: WellnessGoal,
    /// Daily water goal in cups; must be positive
    pub water_goal: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            wellness_goal: WellnessGoal::default(),
            water_goal: DEFAULT_WATER_GOAL,
        }
    }
}

impl UserPreferences {
    /// Reject a zero water goal before it reaches a ratio
    ///
    /// # Errors
    /// Returns a `ValueOutOfRange` error when `water_goal` is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.water_goal == 0 {
            return Err(AppError::value_out_of_range(
                "water goal must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Profile fields forwarded to the coaching generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Free-text job role
    pub role: String,
    /// Preferences
    pub preferences: UserPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wellness_goal_parsing() {
        assert_eq!(
            "reduce-stress".parse::<WellnessGoal>().unwrap(),
            WellnessGoal::ReduceStress
        );
        assert_eq!(
            "BOOST_ENERGY".parse::<WellnessGoal>().unwrap(),
            WellnessGoal::BoostEnergy
        );
        assert!("nap_more".parse::<WellnessGoal>().is_err());
    }

    #[test]
    fn test_headline() {
        assert_eq!(WellnessGoal::WorkLifeBalance.headline(), "WORK LIFE BALANCE");
    }

    #[test]
    fn test_zero_water_goal_rejected() {
        let prefs = UserPreferences {
            water_goal: 0,
            ..UserPreferences::default()
        };
        assert!(prefs.validate().is_err());
        assert!(UserPreferences::default().validate().is_ok());
    }
}
