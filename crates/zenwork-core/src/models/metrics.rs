// ABOUTME: Derived wellness metrics returned by the scoring engine
// ABOUTME: Baselines, bounded scores, nervous system quadrant, and contributor attribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::baseline_defaults::{AVG_HOURS, AVG_MOOD, AVG_STRESS};
use crate::constants::nervous_system_text::{
    ACTIVATED_DESCRIPTION, ACTIVATED_LABEL, FLOW_DESCRIPTION, FLOW_LABEL, OVERDRIVE_DESCRIPTION,
    OVERDRIVE_LABEL, RECHARGE_DESCRIPTION, RECHARGE_LABEL,
};
use crate::errors::AppError;

/// Rolling averages over the supplied history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baselines {
    /// Mean hours worked
    pub avg_hours: f64,
    /// Mean stress level
    pub avg_stress: f64,
    /// Mean mood
    pub avg_mood: f64,
}

impl Default for Baselines {
    /// Typical workday used when there is no history
    fn default() -> Self {
        Self {
            avg_hours: AVG_HOURS,
            avg_stress: AVG_STRESS,
            avg_mood: AVG_MOOD,
        }
    }
}

/// Stress x energy quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NervousSystemState {
    /// Low stress, high energy
    Flow,
    /// High stress, high energy
    Activated,
    /// High stress, low energy
    Overdrive,
    /// Low stress, low energy
    Recharge,
}

impl NervousSystemState {
    /// All states in decision-table order
    pub const ALL: [Self; 4] = [
        Self::Activated,
        Self::Overdrive,
        Self::Flow,
        Self::Recharge,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Activated => ACTIVATED_LABEL,
            Self::Overdrive => OVERDRIVE_LABEL,
            Self::Flow => FLOW_LABEL,
            Self::Recharge => RECHARGE_LABEL,
        }
    }

    /// Fixed human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Activated => ACTIVATED_DESCRIPTION,
            Self::Overdrive => OVERDRIVE_DESCRIPTION,
            Self::Flow => FLOW_DESCRIPTION,
            Self::Recharge => RECHARGE_DESCRIPTION,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Activated => "activated",
            Self::Overdrive => "overdrive",
            Self::Recharge => "recharge",
        }
    }
}

impl Display for NervousSystemState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NervousSystemState {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flow" => Ok(Self::Flow),
            "activated" => Ok(Self::Activated),
            "overdrive" => Ok(Self::Overdrive),
            "recharge" => Ok(Self::Recharge),
            other => Err(AppError::invalid_input(format!(
                "Unknown nervous system state: {other}"
            ))),
        }
    }
}

/// Classified quadrant with its display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NervousSystem {
    /// Quadrant
    pub state: NervousSystemState,
    /// Display label
    pub label: String,
    /// Human-readable description
    pub description: String,
}

impl From<NervousSystemState> for NervousSystem {
    fn from(state: NervousSystemState) -> Self {
        Self {
            state,
            label: state.label().to_owned(),
            description: state.description().to_owned(),
        }
    }
}

/// Human-readable factors that moved the scores, in the order they were found
///
/// Both lists may be empty but are always present in serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributors {
    /// Factors that improved wellbeing
    pub positive: Vec<String>,
    /// Factors that hurt wellbeing
    pub negative: Vec<String>,
}

impl Contributors {
    /// Record a positive factor
    pub fn push_positive(&mut self, factor: impl Into<String>) {
        self.positive.push(factor.into());
    }

    /// Record a negative factor
    pub fn push_negative(&mut self, factor: impl Into<String>) {
        self.negative.push(factor.into());
    }

    /// First negative factor recorded, quoted downstream as "the" cause
    #[must_use]
    pub fn leading_factor(&self) -> Option<&str> {
        self.negative.first().map(String::as_str)
    }

    /// True when nothing was attributed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Output of one scoring run; recomputed on demand, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessMetrics {
    /// 0-100, higher is more stressed
    pub stress_score: f64,
    /// 0-100, higher is more energetic
    pub energy_score: f64,
    /// 0-100, readiness entering the day
    pub recovery_score: f64,
    /// Stress x energy quadrant
    pub nervous_system: NervousSystem,
    /// Attribution of the scores
    pub contributors: Contributors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trips_through_str() {
        for state in NervousSystemState::ALL {
            assert_eq!(state.as_str().parse::<NervousSystemState>().unwrap(), state);
        }
        assert!("calm".parse::<NervousSystemState>().is_err());
    }

    #[test]
    fn test_empty_contributors_serialize_as_arrays() {
        let json = serde_json::to_value(Contributors::default()).unwrap();
        assert_eq!(json["positive"], serde_json::json!([]));
        assert_eq!(json["negative"], serde_json::json!([]));
    }

    #[test]
    fn test_leading_factor_is_first_negative() {
        let mut contributors = Contributors::default();
        assert!(contributors.leading_factor().is_none());
        contributors.push_negative("first");
        contributors.push_negative("second");
        assert_eq!(contributors.leading_factor(), Some("first"));
    }
}
