// ABOUTME: Journal view filtering for high-stress and low-mood check-ins
// ABOUTME: Returns matching logs newest first without copying them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use zenwork_core::constants::journal::{HIGH_STRESS_LEVEL, LOW_MOOD_LEVEL};
use zenwork_core::errors::AppError;
use zenwork_core::models::DailyLog;

/// Journal filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JournalFilter {
    /// Every entry
    #[default]
    All,
    /// Stress at or above 7
    HighStress,
    /// Mood at or below 2
    LowMood,
}

impl JournalFilter {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::HighStress => "high-stress",
            Self::LowMood => "low-mood",
        }
    }

    /// Whether a log passes this filter
    #[must_use]
    pub const fn matches(self, log: &DailyLog) -> bool {
        match self {
            Self::All => true,
            Self::HighStress => log.stress_level >= HIGH_STRESS_LEVEL,
            Self::LowMood => log.mood <= LOW_MOOD_LEVEL,
        }
    }
}

impl Display for JournalFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JournalFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" => Ok(Self::All),
            "high-stress" | "highstress" => Ok(Self::HighStress),
            "low-mood" | "lowmood" => Ok(Self::LowMood),
            other => Err(AppError::invalid_input(format!(
                "Unknown journal filter: {other}"
            ))),
        }
    }
}

/// Logs matching `filter`, newest first; ties keep their input order
#[must_use]
pub fn filter_journal(logs: &[DailyLog], filter: JournalFilter) -> Vec<&DailyLog> {
    let mut entries: Vec<&DailyLog> = logs.iter().filter(|log| filter.matches(log)).collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
