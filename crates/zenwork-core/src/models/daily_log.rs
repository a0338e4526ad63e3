// ABOUTME: Daily check-in record supplied by the Log Store
// ABOUTME: Mood, stress, workload, and hydration self-reports with boundary validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::constants::log_limits::{
    MAX_HOURS_WORKED, MAX_MOOD, MAX_STRESS, MIN_MOOD, MIN_STRESS,
};
use crate::errors::LogValidationError;

/// Accepts full RFC 3339 ("2025-11-26T08:30:00Z"), naive ISO datetime
/// ("2025-11-26T08:30:00", read as UTC), or a bare date ("2025-11-26", midnight UTC)
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        let datetime = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DeError::custom("Invalid date"))?;
        return Ok(Utc.from_utc_datetime(&datetime));
    }

    Err(DeError::custom(format!(
        "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
    )))
}

/// Self-reported mood on the 1-5 check-in scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 1
    Terrible = 1,
    /// 2
    Bad = 2,
    /// 3
    Okay = 3,
    /// 4
    Good = 4,
    /// 5
    Great = 5,
}

impl Mood {
    /// Map a raw check-in value onto the scale
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Terrible),
            2 => Some(Self::Bad),
            3 => Some(Self::Okay),
            4 => Some(Self::Good),
            5 => Some(Self::Great),
            _ => None,
        }
    }

    /// Numeric value on the 1-5 scale
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// One user check-in for a calendar day
///
/// Immutable once created: the Log Store supersedes or deletes records, it
/// never edits them. Field names serialize in camelCase to match the store's
/// JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Store-assigned identifier
    pub id: String,
    /// When the check-in was recorded
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub date: DateTime<Utc>,
    /// Mood, 1 (terrible) to 5 (great)
    pub mood: u8,
    /// Stress level, 1 (calm) to 10 (overwhelmed)
    pub stress_level: u8,
    /// Hours worked that day
    pub hours_worked: f64,
    /// Water intake in cups
    pub water_intake: u32,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl DailyLog {
    /// Create a check-in with a freshly minted id
    #[must_use]
    pub fn new(
        date: DateTime<Utc>,
        mood: u8,
        stress_level: u8,
        hours_worked: f64,
        water_intake: u32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            mood,
            stress_level,
            hours_worked,
            water_intake,
            notes: notes.into(),
        }
    }

    /// Calendar day (UTC) the check-in belongs to
    #[must_use]
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Typed mood, `None` when the raw value is off-scale
    #[must_use]
    pub const fn mood_level(&self) -> Option<Mood> {
        Mood::from_level(self.mood)
    }

    /// Check the self-reported values against the check-in scales
    ///
    /// The scoring engine does not call this; the Log Store boundary does.
    ///
    /// # Errors
    /// Returns the first `LogValidationError` found
    pub fn validate(&self) -> Result<(), LogValidationError> {
        if self.id.trim().is_empty() {
            return Err(LogValidationError::MissingId);
        }
        if !(MIN_MOOD..=MAX_MOOD).contains(&self.mood) {
            return Err(LogValidationError::MoodOutOfRange {
                log_id: self.id.clone(),
                mood: self.mood,
            });
        }
        if !(MIN_STRESS..=MAX_STRESS).contains(&self.stress_level) {
            return Err(LogValidationError::StressOutOfRange {
                log_id: self.id.clone(),
                stress_level: self.stress_level,
            });
        }
        if !self.hours_worked.is_finite() || !(0.0..=MAX_HOURS_WORKED).contains(&self.hours_worked)
        {
            return Err(LogValidationError::InvalidHoursWorked {
                log_id: self.id.clone(),
                hours_worked: self.hours_worked,
            });
        }
        Ok(())
    }
}
