// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring defaults, log validation limits, quest rewards, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Constants module
//!
//! Constants are grouped by the component that consumes them. Every number the
//! scoring engine uses has a named default here; `WellnessScoringConfig` in the
//! intelligence crate starts from these values and lets deployments tune them.

/// Human-readable contributor and nervous-system strings
pub mod messages;

pub use messages::{contributors, nervous_system as nervous_system_text, role_context};

/// Service identity used in structured logs
pub mod service_names {
    /// CLI binary name
    pub const ZENWORK_CLI: &str = "zenwork-cli";
    /// Library name used as the default `SERVICE_NAME`
    pub const ZENWORK_ENGINE: &str = "zenwork";
}

/// Score bounds shared by every estimator
pub mod score_bounds {
    /// Lowest possible score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Baselines used when the history is empty
pub mod baseline_defaults {
    /// Typical workday length (hours)
    pub const AVG_HOURS: f64 = 8.0;
    /// Mid-scale stress (1-10)
    pub const AVG_STRESS: f64 = 5.0;
    /// Mid-scale mood (1-5)
    pub const AVG_MOOD: f64 = 3.0;
}

/// Stress score weights and thresholds
pub mod stress {
    /// Stress level assumed when there is no check-in today
    pub const DEFAULT_STRESS_LEVEL: u8 = 3;
    /// Multiplier mapping stress 1-10 onto 10-100
    pub const LEVEL_MULTIPLIER: f64 = 10.0;
    /// Hours above/below baseline before workload affects stress
    pub const HOUR_DEVIATION_THRESHOLD: f64 = 1.0;
    /// Penalty for working more than the threshold above baseline
    pub const OVERTIME_PENALTY: f64 = 10.0;
    /// Bonus for working more than the threshold below baseline
    pub const LIGHT_LOAD_BONUS: f64 = 5.0;
    /// Number of consecutive prior days inspected for a high-stress streak
    pub const STREAK_DAYS: usize = 3;
    /// Stress level at or above which a day counts toward the streak
    pub const STREAK_LEVEL_THRESHOLD: u8 = 7;
    /// Penalty applied when a streak is present
    pub const STREAK_PENALTY: f64 = 15.0;
}

/// Energy score weights and thresholds
pub mod energy {
    /// Mood assumed when there is no check-in today
    pub const DEFAULT_MOOD: u8 = 3;
    /// Multiplier mapping mood 1-5 onto 20-100
    pub const MOOD_MULTIPLIER: f64 = 20.0;
    /// Hydration ratio below which energy is penalized
    pub const LOW_HYDRATION_RATIO: f64 = 0.5;
    /// Penalty for low hydration
    pub const LOW_HYDRATION_PENALTY: f64 = 15.0;
    /// Hydration ratio at or above which energy gets a bonus
    pub const WELL_HYDRATED_RATIO: f64 = 1.0;
    /// Bonus for meeting the hydration goal
    pub const WELL_HYDRATED_BONUS: f64 = 5.0;
    /// Hours worked yesterday above which fatigue carries over
    pub const LONG_HOURS_THRESHOLD: f64 = 10.0;
    /// Penalty for yesterday's long hours
    pub const LONG_HOURS_PENALTY: f64 = 20.0;
    /// Stress level yesterday at or above which stress lingers
    pub const LINGERING_STRESS_THRESHOLD: u8 = 8;
    /// Penalty for lingering stress
    pub const LINGERING_STRESS_PENALTY: f64 = 10.0;
}

/// Recovery readiness weights and thresholds
pub mod recovery {
    /// Starting score before adjustments
    pub const BASELINE_SCORE: f64 = 80.0;
    /// Mood yesterday at or above which recovery is considered high
    pub const GOOD_MOOD_THRESHOLD: u8 = 4;
    /// Stress yesterday at or below which recovery is considered high
    pub const LOW_STRESS_THRESHOLD: u8 = 4;
    /// Bonus for a high-recovery yesterday
    pub const HIGH_RECOVERY_BONUS: f64 = 15.0;
    /// Strain contribution per stress level point
    pub const STRAIN_STRESS_WEIGHT: f64 = 10.0;
    /// Strain contribution per hour worked
    pub const STRAIN_HOURS_WEIGHT: f64 = 5.0;
    /// Strain above which recovery is penalized
    pub const STRAIN_LIMIT: f64 = 100.0;
    /// Penalty for heavy strain
    pub const HEAVY_STRAIN_PENALTY: f64 = 20.0;
    /// Bonus applied on Mondays
    pub const MONDAY_BONUS: f64 = 5.0;
}

/// Nervous system quadrant thresholds (strictly greater-than)
pub mod nervous_system {
    /// Stress score above which the sympathetic branch dominates
    pub const HIGH_STRESS_THRESHOLD: f64 = 60.0;
    /// Energy score above which energy is considered high
    pub const HIGH_ENERGY_THRESHOLD: f64 = 50.0;
}

/// Daily Zen Score weights (sum to 100)
pub mod zen_score {
    /// Weight of mood
    pub const MOOD_WEIGHT: f64 = 40.0;
    /// Weight of inverted stress
    pub const STRESS_WEIGHT: f64 = 40.0;
    /// Weight of hydration progress
    pub const HYDRATION_WEIGHT: f64 = 20.0;
    /// Maximum mood on the check-in scale
    pub const MOOD_SCALE: f64 = 5.0;
    /// Maximum stress on the check-in scale
    pub const STRESS_SCALE: f64 = 10.0;
}

/// Daily quest identifiers and XP rewards
pub mod quests {
    /// Check-in quest id
    pub const CHECK_IN_ID: &str = "q1";
    /// Hydration quest id
    pub const WATER_ID: &str = "q2";
    /// Breathing quest id
    pub const BREATHE_ID: &str = "q3";
    /// Check-in quest title
    pub const CHECK_IN_TITLE: &str = "Daily Check-in";
    /// Hydration quest title
    pub const WATER_TITLE: &str = "Hit Water Goal";
    /// Breathing quest title
    pub const BREATHE_TITLE: &str = "Mindful Breath";
    /// XP for checking in
    pub const CHECK_IN_XP: u32 = 50;
    /// XP for hitting the water goal
    pub const WATER_XP: u32 = 30;
    /// XP for a breathing session
    pub const BREATHE_XP: u32 = 20;
}

/// Journal filter thresholds
pub mod journal {
    /// Stress level at or above which a log is "high stress"
    pub const HIGH_STRESS_LEVEL: u8 = 7;
    /// Mood at or below which a log is "low mood"
    pub const LOW_MOOD_LEVEL: u8 = 2;
}

/// Accepted ranges for self-reported check-in values
pub mod log_limits {
    /// Lowest mood
    pub const MIN_MOOD: u8 = 1;
    /// Highest mood
    pub const MAX_MOOD: u8 = 5;
    /// Lowest stress level
    pub const MIN_STRESS: u8 = 1;
    /// Highest stress level
    pub const MAX_STRESS: u8 = 10;
    /// Most hours that fit in a calendar day
    pub const MAX_HOURS_WORKED: f64 = 24.0;
    /// Default daily water goal in cups
    pub const DEFAULT_WATER_GOAL: u32 = 8;
}

/// Windows used when summarizing history for downstream consumers
pub mod windows {
    /// Number of most recent logs passed to the coaching generator
    pub const COACHING_RECENT_LOGS: usize = 7;
    /// Role reported to the coaching generator when the profile has none
    pub const DEFAULT_ROLE: &str = "Remote Professional";
}
