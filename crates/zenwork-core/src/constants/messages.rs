// ABOUTME: Canonical human-readable strings emitted by the scoring engine
// ABOUTME: Contributor explanations, nervous system labels, and role context text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Contributor strings are quoted verbatim by downstream narrative generators,
//! so they are part of the output contract and must not drift.

/// Contributor attribution strings
pub mod contributors {
    /// Prefix for the overtime contributor; the hour delta is appended as `+{delta:.1}h)`
    pub const WORK_HOURS_ABOVE_AVERAGE_PREFIX: &str = "Work hours higher than average";
    /// Positive: worked less than usual
    pub const LIGHTER_WORK_LOAD: &str = "Lighter work load today";
    /// Negative: three consecutive high-stress days
    pub const ACCUMULATED_STRESS: &str = "Accumulated stress from past 3 days";
    /// Negative: hydration below half the goal
    pub const LOW_HYDRATION: &str = "Low hydration impacting focus";
    /// Positive: hydration goal met
    pub const WELL_HYDRATED: &str = "Well hydrated";
    /// Negative: yesterday was a long day
    pub const YESTERDAY_LONG_HOURS: &str = "Fatigue from yesterday's long hours";
    /// Negative: yesterday was very stressful
    pub const YESTERDAY_LINGERING_STRESS: &str = "Lingering stress from yesterday";
    /// Positive: yesterday had good mood and low stress
    pub const HIGH_RECOVERY: &str = "High recovery state detected";

    /// Render the overtime contributor for a given hour delta
    #[must_use]
    pub fn work_hours_above_average(hour_diff: f64) -> String {
        format!("{WORK_HOURS_ABOVE_AVERAGE_PREFIX} (+{hour_diff:.1}h)")
    }
}

/// Nervous system quadrant text
pub mod nervous_system {
    /// High stress, high energy
    pub const ACTIVATED_LABEL: &str = "Sympathetic Activation";
    /// Description for the activated state
    pub const ACTIVATED_DESCRIPTION: &str =
        "High energy but high pressure. Good for short sprints, but watch for burnout.";
    /// High stress, low energy
    pub const OVERDRIVE_LABEL: &str = "Sympathetic Overdrive";
    /// Description for the overdrive state
    pub const OVERDRIVE_DESCRIPTION: &str =
        "High stress and low energy. You are at risk of burnout. Prioritize rest immediately.";
    /// Low stress, high energy
    pub const FLOW_LABEL: &str = "Parasympathetic Flow";
    /// Description for the flow state
    pub const FLOW_DESCRIPTION: &str =
        "Calm and energetic. This is your sweet spot for creative work.";
    /// Low stress, low energy
    pub const RECHARGE_LABEL: &str = "Rest & Digest";
    /// Description for the recharge state
    pub const RECHARGE_DESCRIPTION: &str =
        "Low stress but low energy. Your body needs active recovery.";
}

/// Role-specific challenges forwarded to the coaching generator
pub mod role_context {
    /// Engineering roles
    pub const DEVELOPER: &str = "Developer challenges: Eye strain, deep work interruption, isolation, cognitive fatigue from debugging, and 'crunch mode'.";
    /// Management roles
    pub const LEADERSHIP: &str = "Leadership challenges: Decision fatigue, meeting overload ('Zoom fatigue'), emotional labor of supporting others, and lack of focus time.";
    /// Design and writing roles
    pub const CREATIVE: &str = "Creative challenges: Creative block, feedback fatigue, perfectionism, and imposter syndrome.";
    /// Sales and marketing roles
    pub const GROWTH: &str = "Growth role challenges: High pressure targets, social battery drain, performance anxiety, and rejection resilience.";
    /// Customer-facing support roles
    pub const SUPPORT: &str = "Support role challenges: Empathy fatigue, repetitive tasks, high reactivity requirement, and difficult customer interactions.";
    /// Anything else
    pub const GENERAL: &str = "General remote work challenges: boundary setting, sedentary lifestyle, and digital disconnection.";
}
