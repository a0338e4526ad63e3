// ABOUTME: Structured coaching context handed to the external narrative generator
// ABOUTME: Role categorization, goal, recent check-ins, metrics, and the leading negative factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Coaching Context
//!
//! The engine never writes prose. This module only gathers the facts a
//! downstream generator needs, in a serializable shape.

use serde::{Deserialize, Serialize};

use zenwork_core::config::{UserProfile, WellnessGoal};
use zenwork_core::constants::role_context;
use zenwork_core::constants::windows::{COACHING_RECENT_LOGS, DEFAULT_ROLE};
use zenwork_core::models::{DailyLog, WellnessMetrics};

/// Broad job family inferred from a free-text role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    /// Developers, engineers, programmers
    Developer,
    /// Managers, leads, executives
    Leadership,
    /// Designers, artists, writers
    Creative,
    /// Sales and marketing
    Growth,
    /// Support and customer success
    Support,
    /// Anything unrecognized
    General,
}

impl RoleCategory {
    /// Keyword table checked in order; the first category with a hit wins
    const KEYWORDS: [(Self, &'static [&'static str]); 5] = [
        (Self::Developer, &["developer", "engineer", "coder", "programmer"]),
        (
            Self::Leadership,
            &["manager", "lead", "executive", "director", "head"],
        ),
        (Self::Creative, &["designer", "creative", "artist", "writer"]),
        (Self::Growth, &["sales", "marketing", "account"]),
        (Self::Support, &["support", "service", "success"]),
    ];

    /// Categorize a free-text role by case-insensitive substring match
    #[must_use]
    pub fn from_role(role: &str) -> Self {
        let role = role.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| role.contains(keyword)))
            .map_or(Self::General, |(category, _)| *category)
    }

    /// Typical challenges for the category
    #[must_use]
    pub const fn context(self) -> &'static str {
        match self {
            Self::Developer => role_context::DEVELOPER,
            Self::Leadership => role_context::LEADERSHIP,
            Self::Creative => role_context::CREATIVE,
            Self::Growth => role_context::GROWTH,
            Self::Support => role_context::SUPPORT,
            Self::General => role_context::GENERAL,
        }
    }
}

/// Everything the narrative generator is given about a user's day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingContext {
    /// Display name
    pub user_name: String,
    /// Role as entered, or a generic default
    pub role: String,
    /// Inferred job family
    pub role_category: RoleCategory,
    /// Challenges typical for the job family
    pub role_context: String,
    /// Primary wellness goal
    pub wellness_goal: WellnessGoal,
    /// Goal in headline form
    pub goal_headline: String,
    /// Most recent check-ins, oldest first
    pub recent_logs: Vec<DailyLog>,
    /// Today's metrics
    pub metrics: WellnessMetrics,
    /// First negative contributor, quoted as the main cause
    pub leading_factor: Option<String>,
}

impl CoachingContext {
    /// Assemble the context from a profile, the ordered log list, and today's metrics
    #[must_use]
    pub fn build(profile: &UserProfile, logs: &[DailyLog], metrics: WellnessMetrics) -> Self {
        let role = if profile.role.trim().is_empty() {
            DEFAULT_ROLE.to_owned()
        } else {
            profile.role.clone()
        };
        let role_category = RoleCategory::from_role(&profile.role);
        let start = logs.len().saturating_sub(COACHING_RECENT_LOGS);
        let leading_factor = metrics.contributors.leading_factor().map(str::to_owned);
        let wellness_goal = profile.preferences.wellness_goal;

        Self {
            user_name: profile.name.clone(),
            role,
            role_category,
            role_context: role_category.context().to_owned(),
            wellness_goal,
            goal_headline: wellness_goal.headline(),
            recent_logs: logs.get(start..).unwrap_or_default().to_vec(),
            metrics,
            leading_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keywords() {
        assert_eq!(
            RoleCategory::from_role("Senior Software Engineer"),
            RoleCategory::Developer
        );
        assert_eq!(RoleCategory::from_role("Team LEAD"), RoleCategory::Leadership);
        assert_eq!(RoleCategory::from_role("UX Designer"), RoleCategory::Creative);
        assert_eq!(
            RoleCategory::from_role("Account Executive"),
            RoleCategory::Leadership
        );
        assert_eq!(
            RoleCategory::from_role("Customer Success"),
            RoleCategory::Support
        );
        assert_eq!(RoleCategory::from_role("Nurse"), RoleCategory::General);
        assert_eq!(RoleCategory::from_role(""), RoleCategory::General);
    }
}
