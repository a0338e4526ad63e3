// ABOUTME: Daily quest board derived from today's check-in and breathing session state
// ABOUTME: Reports completion, progress, and XP without touching any account state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use serde::{Deserialize, Serialize};

use crate::engine::require_water_goal;
use zenwork_core::constants::quests::{
    BREATHE_ID, BREATHE_TITLE, BREATHE_XP, CHECK_IN_ID, CHECK_IN_TITLE, CHECK_IN_XP, WATER_ID,
    WATER_TITLE, WATER_XP,
};
use zenwork_core::errors::AppResult;
use zenwork_core::models::DailyLog;

/// What the user does to complete a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Submit today's check-in
    Checkin,
    /// Reach the daily water goal
    Water,
    /// Finish a breathing session
    Breathe,
}

/// One daily quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Stable quest id
    pub id: String,
    /// Display title
    pub title: String,
    /// Quest type
    #[serde(rename = "type")]
    pub kind: QuestKind,
    /// XP granted on completion
    pub xp_reward: u32,
    /// Whether it is done today
    pub completed: bool,
}

impl Quest {
    fn new(id: &str, title: &str, kind: QuestKind, xp_reward: u32, completed: bool) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            kind,
            xp_reward,
            completed,
        }
    }
}

/// Today's quests with aggregate progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestBoard {
    /// Quests in display order
    pub quests: Vec<Quest>,
    /// Number completed
    pub completed_count: usize,
    /// Completed share, 0-100
    pub progress_percent: f64,
    /// Sum of XP from completed quests
    pub xp_earned: u32,
}

impl QuestBoard {
    /// Evaluate today's quests
    ///
    /// # Errors
    /// Returns a `ValueOutOfRange` error when the water goal is zero
    pub fn evaluate(
        today: Option<&DailyLog>,
        water_goal: u32,
        breathing_completed: bool,
    ) -> AppResult<Self> {
        let goal = require_water_goal(water_goal)?.get();

        let quests = vec![
            Quest::new(
                CHECK_IN_ID,
                CHECK_IN_TITLE,
                QuestKind::Checkin,
                CHECK_IN_XP,
                today.is_some(),
            ),
            Quest::new(
                WATER_ID,
                WATER_TITLE,
                QuestKind::Water,
                WATER_XP,
                today.is_some_and(|log| log.water_intake >= goal),
            ),
            Quest::new(
                BREATHE_ID,
                BREATHE_TITLE,
                QuestKind::Breathe,
                BREATHE_XP,
                breathing_completed,
            ),
        ];

        let completed_count = quests.iter().filter(|quest| quest.completed).count();
        let xp_earned = quests
            .iter()
            .filter(|quest| quest.completed)
            .map(|quest| quest.xp_reward)
            .sum();
        let progress_percent = completed_count as f64 / quests.len() as f64 * 100.0;

        Ok(Self {
            quests,
            completed_count,
            progress_percent,
            xp_earned,
        })
    }

    /// True once every quest is done
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.completed_count == self.quests.len()
    }
}
