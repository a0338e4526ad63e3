// ABOUTME: Deterministic wellness scoring engine for self-reported daily check-ins
// ABOUTME: Baselines, stress/energy/recovery estimators, nervous system classifier, derived views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![deny(unsafe_code)]

//! # `ZenWork` Intelligence
//!
//! Converts sparse, noisy self-reports into three bounded scores, a nervous
//! system quadrant, and the contributors that explain them. Everything here is
//! pure and synchronous: no I/O, no shared mutable state, and identical inputs
//! always produce identical output.
//!
//! ## Modules
//!
//! - **engine**: `WellnessEngine` facade and `ScoringRequest`
//! - **baselines**, **stress**, **energy**, **recovery**, **`nervous_system`**: the pipeline stages
//! - **`log_window`**: today/history partitioning for callers
//! - **`zen_score`**, **quests**, **summary**, **journal**, **coaching**: dashboard-facing views
//! - **config**: every tunable weight and threshold, with environment overrides

/// Scoring configuration with environment overrides
pub mod config;

/// Rolling averages over history
pub mod baselines;

/// Stress score estimator
pub mod stress;

/// Energy score estimator
pub mod energy;

/// Recovery readiness estimator
pub mod recovery;

/// Stress x energy quadrant classifier
pub mod nervous_system;

/// Engine facade and batch series computation
pub mod engine;

/// Today/history partitioning
pub mod log_window;

/// Daily Zen Score
pub mod zen_score;

/// Daily quests
pub mod quests;

/// Dashboard summary statistics
pub mod summary;

/// Journal filtering
pub mod journal;

/// Coaching context assembly
pub mod coaching;

pub use baselines::BaselineCalculator;
pub use coaching::{CoachingContext, RoleCategory};
pub use config::intelligence::{ConfigError, WellnessScoringConfig};
pub use energy::EnergyEstimator;
pub use engine::{calculate_wellness_metrics, require_water_goal, ScoringRequest, WellnessEngine};
pub use journal::{filter_journal, JournalFilter};
pub use log_window::LogWindow;
pub use nervous_system::NervousSystemClassifier;
pub use quests::{Quest, QuestBoard, QuestKind};
pub use recovery::RecoveryEstimator;
pub use stress::StressEstimator;
pub use summary::{check_in_streak, WellnessSummary};
pub use zen_score::ZenScoreCalculator;
