// ABOUTME: Wellness engine facade turning a check-in and its history into WellnessMetrics
// ABOUTME: Runs baselines, the three estimators, and the classifier; batch series via rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! # Wellness Engine
//!
//! A single pure function from `(today?, history, water_goal)` to
//! [`WellnessMetrics`]. The engine holds only immutable configuration, so one
//! instance can be shared freely across threads.
//!
//! Control flow:
//! 1. [`BaselineCalculator`] reduces history into averages
//! 2. [`StressEstimator`], [`EnergyEstimator`], [`RecoveryEstimator`] run in that
//!    order and append to one [`Contributors`] accumulator
//! 3. [`NervousSystemClassifier`] maps (stress, energy) onto a quadrant
//!
//! `history` must already exclude today's record and be ordered oldest first;
//! [`crate::log_window::LogWindow`] performs that partitioning for callers.

use std::num::NonZeroU32;

use chrono::{Datelike, Local, Weekday};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::baselines::BaselineCalculator;
use crate::config::intelligence::WellnessScoringConfig;
use crate::energy::EnergyEstimator;
use crate::nervous_system::NervousSystemClassifier;
use crate::recovery::RecoveryEstimator;
use crate::stress::StressEstimator;
use zenwork_core::errors::{AppError, AppResult};
use zenwork_core::models::{Contributors, DailyLog, WellnessMetrics};

/// Reject a zero water goal before any ratio is computed
///
/// # Errors
/// Returns a `ValueOutOfRange` error when `water_goal` is zero
pub fn require_water_goal(water_goal: u32) -> AppResult<NonZeroU32> {
    NonZeroU32::new(water_goal).ok_or_else(|| {
        warn!(water_goal, "Rejected scoring request with zero water goal");
        AppError::value_out_of_range("water goal must be greater than zero")
            .with_resource_id("water_goal")
    })
}

/// Inputs for one scoring run
#[derive(Debug, Clone, Copy)]
pub struct ScoringRequest<'a> {
    /// Today's check-in, if the user has checked in
    pub today: Option<&'a DailyLog>,
    /// Prior check-ins, oldest first, excluding today
    pub history: &'a [DailyLog],
    /// Daily water goal in cups
    pub water_goal: u32,
    /// Weekday being scored (drives the Monday recovery bonus)
    pub weekday: Weekday,
}

impl<'a> ScoringRequest<'a> {
    /// Request scored against the local current weekday
    #[must_use]
    pub fn new(today: Option<&'a DailyLog>, history: &'a [DailyLog], water_goal: u32) -> Self {
        Self {
            today,
            history,
            water_goal,
            weekday: Local::now().weekday(),
        }
    }

    /// Pin the weekday instead of reading the wall clock
    #[must_use]
    pub const fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = weekday;
        self
    }
}

/// Stateless scoring service configured once and reused for every request
#[derive(Debug, Clone, Default)]
pub struct WellnessEngine {
    config: WellnessScoringConfig,
}

impl WellnessEngine {
    /// Engine with an explicit configuration
    #[must_use]
    pub const fn new(config: WellnessScoringConfig) -> Self {
        Self { config }
    }

    /// Engine using the process-wide configuration (environment overrides applied)
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(WellnessScoringConfig::global().clone())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WellnessScoringConfig {
        &self.config
    }

    /// Score a single day
    ///
    /// # Errors
    /// Returns a `ValueOutOfRange` error when the water goal is zero, whether or
    /// not there is a check-in today
    pub fn calculate(&self, request: &ScoringRequest<'_>) -> AppResult<WellnessMetrics> {
        let water_goal = require_water_goal(request.water_goal)?;
        let config = &self.config;
        let bounds = &config.score_bounds;

        let baselines = BaselineCalculator::calculate(request.history, &config.baselines);
        let mut contributors = Contributors::default();

        let stress_score = StressEstimator::estimate(
            request.today,
            &baselines,
            request.history,
            &config.stress,
            bounds,
            &mut contributors,
        );
        let energy_score = EnergyEstimator::estimate(
            request.today,
            water_goal,
            request.history,
            &config.energy,
            bounds,
            &mut contributors,
        );
        let recovery_score = RecoveryEstimator::estimate(
            request.history,
            request.weekday,
            &config.recovery,
            bounds,
            &mut contributors,
        );

        let nervous_system =
            NervousSystemClassifier::describe(stress_score, energy_score, &config.nervous_system);

        debug!(
            history_len = request.history.len(),
            has_today = request.today.is_some(),
            avg_hours = baselines.avg_hours,
            stress_score,
            energy_score,
            recovery_score,
            state = %nervous_system.state,
            "Calculated wellness metrics"
        );

        Ok(WellnessMetrics {
            stress_score,
            energy_score,
            recovery_score,
            nervous_system,
            contributors,
        })
    }

    /// Score every day of an ordered log list
    ///
    /// Day `i` is scored with `logs[i]` as today, `logs[..i]` as history, and
    /// the weekday of `logs[i]`'s calendar date. Days are computed in parallel;
    /// results come back in input order.
    ///
    /// # Errors
    /// Returns a `ValueOutOfRange` error when the water goal is zero
    pub fn calculate_series(
        &self,
        logs: &[DailyLog],
        water_goal: u32,
    ) -> AppResult<Vec<WellnessMetrics>> {
        require_water_goal(water_goal)?;

        let series = (0..logs.len())
            .into_par_iter()
            .map(|index| {
                let (history, rest) = logs.split_at(index);
                let today = rest.first();
                let weekday = today.map_or_else(
                    || Local::now().weekday(),
                    |log| log.calendar_date().weekday(),
                );
                self.calculate(&ScoringRequest {
                    today,
                    history,
                    water_goal,
                    weekday,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        debug!(days = series.len(), "Calculated wellness series");
        Ok(series)
    }
}

/// Score today against history with the process-wide configuration and the
/// local current weekday
///
/// # Errors
/// Returns a `ValueOutOfRange` error when the water goal is zero
pub fn calculate_wellness_metrics(
    today: Option<&DailyLog>,
    history: &[DailyLog],
    water_goal: u32,
) -> AppResult<WellnessMetrics> {
    WellnessEngine::new(WellnessScoringConfig::global().clone())
        .calculate(&ScoringRequest::new(today, history, water_goal))
}
