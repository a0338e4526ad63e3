// ABOUTME: Scoring commands for zenwork-cli
// ABOUTME: Wellness metrics for one day, the daily Zen Score, and the full per-day series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use zenwork::errors::AppResult;
use zenwork::intelligence::ZenScoreCalculator;
use zenwork::logging::AppLogger;
use zenwork::models::WellnessMetrics;

use crate::helpers::context::CliContext;
use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ZenScoreReport {
    date: NaiveDate,
    zen_score: u8,
    checked_in: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesEntry<'a> {
    date: NaiveDate,
    log_id: &'a str,
    metrics: WellnessMetrics,
}

/// Print wellness metrics for the scoring date
pub fn metrics(ctx: &CliContext) -> Result<()> {
    let window = ctx.window();
    let metrics = ctx.engine.calculate(&window.request(ctx.water_goal))?;
    info!(
        date = %ctx.date,
        state = metrics.nervous_system.state.as_str(),
        "Computed wellness metrics"
    );
    print_json(&metrics)
}

/// Print the Zen Score for the scoring date
pub fn zen_score(ctx: &CliContext) -> Result<()> {
    let window = ctx.window();
    let zen_score = ZenScoreCalculator::calculate(
        window.today.as_ref(),
        ctx.water_goal,
        &ctx.engine.config().zen_score,
    )?;
    print_json(&ZenScoreReport {
        date: ctx.date,
        zen_score,
        checked_in: window.today.is_some(),
    })
}

/// Print metrics for every check-in, each scored against the ones before it
pub fn series(ctx: &CliContext) -> Result<()> {
    let mut logs = ctx.logs.clone();
    logs.sort_by_key(|log| log.date);

    let started = Instant::now();
    let series = ctx.engine.calculate_series(&logs, ctx.water_goal)?;
    AppLogger::log_scoring_run(
        series.len(),
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    );

    let entries: Vec<SeriesEntry<'_>> = logs
        .iter()
        .zip(series)
        .map(|(log, metrics)| SeriesEntry {
            date: log.calendar_date(),
            log_id: &log.id,
            metrics,
        })
        .collect();
    print_json(&entries)
}
