// ABOUTME: Dashboard commands for zenwork-cli
// ABOUTME: Daily quests, summary statistics, and the filtered journal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use tracing::info;
use zenwork::errors::AppResult;
use zenwork::intelligence::{filter_journal, JournalFilter, QuestBoard, WellnessSummary};

use crate::helpers::context::CliContext;
use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Print today's quest board
pub fn quests(ctx: &CliContext, breathing_completed: bool) -> Result<()> {
    let window = ctx.window();
    let board = QuestBoard::evaluate(window.today.as_ref(), ctx.water_goal, breathing_completed)?;
    if board.all_completed() {
        info!(xp = board.xp_earned, "All daily quests completed");
    }
    print_json(&board)
}

/// Print averages and the check-in streak as of the scoring date
pub fn summary(ctx: &CliContext) -> Result<()> {
    let logs = ctx.logs_through_date();
    print_json(&WellnessSummary::from_logs(&logs, ctx.date))
}

/// Print journal entries up to the scoring date matching the filter, newest first
pub fn journal(ctx: &CliContext, filter: JournalFilter) -> Result<()> {
    let logs = ctx.logs_through_date();
    let entries = filter_journal(&logs, filter);
    info!(filter = filter.as_str(), matched = entries.len(), "Filtered journal");
    print_json(&entries)
}
