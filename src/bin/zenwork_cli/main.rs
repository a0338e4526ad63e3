// ABOUTME: ZenWork CLI - scores a Log Store JSON export from the command line
// ABOUTME: Loads and validates check-ins, runs the wellness engine, prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
//!
//! Usage:
//! ```bash
//! # Today's wellness metrics
//! zenwork-cli --logs logs.json metrics
//!
//! # Metrics as of a specific day with a custom water goal
//! zenwork-cli --logs logs.json --date 2025-03-10 --water-goal 10 metrics
//!
//! # Daily quests after finishing a breathing session
//! zenwork-cli --logs logs.json quests --breathing-completed
//!
//! # High-stress journal entries, newest first
//! zenwork-cli --logs logs.json journal --filter high-stress
//!
//! # Coaching payload for the narrative generator
//! zenwork-cli --logs logs.json coach-context --name Sam --role "Staff Engineer" --goal reduce-stress
//!
//! # Metrics for every logged day
//! zenwork-cli --logs logs.json series
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use zenwork::config::AppConfig;
use zenwork::errors::{AppError, AppResult};
use zenwork::intelligence::JournalFilter;
use zenwork::logging::{AppLogger, LoggingConfig};
use zenwork::preferences::WellnessGoal;

use helpers::context::CliContext;
use helpers::display::print_error;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "zenwork-cli",
    about = "ZenWork wellness scoring CLI",
    long_about = "Scores a Log Store JSON export: wellness metrics, zen score, quests, summary, journal, and coaching context."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the Log Store JSON export
    #[arg(long, global = true)]
    logs: Option<PathBuf>,

    /// Day to score (YYYY-MM-DD, defaults to the current UTC day)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Daily water goal in cups (defaults to `ZENWORK_WATER_GOAL` or 8)
    #[arg(long, global = true)]
    water_goal: Option<u32>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Stress, energy, recovery, nervous system state, and contributors
    Metrics,

    /// Daily Zen Score (0-100)
    ZenScore,

    /// Daily quests, progress, and XP
    Quests {
        /// A breathing session was completed today
        #[arg(long)]
        breathing_completed: bool,
    },

    /// Averages and the current check-in streak
    Summary,

    /// Journal entries, newest first
    Journal {
        /// all, high-stress, or low-mood
        #[arg(long, default_value = "all")]
        filter: JournalFilter,
    },

    /// Structured context for the coaching generator
    CoachContext {
        /// User display name
        #[arg(long)]
        name: String,

        /// Free-text job role
        #[arg(long, default_value = "")]
        role: String,

        /// Primary wellness goal (defaults to `ZENWORK_WELLNESS_GOAL`)
        #[arg(long)]
        goal: Option<WellnessGoal>,
    },

    /// Metrics for every logged day, oldest first
    Series,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::ZenScore => "zen-score",
            Self::Quests { .. } => "quests",
            Self::Summary => "summary",
            Self::Journal { .. } => "journal",
            Self::CoachContext { .. } => "coach-context",
            Self::Series => "series",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let status = u8::try_from(error.exit_code()).unwrap_or(1);
            print_error(error);
            ExitCode::from(status)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("{e:#}")))?;

    let config = AppConfig::from_env().map_err(|e| AppError::config_invalid(format!("{e:#}")))?;
    config
        .init_all_configs()
        .map_err(|e| AppError::config_invalid(format!("{e:#}")))?;
    info!("ZenWork CLI");

    let logs_path = cli.logs.ok_or_else(|| AppError::missing_field("--logs"))?;
    let ctx = CliContext::load(&logs_path, cli.date, cli.water_goal, &config)?;

    let started = Instant::now();
    let command_name = cli.command.name();
    let outcome = match cli.command {
        Command::Metrics => commands::scoring::metrics(&ctx),
        Command::ZenScore => commands::scoring::zen_score(&ctx),
        Command::Series => commands::scoring::series(&ctx),
        Command::Quests {
            breathing_completed,
        } => commands::dashboard::quests(&ctx, breathing_completed),
        Command::Summary => commands::dashboard::summary(&ctx),
        Command::Journal { filter } => commands::dashboard::journal(&ctx, filter),
        Command::CoachContext { name, role, goal } => commands::coaching::coach_context(
            &ctx,
            name,
            role,
            goal.unwrap_or(config.preferences.wellness_goal),
        ),
    };

    AppLogger::log_command(
        command_name,
        outcome.is_ok(),
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        ctx.logs.len(),
    );
    outcome
}
