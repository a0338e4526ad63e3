// ABOUTME: Coaching context command for zenwork-cli
// ABOUTME: Assembles the structured payload handed to the external narrative generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use zenwork::errors::{AppError, AppResult};
use zenwork::intelligence::CoachingContext;
use zenwork::preferences::{UserPreferences, UserProfile, WellnessGoal};

use crate::helpers::context::CliContext;
use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Print the coaching context for the scoring date
pub fn coach_context(
    ctx: &CliContext,
    name: String,
    role: String,
    wellness_goal: WellnessGoal,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }

    let window = ctx.window();
    let metrics = ctx.engine.calculate(&window.request(ctx.water_goal))?;
    let profile = UserProfile {
        name,
        role,
        preferences: UserPreferences {
            wellness_goal,
            water_goal: ctx.water_goal,
        },
    };

    // Recent logs stop at the scoring date so later entries never leak in
    let mut logs = window.history;
    logs.extend(window.today);
    print_json(&CoachingContext::build(&profile, &logs, metrics))
}
