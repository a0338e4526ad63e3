// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains UserPreferences, UserProfile, and WellnessGoal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

/// User profile and preference configuration
pub mod profiles;

pub use profiles::{UserPreferences, UserProfile, WellnessGoal};
