// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
// ABOUTME: Re-exports command modules for zenwork-cli
// ABOUTME: Scoring, dashboard, and coaching command handlers

pub mod coaching;
pub mod dashboard;
pub mod scoring;
