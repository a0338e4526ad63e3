// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence
// ABOUTME: Re-exports helper modules for zenwork-cli
// ABOUTME: Provides the loaded command context and JSON output helpers

pub mod context;
pub mod display;
