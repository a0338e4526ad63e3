// ABOUTME: Core data models for the ZenWork wellness engine
// ABOUTME: Re-exports daily log input types and wellness metrics output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! # Data Models
//!
//! - `DailyLog`: one self-reported check-in (input, owned by the Log Store)
//! - `Baselines`: rolling averages derived from history
//! - `WellnessMetrics`: scores, nervous system state, and contributors (output)
//!
//! All models serialize to camelCase JSON so they can be handed straight to a
//! UI layer or a coaching generator.

/// Daily check-in record
pub mod daily_log;

/// Derived metrics and classifier types
pub mod metrics;

pub use daily_log::{DailyLog, Mood};
pub use metrics::{Baselines, Contributors, NervousSystem, NervousSystemState, WellnessMetrics};
