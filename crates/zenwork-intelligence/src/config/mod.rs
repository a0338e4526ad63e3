// ABOUTME: Configuration module for zenwork-intelligence crate
// ABOUTME: Re-exports wellness scoring configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

/// Scoring engine configuration (baselines, estimator weights, classifier thresholds)
pub mod intelligence;

pub use intelligence::WellnessScoringConfig;
