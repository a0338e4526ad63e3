// ABOUTME: Configuration module for the ZenWork application layer
// ABOUTME: Environment-driven settings; scoring weights live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

/// Environment, log level, and user preference configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use zenwork_intelligence::config::intelligence::WellnessScoringConfig;
