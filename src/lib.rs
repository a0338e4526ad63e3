// ABOUTME: Main library entry point for the ZenWork wellness engine
// ABOUTME: Re-exports the core and intelligence crates plus application configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![deny(unsafe_code)]

//! # `ZenWork`
//!
//! Deterministic wellness scoring for remote professionals. A user's daily
//! check-ins (mood, stress, hours worked, hydration) go in; three bounded
//! scores, a nervous system state, and human-readable contributors come out.
//!
//! ## Architecture
//!
//! - **`zenwork-core`**: errors, constants, `DailyLog` and `WellnessMetrics` models
//! - **`zenwork-intelligence`**: the pure scoring engine and derived dashboard views
//! - **this crate**: environment configuration, logging, and the `zenwork-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Weekday;
//! use zenwork::intelligence::{ScoringRequest, WellnessEngine};
//! use zenwork::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let engine = WellnessEngine::from_global();
//!     let request = ScoringRequest::new(None, &[], 8).with_weekday(Weekday::Tue);
//!     let metrics = engine.calculate(&request)?;
//!     println!("{}", metrics.nervous_system.label);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Log Store export loading and boundary validation
pub mod log_export;

/// Unified error handling (`AppError`, `ErrorCode`, `AppResult`)
pub use zenwork_core::errors;

/// Named scoring constants and canonical messages
pub use zenwork_core::constants;

/// `DailyLog`, `WellnessMetrics`, and nervous system types
pub use zenwork_core::models;

/// User preference types
pub use zenwork_core::config as preferences;

/// Scoring engine and derived views
pub use zenwork_intelligence as intelligence;
