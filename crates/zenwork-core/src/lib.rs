// ABOUTME: Core types and constants for the ZenWork wellness scoring engine
// ABOUTME: Foundation crate with error handling, daily log models, and named constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![deny(unsafe_code)]

//! # `ZenWork` Core
//!
//! Foundation crate providing shared types and constants for the `ZenWork`
//! wellness engine. This crate is designed to change infrequently so the
//! scoring crate and the application layer can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and log validation errors
//! - **constants**: Scoring defaults, contributor messages, and classifier text
//! - **models**: `DailyLog`, `WellnessMetrics`, and the nervous system state types
//! - **config**: User preference types (water goal, wellness goal)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`DailyLog`, `WellnessMetrics`, `NervousSystemState`)
pub mod models;

/// User preference configuration shared by the engine and its callers
pub mod config;
