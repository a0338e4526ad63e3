// ABOUTME: Tests for application environment configuration
// ABOUTME: Parsing helpers, water and wellness goal variables, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use zenwork::config::{AppConfig, Environment, LogLevel};
use zenwork::logging::LogFormat;
use zenwork::preferences::WellnessGoal;

const VARS: [&str; 5] = [
    "ZENWORK_WATER_GOAL",
    "ZENWORK_WELLNESS_GOAL",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert!(Environment::from_str_or_default("test").is_testing());
    assert!(Environment::from_str_or_default("anything").is_development());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_vars();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.preferences.water_goal, 8);
    assert_eq!(config.preferences.wellness_goal, WellnessGoal::WorkLifeBalance);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.summary().contains("Water Goal: 8 cups"));
}

#[test]
#[serial]
fn test_goals_from_environment() {
    clear_vars();
    env::set_var("ZENWORK_WATER_GOAL", "10");
    env::set_var("ZENWORK_WELLNESS_GOAL", "better-sleep");
    env::set_var("LOG_FORMAT", "json");

    let config = AppConfig::from_env();
    clear_vars();

    let config = config.unwrap();
    assert_eq!(config.preferences.water_goal, 10);
    assert_eq!(config.preferences.wellness_goal, WellnessGoal::BetterSleep);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
#[serial]
fn test_zero_water_goal_is_rejected() {
    clear_vars();
    env::set_var("ZENWORK_WATER_GOAL", "0");
    let result = AppConfig::from_env();
    clear_vars();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("ZENWORK_WATER_GOAL"));
}

#[test]
#[serial]
fn test_unknown_wellness_goal_is_rejected() {
    clear_vars();
    env::set_var("ZENWORK_WELLNESS_GOAL", "get-rich");
    let result = AppConfig::from_env();
    clear_vars();

    assert!(result.is_err());
}
