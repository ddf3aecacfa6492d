// ABOUTME: Tests for NUTRIPLAN_* environment overrides of the calculator configuration
// ABOUTME: Validates parsing, aliases, validation failures and default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::CalculatorConfig;
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, DietType};
use nutriplan_intelligence::config::ConfigError;
use serial_test::serial;
use std::env;

mod common;

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    common::init_test_logging();
    common::clear_config_env();

    let config = CalculatorConfig::load().unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
#[serial]
fn test_default_overrides_accept_aliases() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_DEFAULT_METHOD", "harris_benedict");
    env::set_var("NUTRIPLAN_DEFAULT_DIET_TYPE", "keto");
    env::set_var("NUTRIPLAN_DEFAULT_ACTIVITY_LEVEL", "1.725");
    env::set_var("NUTRIPLAN_DEFAULT_GOAL_ADJUSTMENT", "-500");

    let config = CalculatorConfig::load().unwrap();
    common::clear_config_env();

    assert_eq!(config.defaults.method, CalculationMethod::HarrisBenedict1984);
    assert_eq!(config.defaults.diet_type, DietType::Cetogenica);
    assert_eq!(config.defaults.activity_level, ActivityLevel::VeryActive);
    assert_eq!(config.defaults.goal_adjustment, -500);

    let input = config.defaults.to_input();
    assert!(input.patient.is_none());
    assert_eq!(input.goal_adjustment, -500);
}

#[test]
#[serial]
fn test_validation_threshold_overrides() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_MIN_WEIGHT_KG", "30");
    env::set_var("NUTRIPLAN_ADULT_MIN_AGE_YEARS", "16");

    let config = CalculatorConfig::load().unwrap();
    common::clear_config_env();

    assert!((config.validation.min_weight_kg - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.validation.adult_min_age_years, 16);
}

#[test]
#[serial]
fn test_unknown_method_is_parse_error() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_DEFAULT_METHOD", "bogus_1900");

    let result = CalculatorConfig::load();
    common::clear_config_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_non_numeric_threshold_is_parse_error() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_MAX_WEIGHT_KG", "heavy");

    let result = CalculatorConfig::load();
    common::clear_config_env();

    let error = result.unwrap_err();
    assert!(error.to_string().contains("NUTRIPLAN_MAX_WEIGHT_KG"));
}

#[test]
#[serial]
fn test_inverted_range_fails_validation() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_MIN_HEIGHT_M", "2.6");

    let result = CalculatorConfig::load();
    common::clear_config_env();

    let app_error: AppError = result.unwrap_err().into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_excessive_default_goal_fails_validation() {
    common::clear_config_env();
    env::set_var("NUTRIPLAN_DEFAULT_GOAL_ADJUSTMENT", "2500");

    let result = CalculatorConfig::load();
    common::clear_config_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_utf8_variable_is_env_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    common::clear_config_env();
    env::set_var(
        "NUTRIPLAN_DEFAULT_DIET_TYPE",
        OsStr::from_bytes(&[0x6b, 0x65, 0x74, 0xff]),
    );

    let result = CalculatorConfig::load();
    common::clear_config_env();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::EnvVar(_)));
    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}
