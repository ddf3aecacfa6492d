// ABOUTME: Shared test utilities and setup functions for nutriplan integration tests
// ABOUTME: Provides quiet logging setup and calculator input fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`

use nutriplan::models::{ActivityLevel, DietType, PatientBiometrics, Sex};
use nutriplan::CalculatorInput;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity, WARN keeps runs quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Every `NUTRIPLAN_*` variable the configuration reads
pub const CONFIG_ENV_VARS: [&str; 13] = [
    "NUTRIPLAN_DEFAULT_METHOD",
    "NUTRIPLAN_DEFAULT_DIET_TYPE",
    "NUTRIPLAN_DEFAULT_ACTIVITY_LEVEL",
    "NUTRIPLAN_DEFAULT_GOAL_ADJUSTMENT",
    "NUTRIPLAN_MIN_WEIGHT_KG",
    "NUTRIPLAN_MAX_WEIGHT_KG",
    "NUTRIPLAN_MIN_HEIGHT_M",
    "NUTRIPLAN_MAX_HEIGHT_M",
    "NUTRIPLAN_MAX_AGE_YEARS",
    "NUTRIPLAN_ADULT_MIN_AGE_YEARS",
    "NUTRIPLAN_MIN_BODY_FAT_PERCENT",
    "NUTRIPLAN_MAX_BODY_FAT_PERCENT",
    "NUTRIPLAN_MACRO_TOTAL_TOLERANCE_PERCENT",
];

/// Remove every calculator variable from the process environment
pub fn clear_config_env() {
    for name in CONFIG_ENV_VARS {
        env::remove_var(name);
    }
}

/// Reference plan: 70 kg / 1.70 m / 30 y male, Mifflin, normocaloric, moderately active
pub fn reference_input() -> CalculatorInput {
    CalculatorInput {
        patient: Some(PatientBiometrics::new(70.0, 1.70, 30, Sex::Male)),
        diet_type: DietType::Normocalorica,
        activity_level: ActivityLevel::ModeratelyActive,
        ..CalculatorInput::default()
    }
}
