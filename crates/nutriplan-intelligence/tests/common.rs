// ABOUTME: Shared test utilities for nutriplan-intelligence integration tests
// ABOUTME: Provides quiet logging setup and reference patient fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared fixtures for the calculator integration tests

use nutriplan_core::models::{PatientBiometrics, Sex};
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

/// 70 kg, 1.70 m, 30 y male (same numbers as the standard profile)
pub fn reference_male() -> PatientBiometrics {
    PatientBiometrics::new(70.0, 1.70, 30, Sex::Male)
}

/// 60 kg, 1.65 m, 25 y female
pub fn reference_female() -> PatientBiometrics {
    PatientBiometrics::new(60.0, 1.65, 25, Sex::Female)
}
