// ABOUTME: Configuration module for nutriplan-intelligence crate
// ABOUTME: Re-exports validation thresholds, host defaults and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default calculator inputs for hosts and the CLI
pub mod defaults;

/// Configuration error types
pub mod error;

/// Biometric warning thresholds
pub mod validation;

pub use defaults::CalculatorDefaultsConfig;
pub use error::ConfigError;
pub use validation::ValidationConfig;
