// ABOUTME: Configuration error types for calculator configuration validation
// ABOUTME: Defines error variants for invalid ranges, unreadable variables and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for calculator configuration validation.

use nutriplan_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds are inverted or empty (e.g., min >= max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable is set but holds non-UTF-8 data
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_map_to_config_invalid() {
        let error = AppError::from(ConfigError::ValueOutOfRange("goal_adjustment"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("goal_adjustment"));

        let error = AppError::from(ConfigError::InvalidRange("min_weight_kg >= max_weight_kg"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_unreadable_variable_maps_to_config_error() {
        let error = AppError::from(ConfigError::from(env::VarError::NotUnicode(
            "\u{fffd}".into(),
        )));
        assert_eq!(error.code, ErrorCode::ConfigError);
        assert_eq!(error.code.exit_code(), 3);
        assert!(error.source.is_some());
    }
}
