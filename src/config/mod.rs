// ABOUTME: Calculator configuration loaded from NUTRIPLAN_* environment variables over defaults
// ABOUTME: Aggregates validation thresholds and host defaults behind a validated global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator configuration
//!
//! Environment-only: every setting has a built-in default and can be
//! overridden with a `NUTRIPLAN_*` variable. There is no configuration file.
//!
//! | Variable | Field |
//! |---|---|
//! | `NUTRIPLAN_DEFAULT_METHOD` | `defaults.method` |
//! | `NUTRIPLAN_DEFAULT_DIET_TYPE` | `defaults.diet_type` |
//! | `NUTRIPLAN_DEFAULT_ACTIVITY_LEVEL` | `defaults.activity_level` (name or factor) |
//! | `NUTRIPLAN_DEFAULT_GOAL_ADJUSTMENT` | `defaults.goal_adjustment` |
//! | `NUTRIPLAN_MIN_WEIGHT_KG` / `NUTRIPLAN_MAX_WEIGHT_KG` | weight warning range |
//! | `NUTRIPLAN_MIN_HEIGHT_M` / `NUTRIPLAN_MAX_HEIGHT_M` | height warning range |
//! | `NUTRIPLAN_MAX_AGE_YEARS` | age warning bound |
//! | `NUTRIPLAN_ADULT_MIN_AGE_YEARS` | minimum age for adult-only equations |
//! | `NUTRIPLAN_MIN_BODY_FAT_PERCENT` / `NUTRIPLAN_MAX_BODY_FAT_PERCENT` | body fat range |
//! | `NUTRIPLAN_MACRO_TOTAL_TOLERANCE_PERCENT` | custom split tolerance |

use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, DietType};
use nutriplan_intelligence::config::{CalculatorDefaultsConfig, ConfigError, ValidationConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Root configuration for calculator hosts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculatorConfig {
    /// Thresholds for biometric and macro-split warnings
    pub validation: ValidationConfig,
    /// Inputs preselected when the host leaves a field unset
    pub defaults: CalculatorDefaultsConfig,
}

impl CalculatorConfig {
    /// Process-wide configuration, loaded once
    ///
    /// Falls back to the built-in defaults if the environment is invalid.
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;

        debug!(
            method = %config.defaults.method,
            diet_type = %config.defaults.diet_type,
            activity_level = %config.defaults.activity_level,
            goal_adjustment = config.defaults.goal_adjustment,
            "Calculator configuration loaded"
        );
        Ok(config)
    }

    /// Validate both sections
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by either section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()?;
        self.defaults.validate()
    }

    /// Value of `env_var_name`, `None` when unset
    ///
    /// A variable that is set but not valid UTF-8 is an error rather than
    /// being silently treated as absent.
    fn read_env(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => {
                warn!("{env_var_name} is not valid UTF-8");
                Err(e.into())
            }
        }
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_choice<T>(
        env_var_name: &str,
        target: &mut T,
        parse: fn(&str) -> Option<T>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env(env_var_name)? {
            *target = parse(&val)
                .ok_or_else(|| ConfigError::Parse(format!("Unknown {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let defaults = &mut self.defaults;
        Self::apply_env_choice(
            "NUTRIPLAN_DEFAULT_METHOD",
            &mut defaults.method,
            CalculationMethod::parse,
        )?;
        Self::apply_env_choice(
            "NUTRIPLAN_DEFAULT_DIET_TYPE",
            &mut defaults.diet_type,
            DietType::parse,
        )?;
        Self::apply_env_choice(
            "NUTRIPLAN_DEFAULT_ACTIVITY_LEVEL",
            &mut defaults.activity_level,
            ActivityLevel::parse,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_GOAL_ADJUSTMENT",
            &mut defaults.goal_adjustment,
        )?;

        let validation = &mut self.validation;
        Self::apply_env_var("NUTRIPLAN_MIN_WEIGHT_KG", &mut validation.min_weight_kg)?;
        Self::apply_env_var("NUTRIPLAN_MAX_WEIGHT_KG", &mut validation.max_weight_kg)?;
        Self::apply_env_var("NUTRIPLAN_MIN_HEIGHT_M", &mut validation.min_height_m)?;
        Self::apply_env_var("NUTRIPLAN_MAX_HEIGHT_M", &mut validation.max_height_m)?;
        Self::apply_env_var("NUTRIPLAN_MAX_AGE_YEARS", &mut validation.max_age_years)?;
        Self::apply_env_var(
            "NUTRIPLAN_ADULT_MIN_AGE_YEARS",
            &mut validation.adult_min_age_years,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MIN_BODY_FAT_PERCENT",
            &mut validation.min_body_fat_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MAX_BODY_FAT_PERCENT",
            &mut validation.max_body_fat_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MACRO_TOTAL_TOLERANCE_PERCENT",
            &mut validation.macro_total_tolerance_percent,
        )?;

        Ok(self)
    }
}
