// ABOUTME: Biometric warning thresholds for the calculator's validation layer
// ABOUTME: Plausible ranges for weight, height, age and body composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Plausibility thresholds used to raise biometric warnings
///
/// These never change a calculation; they only decide which inputs the
/// diet editor flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Lowest plausible body weight (kg)
    pub min_weight_kg: f64,
    /// Highest plausible body weight (kg)
    pub max_weight_kg: f64,
    /// Lowest plausible height (m)
    pub min_height_m: f64,
    /// Highest plausible height (m)
    pub max_height_m: f64,
    /// Highest plausible age (years)
    pub max_age_years: u32,
    /// Lowest plausible body fat (%)
    pub min_body_fat_percent: f64,
    /// Highest plausible body fat (%)
    pub max_body_fat_percent: f64,
    /// Age below which adult-derived equations are flagged (years)
    pub adult_min_age_years: u32,
    /// Allowed deviation of a custom split total from 100 (%)
    pub macro_total_tolerance_percent: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_weight_kg: 20.0,
            max_weight_kg: 300.0,
            min_height_m: 1.0,
            max_height_m: 2.5,
            max_age_years: 120,
            min_body_fat_percent: 2.0,
            max_body_fat_percent: 70.0,
            adult_min_age_years: 18,
            macro_total_tolerance_percent: 0.5,
        }
    }
}

impl ValidationConfig {
    /// Check that every range is well-formed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a minimum is not below its maximum and
    /// `ConfigError::ValueOutOfRange` if a bound is non-positive or outside 0-100 %
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_weight_kg <= 0.0 || self.min_height_m <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum weight and height must be positive",
            ));
        }
        if self.min_weight_kg >= self.max_weight_kg {
            return Err(ConfigError::InvalidRange(
                "min_weight_kg must be < max_weight_kg",
            ));
        }
        if self.min_height_m >= self.max_height_m {
            return Err(ConfigError::InvalidRange(
                "min_height_m must be < max_height_m",
            ));
        }
        if self.max_age_years == 0 || self.adult_min_age_years >= self.max_age_years {
            return Err(ConfigError::InvalidRange(
                "adult_min_age_years must be < max_age_years",
            ));
        }
        if self.min_body_fat_percent < 0.0 || self.max_body_fat_percent > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Body fat thresholds must be within 0-100%",
            ));
        }
        if self.min_body_fat_percent >= self.max_body_fat_percent {
            return Err(ConfigError::InvalidRange(
                "min_body_fat_percent must be < max_body_fat_percent",
            ));
        }
        if !(0.0..=10.0).contains(&self.macro_total_tolerance_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro total tolerance must be between 0 and 10%",
            ));
        }
        Ok(())
    }
}
