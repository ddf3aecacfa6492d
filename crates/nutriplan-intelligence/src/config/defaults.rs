// ABOUTME: Default calculator inputs used by hosts when a field is left unset
// ABOUTME: Method, diet type, activity level and goal adjustment defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::target_resolver::CalculatorInput;
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, DietType};
use serde::{Deserialize, Serialize};

/// Largest goal delta accepted as a default (kcal/day)
const MAX_DEFAULT_GOAL_ADJUSTMENT: u32 = 1500;

/// Defaults a host applies when starting a new diet plan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatorDefaultsConfig {
    /// Equation preselected in the editor
    pub method: CalculationMethod,
    /// Diet type preselected in the editor
    pub diet_type: DietType,
    /// Activity level preselected in the editor
    pub activity_level: ActivityLevel,
    /// Goal delta preselected in the editor (kcal/day)
    pub goal_adjustment: i32,
}

impl CalculatorDefaultsConfig {
    /// Fresh calculator input carrying these defaults and no patient
    #[must_use]
    pub fn to_input(&self) -> CalculatorInput {
        CalculatorInput {
            method: self.method,
            diet_type: self.diet_type,
            activity_level: self.activity_level,
            goal_adjustment: self.goal_adjustment,
            ..CalculatorInput::default()
        }
    }

    /// Check the goal delta is within a sane default range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if `|goal_adjustment|` exceeds 1500 kcal/day
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal_adjustment.unsigned_abs() > MAX_DEFAULT_GOAL_ADJUSTMENT {
            return Err(ConfigError::ValueOutOfRange(
                "Default goal adjustment must be within ±1500 kcal/day",
            ));
        }
        Ok(())
    }
}
