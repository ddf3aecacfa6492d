// ABOUTME: Calculation output models for diet-plan energy and macro targets
// ABOUTME: CalculationResult and MacroTargets with derived helpers for the diet editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy;
use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroTargets {
    /// Carbohydrate target (g/day)
    pub carbs_grams: i32,
    /// Protein target (g/day)
    pub protein_grams: i32,
    /// Fat target (g/day)
    pub fats_grams: i32,
    /// Fiber target (g/day), always the fixed daily value
    pub fiber_grams: i32,
}

impl MacroTargets {
    /// Energy represented by the gram targets using Atwater factors
    #[must_use]
    pub fn energy_kcal(&self) -> f64 {
        f64::from(self.carbs_grams) * energy::KCAL_PER_GRAM_CARBS
            + f64::from(self.protein_grams) * energy::KCAL_PER_GRAM_PROTEIN
            + f64::from(self.fats_grams) * energy::KCAL_PER_GRAM_FAT
    }
}

/// Resolver output rendered by the diet editor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CalculationResult {
    /// Basal (or EER) rate after overrides (kcal/day)
    pub bmr: i32,
    /// Total energy expenditure after overrides (kcal/day)
    pub total_energy_expenditure: i32,
    /// Daily calorie target (kcal/day)
    pub target_calories: i32,
    /// Gram targets derived from `target_calories`
    pub target_macros: MacroTargets,
}

impl CalculationResult {
    /// Protein target per kilogram of body weight (g/kg)
    ///
    /// Returns `0.0` for a non-positive weight.
    #[must_use]
    pub fn protein_per_kg(&self, weight_kg: f64) -> f64 {
        if weight_kg <= 0.0 {
            return 0.0;
        }
        f64::from(self.target_macros.protein_grams) / weight_kg
    }
}
