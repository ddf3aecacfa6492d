// ABOUTME: Target resolver combining BMR equations, activity scaling, diet profiles and overrides
// ABOUTME: Produces the CalculationResult the diet editor renders for a CalculatorInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Resolver
//!
//! Resolution order:
//!
//! 1. basal rate from the selected equation, rounded to whole kcal
//! 2. total energy expenditure from the rounded basal rate
//! 3. custom `bmr` override (custom diets only), applied after step 2
//! 4. custom `total_energy_expenditure` override (custom diets only)
//! 5. target calories = TEE + goal delta, or the custom `calories` override
//! 6. macro split lookup
//! 7. grams = calories × share / energy density, each rounded independently
//!
//! Step 3 does not feed back into steps 2 and 5: overriding the basal rate
//! changes only the displayed basal rate. To move the calorie target the
//! nutritionist overrides TEE or calories as well.

use crate::bmr_formulas::{calculate, BmrInputs};
use crate::diet_profiles::resolve_macro_split;
use crate::energy_expenditure::{round_kcal, target_calories, total_energy_expenditure};
use nutriplan_core::constants::energy;
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{
    ActivityLevel, CalculationResult, CustomTargets, DietType, MacroSplit, MacroTargets,
    PatientBiometrics,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete, immutable set of calculator inputs
///
/// The host owns this value and replaces it on every edit; see
/// [`crate::recalculation`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorInput {
    /// Selected patient; `None` resolves against the standard profile
    pub patient: Option<PatientBiometrics>,
    /// Equation used for the basal rate
    pub method: CalculationMethod,
    /// Diet type driving the macro split
    pub diet_type: DietType,
    /// Activity multiplier for basal equations and EER coefficient
    pub activity_level: ActivityLevel,
    /// Signed caloric delta (kcal/day) added after activity scaling
    pub goal_adjustment: i32,
    /// Manual overrides, honored for custom diets only
    pub custom_targets: CustomTargets,
    /// Split used for custom diets
    pub custom_macros: MacroSplit,
}

impl CalculatorInput {
    /// Biometrics in effect, falling back to the standard profile
    #[must_use]
    pub fn effective_patient(&self) -> PatientBiometrics {
        self.patient.unwrap_or_else(PatientBiometrics::default_profile)
    }

    /// Overrides in effect; empty unless the diet type is custom
    #[must_use]
    pub fn effective_overrides(&self) -> CustomTargets {
        if self.diet_type.is_custom() {
            self.custom_targets
        } else {
            CustomTargets::default()
        }
    }

    /// Macro split in effect for the selected diet type
    #[must_use]
    pub fn effective_split(&self) -> MacroSplit {
        resolve_macro_split(self.diet_type, &self.custom_macros)
    }
}

/// Resolve energy and macro targets for `input`
///
/// Total over its input domain: never fails, never panics.
#[must_use]
pub fn resolve_targets(input: &CalculatorInput) -> CalculationResult {
    let patient = input.effective_patient();
    let overrides = input.effective_overrides();
    let bmr_inputs = BmrInputs::from_biometrics(&patient, input.activity_level.factor());

    let computed_bmr = round_kcal(calculate(input.method, &bmr_inputs));
    let computed_tee = total_energy_expenditure(input.method, computed_bmr, input.activity_level);

    let bmr = overrides.bmr.unwrap_or(computed_bmr);
    let tee = overrides.total_energy_expenditure.unwrap_or(computed_tee);
    let calories = overrides
        .calories
        .unwrap_or_else(|| target_calories(tee, input.goal_adjustment));

    let split = input.effective_split();
    let target_macros = macro_targets(calories, &split);

    debug!(
        method = %input.method,
        diet_type = %input.diet_type,
        activity_factor = input.activity_level.factor(),
        goal_adjustment = input.goal_adjustment,
        default_patient = input.patient.is_none(),
        overrides_applied = !overrides.is_empty(),
        bmr,
        tee,
        calories,
        "Resolved diet targets"
    );

    CalculationResult {
        bmr,
        total_energy_expenditure: tee,
        target_calories: calories,
        target_macros,
    }
}

/// Gram targets for `calories` under `split`
#[must_use]
pub fn macro_targets(calories: i32, split: &MacroSplit) -> MacroTargets {
    MacroTargets {
        carbs_grams: grams_from_calories(
            calories,
            split.carbs_percent,
            energy::KCAL_PER_GRAM_CARBS,
        ),
        protein_grams: grams_from_calories(
            calories,
            split.protein_percent,
            energy::KCAL_PER_GRAM_PROTEIN,
        ),
        fats_grams: grams_from_calories(calories, split.fats_percent, energy::KCAL_PER_GRAM_FAT),
        fiber_grams: energy::DAILY_FIBER_GRAMS,
    }
}

/// `round(calories × percent / 100 / kcal_per_gram)`
#[must_use]
pub fn grams_from_calories(calories: i32, percent: f64, kcal_per_gram: f64) -> i32 {
    round_kcal(f64::from(calories) * percent / 100.0 / kcal_per_gram)
}
