// ABOUTME: Biometric and macro-split warnings layered over the permissive calculator
// ABOUTME: Reports implausible inputs without changing any calculation result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input Validation
//!
//! The calculator accepts any numeric input. These functions let the host
//! surface questionable inputs next to the targets; they return warnings,
//! not errors, and the targets are computed regardless.

use crate::config::ValidationConfig;
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{MacroSplit, PatientBiometrics};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A questionable calculator input
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BiometricWarning {
    /// Weight is zero or negative
    #[error("weight {weight_kg} kg is not positive")]
    NonPositiveWeight {
        /// Supplied weight (kg)
        weight_kg: f64,
    },
    /// Weight outside the plausible range
    #[error("weight {weight_kg} kg is outside {min}-{max} kg")]
    WeightOutOfRange {
        /// Supplied weight (kg)
        weight_kg: f64,
        /// Lower bound (kg)
        min: f64,
        /// Upper bound (kg)
        max: f64,
    },
    /// Height is zero or negative
    #[error("height {height_m} m is not positive")]
    NonPositiveHeight {
        /// Supplied height (m)
        height_m: f64,
    },
    /// Height outside the plausible range
    #[error("height {height_m} m is outside {min}-{max} m")]
    HeightOutOfRange {
        /// Supplied height (m)
        height_m: f64,
        /// Lower bound (m)
        min: f64,
        /// Upper bound (m)
        max: f64,
    },
    /// Age above the plausible maximum
    #[error("age {age_years} is above {max}")]
    AgeOutOfRange {
        /// Supplied age (years)
        age_years: u32,
        /// Upper bound (years)
        max: u32,
    },
    /// Body fat outside the plausible range
    #[error("body fat {percent}% is outside {min}-{max}%")]
    BodyFatOutOfRange {
        /// Supplied body fat (%)
        percent: f64,
        /// Lower bound (%)
        min: f64,
        /// Upper bound (%)
        max: f64,
    },
    /// Muscle mass is not positive or not below body weight
    #[error("muscle mass {muscle_mass_kg} kg is implausible for weight {weight_kg} kg")]
    MuscleMassImplausible {
        /// Supplied muscle mass (kg)
        muscle_mass_kg: f64,
        /// Supplied weight (kg)
        weight_kg: f64,
    },
    /// Lean-mass equation selected without composition data
    #[error("{method} uses lean mass but neither body fat nor muscle mass is known; estimating 75% of weight")]
    LeanMassEstimated {
        /// Selected method
        method: CalculationMethod,
    },
    /// Adult-derived equation applied below its validated age
    #[error("{method} was derived for adults; age {age_years} is below {min_age}")]
    AgeOutsideFormulaRange {
        /// Selected method
        method: CalculationMethod,
        /// Supplied age (years)
        age_years: u32,
        /// Lowest validated age (years)
        min_age: u32,
    },
    /// Custom split does not add up to 100%
    #[error("macro split totals {total}% instead of 100%")]
    MacroSplitTotal {
        /// Sum of the three percentages
        total: f64,
    },
    /// Custom split contains a negative share
    #[error("macro split contains a negative share")]
    NegativeMacroShare,
}

/// Warnings for `biometrics` against `config` thresholds
#[must_use]
pub fn validate(biometrics: &PatientBiometrics, config: &ValidationConfig) -> Vec<BiometricWarning> {
    let mut warnings = Vec::new();

    if biometrics.weight_kg <= 0.0 {
        warnings.push(BiometricWarning::NonPositiveWeight {
            weight_kg: biometrics.weight_kg,
        });
    } else if !(config.min_weight_kg..=config.max_weight_kg).contains(&biometrics.weight_kg) {
        warnings.push(BiometricWarning::WeightOutOfRange {
            weight_kg: biometrics.weight_kg,
            min: config.min_weight_kg,
            max: config.max_weight_kg,
        });
    }

    if biometrics.height_m <= 0.0 {
        warnings.push(BiometricWarning::NonPositiveHeight {
            height_m: biometrics.height_m,
        });
    } else if !(config.min_height_m..=config.max_height_m).contains(&biometrics.height_m) {
        warnings.push(BiometricWarning::HeightOutOfRange {
            height_m: biometrics.height_m,
            min: config.min_height_m,
            max: config.max_height_m,
        });
    }

    if biometrics.age_years > config.max_age_years {
        warnings.push(BiometricWarning::AgeOutOfRange {
            age_years: biometrics.age_years,
            max: config.max_age_years,
        });
    }

    if let Some(percent) = biometrics.body_fat_percent {
        if !(config.min_body_fat_percent..=config.max_body_fat_percent).contains(&percent) {
            warnings.push(BiometricWarning::BodyFatOutOfRange {
                percent,
                min: config.min_body_fat_percent,
                max: config.max_body_fat_percent,
            });
        }
    }

    if let Some(muscle_mass_kg) = biometrics.muscle_mass_kg {
        if muscle_mass_kg <= 0.0 || muscle_mass_kg >= biometrics.weight_kg {
            warnings.push(BiometricWarning::MuscleMassImplausible {
                muscle_mass_kg,
                weight_kg: biometrics.weight_kg,
            });
        }
    }

    warnings
}

/// [`validate`] plus warnings specific to `method`
#[must_use]
pub fn validate_for_method(
    biometrics: &PatientBiometrics,
    method: CalculationMethod,
    config: &ValidationConfig,
) -> Vec<BiometricWarning> {
    let mut warnings = validate(biometrics, config);

    if method.uses_lean_mass() && !biometrics.has_body_composition() {
        warnings.push(BiometricWarning::LeanMassEstimated { method });
    }

    // Henry-Rees and FAO/WHO carry child age bands
    let adult_only = !matches!(
        method,
        CalculationMethod::HenryRees1991 | CalculationMethod::FaoWho2004
    );
    if adult_only && biometrics.age_years < config.adult_min_age_years {
        warnings.push(BiometricWarning::AgeOutsideFormulaRange {
            method,
            age_years: biometrics.age_years,
            min_age: config.adult_min_age_years,
        });
    }

    warnings
}

/// Warnings for a nutritionist-entered macro split
#[must_use]
pub fn validate_macro_split(split: &MacroSplit, config: &ValidationConfig) -> Vec<BiometricWarning> {
    let mut warnings = Vec::new();

    if split.carbs_percent < 0.0 || split.protein_percent < 0.0 || split.fats_percent < 0.0 {
        warnings.push(BiometricWarning::NegativeMacroShare);
    }

    let total = split.total_percent();
    if (total - 100.0).abs() > config.macro_total_tolerance_percent {
        warnings.push(BiometricWarning::MacroSplitTotal { total });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::Sex;

    #[test]
    fn test_default_profile_has_no_warnings() {
        let warnings = validate(
            &PatientBiometrics::default_profile(),
            &ValidationConfig::default(),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_non_positive_weight_reported_once() {
        let patient = PatientBiometrics::new(-5.0, 1.7, 30, Sex::Male);
        let warnings = validate(&patient, &ValidationConfig::default());
        assert_eq!(
            warnings,
            vec![BiometricWarning::NonPositiveWeight { weight_kg: -5.0 }]
        );
    }

    #[test]
    fn test_warning_messages_are_readable() {
        let warning = BiometricWarning::MacroSplitTotal { total: 95.0 };
        assert_eq!(warning.to_string(), "macro split totals 95% instead of 100%");
    }
}
