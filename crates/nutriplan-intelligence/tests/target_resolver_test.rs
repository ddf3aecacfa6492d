// ABOUTME: Integration tests for diet target resolution across equations, diets and overrides
// ABOUTME: Covers the worked reference case, activity scaling, custom overrides and rounding bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Target resolver tests
//!
//! Exercises the full pipeline through the public API:
//! - the 70 kg / 1.70 m / 30 y reference case under Mifflin-St Jeor
//! - EER methods are not scaled a second time by activity
//! - custom overrides only for custom diets
//! - macro grams reconvert to within rounding error of the calorie target
//! - missing patient falls back to the standard profile

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_core::constants::energy;
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, CustomTargets, DietType, MacroSplit};
use nutriplan_intelligence::diet_profiles::macro_profile;
use nutriplan_intelligence::{resolve_targets, CalculatorInput};

mod common;

fn input_for(method: CalculationMethod, diet_type: DietType) -> CalculatorInput {
    CalculatorInput {
        patient: Some(common::reference_male()),
        method,
        diet_type,
        activity_level: ActivityLevel::ModeratelyActive,
        ..CalculatorInput::default()
    }
}

// ============================================================================
// REFERENCE CASE
// ============================================================================

#[test]
fn test_reference_case_mifflin_normocalorica() {
    common::init_test_logging();
    let result = resolve_targets(&input_for(
        CalculationMethod::Mifflin1990,
        DietType::Normocalorica,
    ));

    assert_eq!(result.bmr, 1618);
    assert_eq!(result.total_energy_expenditure, 2508);
    assert_eq!(result.target_calories, 2508);
    assert_eq!(result.target_macros.carbs_grams, 314);
    assert_eq!(result.target_macros.protein_grams, 125);
    assert_eq!(result.target_macros.fats_grams, 84);
    assert_eq!(result.target_macros.fiber_grams, 25);
}

#[test]
fn test_basal_rate_rounded_before_activity_scaling() {
    // 1617.5 × 1.55 = 2507.125 rounds to 2507, 1618 × 1.55 = 2507.9 rounds to 2508
    let result = resolve_targets(&input_for(
        CalculationMethod::Mifflin1990,
        DietType::Normocalorica,
    ));
    assert_eq!(result.total_energy_expenditure, 2508);
}

#[test]
fn test_missing_patient_uses_standard_profile() {
    common::init_test_logging();
    let with_default = CalculatorInput {
        patient: None,
        ..input_for(CalculationMethod::Mifflin1990, DietType::Normocalorica)
    };
    let explicit = input_for(CalculationMethod::Mifflin1990, DietType::Normocalorica);

    assert_eq!(resolve_targets(&with_default), resolve_targets(&explicit));
}

#[test]
fn test_resolver_is_deterministic() {
    let input = input_for(CalculationMethod::KatchMcArdle1996, DietType::Mediterranea);
    let first = resolve_targets(&input);
    for _ in 0..10 {
        assert_eq!(resolve_targets(&input), first);
    }
}

// ============================================================================
// ACTIVITY AND GOAL
// ============================================================================

#[test]
fn test_eer_methods_not_rescaled_by_activity() {
    for method in [CalculationMethod::EerIom2005, CalculationMethod::EerIom2023] {
        let result = resolve_targets(&input_for(method, DietType::Normocalorica));
        assert_eq!(result.bmr, 3524, "{method}");
        assert_eq!(result.total_energy_expenditure, result.bmr, "{method}");
    }
}

#[test]
fn test_eer_responds_to_activity_level() {
    let sedentary = CalculatorInput {
        activity_level: ActivityLevel::Sedentary,
        ..input_for(CalculationMethod::EerIom2005, DietType::Normocalorica)
    };
    let active = CalculatorInput {
        activity_level: ActivityLevel::ExtraActive,
        ..sedentary
    };
    assert!(resolve_targets(&active).bmr > resolve_targets(&sedentary).bmr);
}

#[test]
fn test_goal_adjustment_shifts_target_only() {
    let maintenance = input_for(CalculationMethod::Mifflin1990, DietType::Normocalorica);
    let deficit = CalculatorInput {
        goal_adjustment: -500,
        ..maintenance
    };

    let base = resolve_targets(&maintenance);
    let cut = resolve_targets(&deficit);
    assert_eq!(cut.total_energy_expenditure, base.total_energy_expenditure);
    assert_eq!(cut.target_calories, 2008);
}

#[test]
fn test_every_activity_level_scales_basal_methods() {
    for level in ActivityLevel::ALL {
        let input = CalculatorInput {
            activity_level: level,
            ..input_for(CalculationMethod::Mifflin1990, DietType::Normocalorica)
        };
        let result = resolve_targets(&input);
        let expected = (1618.0 * level.factor()).round() as i32;
        assert_eq!(result.total_energy_expenditure, expected, "{level}");
    }
}

// ============================================================================
// DIET PROFILES AND MACROS
// ============================================================================

#[test]
fn test_builtin_profiles_sum_to_one_hundred() {
    for diet_type in DietType::ALL {
        if let Some(split) = macro_profile(diet_type) {
            assert!(
                (split.total_percent() - 100.0).abs() < f64::EPSILON,
                "{diet_type}"
            );
        }
    }
}

#[test]
fn test_macro_energy_within_rounding_bound() {
    // Each macro rounds by at most 0.5 g: 0.5×4 + 0.5×4 + 0.5×9 = 8.5 kcal
    let bound = 0.5 * (energy::KCAL_PER_GRAM_CARBS
        + energy::KCAL_PER_GRAM_PROTEIN
        + energy::KCAL_PER_GRAM_FAT);

    for method in CalculationMethod::ALL {
        for diet_type in DietType::ALL {
            let result = resolve_targets(&input_for(method, diet_type));
            let drift =
                (result.target_macros.energy_kcal() - f64::from(result.target_calories)).abs();
            assert!(drift <= bound, "{method} / {diet_type}: {drift}");
        }
    }
}

#[test]
fn test_fiber_is_fixed() {
    for diet_type in DietType::ALL {
        let result = resolve_targets(&input_for(CalculationMethod::Mifflin1990, diet_type));
        assert_eq!(result.target_macros.fiber_grams, 25);
    }
}

#[test]
fn test_ketogenic_split() {
    let result = resolve_targets(&input_for(
        CalculationMethod::Mifflin1990,
        DietType::Cetogenica,
    ));
    // 2508 × 5% / 4, 20% / 4, 75% / 9
    assert_eq!(result.target_macros.carbs_grams, 31);
    assert_eq!(result.target_macros.protein_grams, 125);
    assert_eq!(result.target_macros.fats_grams, 209);
}

// ============================================================================
// CUSTOM OVERRIDES
// ============================================================================

#[test]
fn test_custom_calories_override_target() {
    let input = CalculatorInput {
        custom_targets: CustomTargets {
            calories: Some(2000),
            ..CustomTargets::default()
        },
        custom_macros: MacroSplit::new(40.0, 30.0, 30.0),
        ..input_for(CalculationMethod::Mifflin1990, DietType::Custom)
    };
    let result = resolve_targets(&input);

    assert_eq!(result.bmr, 1618);
    assert_eq!(result.total_energy_expenditure, 2508);
    assert_eq!(result.target_calories, 2000);
    assert_eq!(result.target_macros.carbs_grams, 200);
    assert_eq!(result.target_macros.protein_grams, 150);
    assert_eq!(result.target_macros.fats_grams, 67);
}

#[test]
fn test_negative_calorie_override_rounds_halves_up() {
    let input = CalculatorInput {
        custom_targets: CustomTargets {
            calories: Some(-10),
            ..CustomTargets::default()
        },
        custom_macros: MacroSplit::new(50.0, 20.0, 30.0),
        ..input_for(CalculationMethod::Mifflin1990, DietType::Custom)
    };
    let macros = resolve_targets(&input).target_macros;

    // -1.25 g, -0.5 g and -0.33 g
    assert_eq!(macros.carbs_grams, -1);
    assert_eq!(macros.protein_grams, 0);
    assert_eq!(macros.fats_grams, 0);
}

#[test]
fn test_overrides_ignored_for_builtin_diets() {
    let overrides = CustomTargets {
        bmr: Some(1000),
        total_energy_expenditure: Some(1500),
        calories: Some(1200),
    };
    let input = CalculatorInput {
        custom_targets: overrides,
        ..input_for(CalculationMethod::Mifflin1990, DietType::LowCarb)
    };
    let result = resolve_targets(&input);

    assert_eq!(result.bmr, 1618);
    assert_eq!(result.target_calories, 2508);
}

#[test]
fn test_bmr_override_does_not_cascade() {
    let input = CalculatorInput {
        custom_targets: CustomTargets {
            bmr: Some(1400),
            ..CustomTargets::default()
        },
        ..input_for(CalculationMethod::Mifflin1990, DietType::Custom)
    };
    let result = resolve_targets(&input);

    assert_eq!(result.bmr, 1400);
    assert_eq!(result.total_energy_expenditure, 2508);
    assert_eq!(result.target_calories, 2508);
}

#[test]
fn test_tee_override_feeds_goal_adjustment() {
    let input = CalculatorInput {
        custom_targets: CustomTargets {
            total_energy_expenditure: Some(2200),
            ..CustomTargets::default()
        },
        goal_adjustment: 300,
        ..input_for(CalculationMethod::Mifflin1990, DietType::Custom)
    };
    let result = resolve_targets(&input);

    assert_eq!(result.total_energy_expenditure, 2200);
    assert_eq!(result.target_calories, 2500);
}

// ============================================================================
// SERIALIZED INPUTS
// ============================================================================

#[test]
fn test_input_accepts_legacy_method_names_and_numeric_activity() {
    let json = r#"{
        "patient": {"weight_kg": 70, "height_m": 1.70, "age_years": 30, "sex": "M"},
        "method": "mifflin",
        "diet_type": "normocalorica",
        "activity_level": 1.55
    }"#;
    let input: CalculatorInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.method, CalculationMethod::Mifflin1990);
    assert_eq!(input.activity_level, ActivityLevel::ModeratelyActive);
    assert_eq!(resolve_targets(&input).target_calories, 2508);
}

#[test]
fn test_empty_input_resolves_with_defaults() {
    let input: CalculatorInput = serde_json::from_str("{}").unwrap();
    assert_eq!(input, CalculatorInput::default());
    assert_eq!(resolve_targets(&input).bmr, 1618);
}
