// ABOUTME: `targets` command - resolves energy and macro targets for a diet plan
// ABOUTME: Merges an optional input file with command-line flags, then validates and resolves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use crate::TargetsArgs;
use nutriplan::config::CalculatorConfig;
use nutriplan::errors::AppResult;
use nutriplan::input::load_input;
use nutriplan_core::models::{CustomTargets, MacroSplit, PatientBiometrics};
use nutriplan_intelligence::validation::{validate_for_method, validate_macro_split};
use nutriplan_intelligence::{resolve_targets, CalculatorInput, InputChange};
use tracing::{info, warn};

/// Resolve and print targets
pub fn run(config: &CalculatorConfig, args: TargetsArgs) -> AppResult<()> {
    let base = match &args.input {
        Some(path) => {
            info!("Loading calculator input from {}", path.display());
            load_input(path)?
        }
        None => config.defaults.to_input(),
    };

    let input = flag_changes(&base, &args)
        .into_iter()
        .fold(base, CalculatorInput::apply);

    if input.patient.is_none() {
        warn!("No patient biometrics supplied, using the standard 70 kg / 1.70 m / 30 y profile");
    }
    if !input.diet_type.is_custom()
        && (!input.custom_targets.is_empty() || has_split_flags(&args))
    {
        warn!(
            diet_type = %input.diet_type,
            "Custom overrides only apply to the custom diet type and were ignored"
        );
    }

    let mut warnings = validate_for_method(
        &input.effective_patient(),
        input.method,
        &config.validation,
    );
    if input.diet_type.is_custom() {
        warnings.extend(validate_macro_split(
            &input.custom_macros,
            &config.validation,
        ));
    }
    for warning in &warnings {
        warn!("{warning}");
    }

    let result = resolve_targets(&input);

    if args.json {
        display::print_targets_json(&input, &result, &warnings)
    } else {
        display::display_targets(&input, &result, &warnings);
        Ok(())
    }
}

const fn has_split_flags(args: &TargetsArgs) -> bool {
    args.carbs.is_some() || args.protein.is_some() || args.fats.is_some()
}

/// Input changes requested by flags, applied in order over `base`
fn flag_changes(base: &CalculatorInput, args: &TargetsArgs) -> Vec<InputChange> {
    let mut changes = Vec::new();

    if !args.patient.is_empty() {
        let patient = base
            .patient
            .unwrap_or_else(PatientBiometrics::default_profile);
        changes.push(InputChange::Patient(Some(args.patient.apply_to(patient))));
    }
    if let Some(method) = args.method {
        changes.push(InputChange::Method(method));
    }
    if let Some(diet_type) = args.diet {
        changes.push(InputChange::DietType(diet_type));
    }
    if let Some(level) = args.activity {
        changes.push(InputChange::ActivityLevel(level));
    }
    if let Some(delta) = args.goal {
        changes.push(InputChange::GoalAdjustment(delta));
    }

    if args.custom_bmr.is_some() || args.custom_tee.is_some() || args.custom_calories.is_some() {
        let current = base.custom_targets;
        changes.push(InputChange::CustomTargets(CustomTargets {
            bmr: args.custom_bmr.or(current.bmr),
            total_energy_expenditure: args.custom_tee.or(current.total_energy_expenditure),
            calories: args.custom_calories.or(current.calories),
        }));
    }

    if has_split_flags(args) {
        let current = base.custom_macros;
        changes.push(InputChange::CustomMacros(MacroSplit::new(
            args.carbs.unwrap_or(current.carbs_percent),
            args.protein.unwrap_or(current.protein_percent),
            args.fats.unwrap_or(current.fats_percent),
        )));
    }

    changes
}
