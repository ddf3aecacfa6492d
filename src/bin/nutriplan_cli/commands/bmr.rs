// ABOUTME: `bmr` command - evaluates one equation for the supplied biometrics
// ABOUTME: Prints the raw and rounded basal rate without activity or diet adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::BmrArgs;
use nutriplan::config::CalculatorConfig;
use nutriplan_core::models::PatientBiometrics;
use nutriplan_intelligence::energy_expenditure::round_kcal;
use nutriplan_intelligence::{calculate, BmrInputs};

/// Evaluate and print a single equation
pub fn run(config: &CalculatorConfig, args: BmrArgs) {
    let method = args.method.unwrap_or(config.defaults.method);
    let activity = args.activity.unwrap_or(config.defaults.activity_level);
    let patient = args.patient.apply_to(PatientBiometrics::default_profile());

    let inputs = BmrInputs::from_biometrics(&patient, activity.factor());
    let kcal = calculate(method, &inputs);

    println!("{} ({})", method.label(), method.as_str());
    println!("   Raw:     {kcal:.2} kcal/day");
    println!("   Rounded: {} kcal/day", round_kcal(kcal));
    if method.includes_activity() {
        println!("   Includes activity factor {:.3}", activity.factor());
    }
    if method.uses_lean_mass() {
        println!("   Lean mass: {:.1} kg", inputs.lean_mass_kg());
    }
}
