// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Renders resolved targets as a text summary or a JSON report, and JSON failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::errors::{AppError, AppResult, ErrorResponse};
use nutriplan_core::models::CalculationResult;
use nutriplan_intelligence::{BiometricWarning, CalculatorInput};
use serde::Serialize;

/// Machine-readable `targets` output
#[derive(Serialize)]
struct TargetsReport<'a> {
    input: &'a CalculatorInput,
    result: &'a CalculationResult,
    protein_per_kg: f64,
    warnings: &'a [BiometricWarning],
}

/// Print resolved targets as pretty JSON
pub fn print_targets_json(
    input: &CalculatorInput,
    result: &CalculationResult,
    warnings: &[BiometricWarning],
) -> AppResult<()> {
    let report = TargetsReport {
        input,
        result,
        protein_per_kg: result.protein_per_kg(input.effective_patient().weight_kg),
        warnings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print a failure as an [`ErrorResponse`] so `--json` callers always get JSON on stdout
pub fn print_error_json(error: AppError) {
    let fallback = error.to_string();
    match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
        Ok(json) => println!("{json}"),
        Err(_) => eprintln!("Error: {fallback}"),
    }
}

/// Print resolved targets as a text summary
pub fn display_targets(
    input: &CalculatorInput,
    result: &CalculationResult,
    warnings: &[BiometricWarning],
) {
    let patient = input.effective_patient();
    let macros = &result.target_macros;

    println!("\nDiet Targets");
    println!("{}", "=".repeat(50));
    println!(
        "Patient:   {} kg, {} m, {} y, {}{}",
        patient.weight_kg,
        patient.height_m,
        patient.age_years,
        patient.sex.as_str(),
        if input.patient.is_none() {
            " (standard profile)"
        } else {
            ""
        }
    );
    println!("Method:    {}", input.method.label());
    println!("Diet:      {}", input.diet_type.label());
    println!(
        "Activity:  {} (x{})",
        input.activity_level.label(),
        input.activity_level.factor()
    );
    if input.goal_adjustment != 0 {
        println!("Goal:      {:+} kcal/day", input.goal_adjustment);
    }

    println!("\nEnergy");
    println!("   BMR:      {} kcal/day", result.bmr);
    println!("   TEE:      {} kcal/day", result.total_energy_expenditure);
    println!("   Target:   {} kcal/day", result.target_calories);

    println!("\nMacros");
    println!("   Carbs:    {} g", macros.carbs_grams);
    println!(
        "   Protein:  {} g ({:.2} g/kg)",
        macros.protein_grams,
        result.protein_per_kg(patient.weight_kg)
    );
    println!("   Fats:     {} g", macros.fats_grams);
    println!("   Fiber:    {} g", macros.fiber_grams);

    if !warnings.is_empty() {
        println!("\nWarnings");
        for warning in warnings {
            println!("   - {warning}");
        }
    }
}
