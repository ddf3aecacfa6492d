// ABOUTME: Reference listings for nutriplan-cli
// ABOUTME: Prints calculation methods, diet-type macro splits and activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, DietType};
use nutriplan_intelligence::diet_profiles::macro_profile;

/// List calculation methods with their citations
pub fn methods() {
    println!("Calculation methods");
    println!("{}", "=".repeat(80));
    for method in CalculationMethod::ALL {
        let mut notes = Vec::new();
        if method.includes_activity() {
            notes.push("includes activity");
        }
        if method.uses_lean_mass() {
            notes.push("uses lean mass");
        }

        println!("{:<22} {}", method.as_str(), method.label());
        println!("{:<22} {}", "", method.citation());
        if !notes.is_empty() {
            println!("{:<22} [{}]", "", notes.join(", "));
        }
    }
}

/// List diet types and their percentage splits
pub fn diets() {
    println!(
        "{:<15} {:<22} {:>6} {:>8} {:>5}",
        "Diet", "Label", "Carbs", "Protein", "Fats"
    );
    println!("{}", "=".repeat(60));
    for diet_type in DietType::ALL {
        match macro_profile(diet_type) {
            Some(split) => println!(
                "{:<15} {:<22} {:>5}% {:>7}% {:>4}%",
                diet_type.as_str(),
                diet_type.label(),
                split.carbs_percent,
                split.protein_percent,
                split.fats_percent
            ),
            None => println!(
                "{:<15} {:<22} {:>22}",
                diet_type.as_str(),
                diet_type.label(),
                "set per plan"
            ),
        }
    }
}

/// List activity levels and multipliers
pub fn activity_levels() {
    println!("{:<20} {:<22} {:>6}", "Level", "Label", "Factor");
    println!("{}", "=".repeat(50));
    for level in ActivityLevel::ALL {
        println!(
            "{:<20} {:<22} {:>6.3}",
            level.as_str(),
            level.label(),
            level.factor()
        );
    }
}
