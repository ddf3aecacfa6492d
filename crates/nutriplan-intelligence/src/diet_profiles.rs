// ABOUTME: Static diet-type macro percentage table for target resolution
// ABOUTME: Maps the nine built-in diet types to carbohydrate/protein/fat splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet-Type Macro Profile Table
//!
//! Every built-in split totals 100%. [`DietType::Custom`] has no table entry;
//! its split comes from the nutritionist's own values.
//!
//! # References
//!
//! - Institute of Medicine (2005) Acceptable Macronutrient Distribution Ranges
//! - Estruch R. et al. (2018) PREDIMED. DOI: 10.1056/NEJMoa1800389
//! - Kossoff E.H. et al. (2018) Ketogenic diet therapies. DOI: 10.1002/epi4.12225

use nutriplan_core::models::{DietType, MacroSplit};

/// Built-in split for `diet_type`, `None` for [`DietType::Custom`]
#[must_use]
pub fn macro_profile(diet_type: DietType) -> Option<MacroSplit> {
    let (carbs, protein, fats) = match diet_type {
        DietType::Normocalorica | DietType::SemGluten => (50.0, 20.0, 30.0),
        DietType::LowCarb => (25.0, 30.0, 45.0),
        DietType::HighCarb => (60.0, 15.0, 25.0),
        DietType::Cetogenica => (5.0, 20.0, 75.0),
        DietType::Mediterranea => (45.0, 20.0, 35.0),
        DietType::Vegetariana => (55.0, 15.0, 30.0),
        DietType::Vegana => (60.0, 15.0, 25.0),
        DietType::Hiperproteica => (40.0, 35.0, 25.0),
        DietType::Custom => return None,
    };
    Some(MacroSplit::new(carbs, protein, fats))
}

/// Split in effect for `diet_type`, taking `custom_split` for custom diets
#[must_use]
pub fn resolve_macro_split(diet_type: DietType, custom_split: &MacroSplit) -> MacroSplit {
    macro_profile(diet_type).unwrap_or(*custom_split)
}
