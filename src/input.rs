// ABOUTME: Loads serialized calculator inputs from JSON files on disk
// ABOUTME: Maps IO and JSON failures onto the unified AppError model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_intelligence::CalculatorInput;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a [`CalculatorInput`] from a JSON file
///
/// Missing fields take their defaults, so `{}` is a valid input.
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and an
/// invalid-format error if it is not a valid calculator input
pub fn load_input(path: impl AsRef<Path>) -> AppResult<CalculatorInput> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read input file {}", path.display())).with_source(e)
    })?;

    parse_input(&contents).map_err(|e| {
        let message = format!("Invalid calculator input in {}: {}", path.display(), e.message);
        AppError::new(e.code, message)
            .with_field("input")
            .with_details(e.context.details)
    })
}

/// Parse a [`CalculatorInput`] from a JSON string
///
/// # Errors
///
/// Returns an invalid-format error if `json` is not a valid calculator input
pub fn parse_input(json: &str) -> AppResult<CalculatorInput> {
    let input: CalculatorInput = serde_json::from_str(json)?;
    debug!(
        method = %input.method,
        diet_type = %input.diet_type,
        has_patient = input.patient.is_some(),
        "Parsed calculator input"
    );
    Ok(input)
}
