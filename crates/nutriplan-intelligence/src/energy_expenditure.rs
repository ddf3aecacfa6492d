// ABOUTME: Activity scaling and caloric goal adjustment for diet-plan energy targets
// ABOUTME: Turns a rounded basal rate into total energy expenditure and target calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity & Goal Adjustment
//!
//! `TEE = round(BMR × activity factor)` for basal equations, `TEE = BMR` for
//! the EER/IOM family which already accounts for activity. The caloric goal
//! delta is added after scaling.
//!
//! The basal value entering this module is already rounded to whole kcal;
//! the diet editor displays that rounded value and scales it, so scaling the
//! unrounded value would disagree with the numbers on screen by up to 1 kcal.

use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::ActivityLevel;

/// Round a kcal value to the nearest whole number, halves toward +∞
///
/// Matches the rounding the diet editor displays, so `-0.5` becomes `0`
/// and `-2.5` becomes `-2` (`f64::round` would give `-1` and `-3`).
#[must_use]
pub fn round_kcal(kcal: f64) -> i32 {
    (kcal + 0.5).floor() as i32
}

/// Total energy expenditure from a rounded basal rate
#[must_use]
pub fn total_energy_expenditure(
    method: CalculationMethod,
    bmr_kcal: i32,
    activity_level: ActivityLevel,
) -> i32 {
    if method.includes_activity() {
        return bmr_kcal;
    }
    round_kcal(f64::from(bmr_kcal) * activity_level.factor())
}

/// Daily calorie target after the goal delta (kcal/day, may be negative for deficits)
#[must_use]
pub const fn target_calories(total_energy_expenditure: i32, goal_adjustment: i32) -> i32 {
    total_energy_expenditure.saturating_add(goal_adjustment)
}
