// ABOUTME: Basal and resting metabolic rate equations used by the diet editor
// ABOUTME: Harris-Benedict, Mifflin-St Jeor, Henry-Rees, Tinsley, Katch-McArdle, Cunningham, FAO/WHO, IOM EER
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMR Formula Library
//!
//! Stateless equations mapping biometric inputs to an energy estimate in
//! kcal/day. Results are returned unrounded. The EER/IOM equations return
//! total energy expenditure rather than a basal rate; see
//! [`CalculationMethod::includes_activity`].
//!
//! No input is range-checked. Negative or zero values yield nonsensical but
//! finite numbers; callers that want to warn about them use
//! [`crate::validation`].
//!
//! # Scientific References
//!
//! - Harris, J.A., & Benedict, F.G. (1919). A Biometric Study of Basal Metabolism in Man.
//! - Roza, A.M., & Shizgal, H.M. (1984). *Am J Clin Nutr*, 40(1), 168-182.
//! - Mifflin, M.D., et al. (1990). *Am J Clin Nutr*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Henry, C.J.K., & Rees, D.G. (1991). *Eur J Clin Nutr*, 45(4), 177-185.
//! - Cunningham, J.J. (1980). *Am J Clin Nutr*, 33(11), 2372-2374.
//! - Tinsley, G.M., et al. (2019). *Int J Sport Nutr Exerc Metab*, 29(4), 397-404.
//! - FAO/WHO/UNU (2004). Human Energy Requirements.
//! - Institute of Medicine (2005). Dietary Reference Intakes for Energy.

// Equations are written in their published coefficient order.
#![allow(clippy::suboptimal_flops)]

use nutriplan_core::constants::{defaults, energy};
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{lean_mass, PatientBiometrics, Sex};
use serde::{Deserialize, Serialize};

/// Inputs for a single equation evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmrInputs {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body fat percentage, if measured
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Muscle mass in kilograms, if measured
    #[serde(default)]
    pub muscle_mass_kg: Option<f64>,
    /// Physical activity coefficient for the EER equations
    #[serde(default)]
    pub activity_level: Option<f64>,
}

impl BmrInputs {
    /// Build inputs from patient biometrics and an activity factor
    #[must_use]
    pub fn from_biometrics(biometrics: &PatientBiometrics, activity_factor: f64) -> Self {
        Self {
            weight_kg: biometrics.weight_kg,
            height_cm: biometrics.height_cm(),
            age_years: biometrics.age_years,
            sex: biometrics.sex,
            body_fat_percent: biometrics.body_fat_percent,
            muscle_mass_kg: biometrics.muscle_mass_kg,
            activity_level: Some(activity_factor),
        }
    }

    /// Lean mass for the composition-aware equations
    #[must_use]
    pub fn lean_mass_kg(&self) -> f64 {
        lean_mass(self.weight_kg, self.body_fat_percent, self.muscle_mass_kg)
    }
}

/// Evaluate `method` for `inputs`, returning kcal/day (unrounded)
///
/// For the EER/IOM methods the result is total energy expenditure and
/// already includes `inputs.activity_level`.
#[must_use]
pub fn calculate(method: CalculationMethod, inputs: &BmrInputs) -> f64 {
    let w = inputs.weight_kg;
    let h = inputs.height_cm;
    let a = f64::from(inputs.age_years);
    let sex = inputs.sex;

    match method {
        CalculationMethod::HarrisBenedict1919 => harris_benedict_1919(w, h, a, sex),
        CalculationMethod::HarrisBenedict1984 => harris_benedict_1984(w, h, a, sex),
        CalculationMethod::Mifflin1990 => mifflin_st_jeor(w, h, a, sex),
        CalculationMethod::HenryRees1991 => henry_rees(w, inputs.age_years, sex),
        CalculationMethod::Tinsley2018Weight => 24.8 * w + 10.0,
        CalculationMethod::KatchMcArdle1996 => 370.0 + 21.6 * inputs.lean_mass_kg(),
        CalculationMethod::Cunningham1980 => 500.0 + 22.0 * inputs.lean_mass_kg(),
        CalculationMethod::Tinsley2018Lbm => 25.9 * inputs.lean_mass_kg() + 284.0,
        CalculationMethod::FaoWho2004 => schofield(w, inputs.age_years, sex),
        CalculationMethod::EerIom2005 | CalculationMethod::EerIom2023 => {
            let pa = inputs
                .activity_level
                .unwrap_or(defaults::DEFAULT_ACTIVITY_FACTOR);
            estimated_energy_requirement(w, h / 100.0, a, sex, pa)
        }
    }
}

fn harris_benedict_1919(w: f64, h: f64, a: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 66.47 + 13.75 * w + 5.003 * h - 6.755 * a,
        Sex::Female => 655.1 + 9.563 * w + 1.85 * h - 4.676 * a,
    }
}

fn harris_benedict_1984(w: f64, h: f64, a: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Sex::Female => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
    }
}

fn mifflin_st_jeor(w: f64, h: f64, a: f64, sex: Sex) -> f64 {
    let base = 10.0 * w + 6.25 * h - 5.0 * a;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Henry & Rees (1991), MJ/day converted to kcal/day
fn henry_rees(w: f64, age: u32, sex: Sex) -> f64 {
    let (slope, intercept) = match (sex, age) {
        (Sex::Male, 0..=29) => (0.059, 2.723),
        (Sex::Male, 30..=59) => (0.046, 3.160),
        (Sex::Male, _) => (0.049, 2.459),
        (Sex::Female, 0..=29) => (0.048, 2.562),
        (Sex::Female, 30..=59) => (0.048, 2.448),
        (Sex::Female, _) => (0.038, 2.755),
    };
    (slope * w + intercept) * energy::KCAL_PER_MJ
}

/// FAO/WHO/UNU (2004) Schofield equations, kcal/day
fn schofield(w: f64, age: u32, sex: Sex) -> f64 {
    let (slope, intercept) = match (sex, age) {
        (Sex::Male, 0..=2) => (59.512, -30.4),
        (Sex::Male, 3..=9) => (22.706, 504.3),
        (Sex::Male, 10..=17) => (17.686, 658.2),
        (Sex::Male, 18..=29) => (15.057, 692.2),
        (Sex::Male, 30..=59) => (11.472, 873.1),
        (Sex::Male, _) => (11.711, 587.7),
        (Sex::Female, 0..=2) => (58.317, -31.1),
        (Sex::Female, 3..=9) => (20.315, 485.9),
        (Sex::Female, 10..=17) => (13.384, 692.6),
        (Sex::Female, 18..=29) => (14.818, 486.6),
        (Sex::Female, 30..=59) => (8.126, 845.6),
        (Sex::Female, _) => (9.082, 658.5),
    };
    slope * w + intercept
}

/// IOM estimated energy requirement for adults; height in meters
fn estimated_energy_requirement(w: f64, h_m: f64, a: f64, sex: Sex, pa: f64) -> f64 {
    match sex {
        Sex::Male => 662.0 - 9.53 * a + pa * (15.91 * w + 539.6 * h_m),
        Sex::Female => 354.0 - 6.91 * a + pa * (9.36 * w + 726.0 * h_m),
    }
}
