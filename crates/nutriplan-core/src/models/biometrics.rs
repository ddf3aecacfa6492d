// ABOUTME: Patient biometric inputs for metabolic-rate estimation
// ABOUTME: Sex, PatientBiometrics and the fallback profile used when no patient is selected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{body_composition, defaults};
use serde::{Deserialize, Serialize};

/// Biological sex used by the sex-specific equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    /// Male coefficients
    #[default]
    #[serde(rename = "M", alias = "male", alias = "m")]
    Male,
    /// Female coefficients
    #[serde(rename = "F", alias = "female", alias = "f")]
    Female,
}

impl Sex {
    /// Short code as stored by the dashboard (`M` / `F`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Parse from the short code or the full word, case-insensitive
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "masculino" => Some(Self::Male),
            "f" | "female" | "feminino" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Biometric inputs for one calculation
///
/// The calculator never stores these; the host supplies them per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PatientBiometrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body fat percentage (0-100), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Muscle mass in kilograms, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

impl PatientBiometrics {
    /// Create biometrics without body composition data
    #[must_use]
    pub fn new(weight_kg: f64, height_m: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_m,
            age_years,
            sex,
            body_fat_percent: None,
            muscle_mass_kg: None,
        }
    }

    /// Standard profile substituted when no patient is selected (70 kg, 1.70 m, 30 y, male)
    #[must_use]
    pub fn default_profile() -> Self {
        Self::new(
            defaults::PROFILE_WEIGHT_KG,
            defaults::PROFILE_HEIGHT_M,
            defaults::PROFILE_AGE_YEARS,
            Sex::Male,
        )
    }

    /// Set the measured body fat percentage
    #[must_use]
    pub fn with_body_fat_percent(mut self, percent: f64) -> Self {
        self.body_fat_percent = Some(percent);
        self
    }

    /// Set the measured muscle mass
    #[must_use]
    pub fn with_muscle_mass_kg(mut self, kg: f64) -> Self {
        self.muscle_mass_kg = Some(kg);
        self
    }

    /// Height in centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_m * 100.0
    }

    /// Whether any body composition measurement is available
    #[must_use]
    pub const fn has_body_composition(&self) -> bool {
        self.body_fat_percent.is_some() || self.muscle_mass_kg.is_some()
    }

    /// Lean mass used by the composition-aware equations
    ///
    /// Muscle mass wins when present, then body fat, then 75% of body weight.
    #[must_use]
    pub fn lean_mass_kg(&self) -> f64 {
        lean_mass(self.weight_kg, self.body_fat_percent, self.muscle_mass_kg)
    }
}

impl Default for PatientBiometrics {
    fn default() -> Self {
        Self::default_profile()
    }
}

/// Lean mass from weight and optional composition measurements
#[must_use]
pub fn lean_mass(weight_kg: f64, body_fat_percent: Option<f64>, muscle_mass_kg: Option<f64>) -> f64 {
    match (muscle_mass_kg, body_fat_percent) {
        (Some(muscle), _) => muscle,
        (None, Some(fat)) => weight_kg * (1.0 - fat / 100.0),
        (None, None) => weight_kg * body_composition::DEFAULT_LEAN_MASS_FRACTION,
    }
}
