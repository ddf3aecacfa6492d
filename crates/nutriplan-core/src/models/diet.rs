// ABOUTME: Diet-plan configuration models for macro target resolution
// ABOUTME: DietType identifiers, MacroSplit percentages and manual CustomTargets overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diet type selected in the diet editor
///
/// Canonical identifiers are the ones the dashboard persists; English names
/// are accepted as aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Balanced maintenance diet
    #[default]
    #[serde(alias = "normocaloric")]
    Normocalorica,
    /// Reduced carbohydrate
    #[serde(alias = "low-carb")]
    LowCarb,
    /// Increased carbohydrate
    #[serde(alias = "high-carb")]
    HighCarb,
    /// Ketogenic
    #[serde(alias = "ketogenic")]
    Cetogenica,
    /// Mediterranean
    #[serde(alias = "mediterranean")]
    Mediterranea,
    /// Vegetarian
    #[serde(alias = "vegetarian")]
    Vegetariana,
    /// Vegan
    #[serde(alias = "vegan")]
    Vegana,
    /// Gluten-free
    #[serde(alias = "gluten_free", alias = "gluten-free")]
    SemGluten,
    /// High-protein
    #[serde(alias = "high_protein", alias = "high-protein")]
    Hiperproteica,
    /// Nutritionist-defined split and optional manual targets
    #[serde(alias = "personalizada")]
    Custom,
}

impl DietType {
    /// All ten diet types
    pub const ALL: [Self; 10] = [
        Self::Normocalorica,
        Self::LowCarb,
        Self::HighCarb,
        Self::Cetogenica,
        Self::Mediterranea,
        Self::Vegetariana,
        Self::Vegana,
        Self::SemGluten,
        Self::Hiperproteica,
        Self::Custom,
    ];

    /// Canonical identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normocalorica => "normocalorica",
            Self::LowCarb => "low_carb",
            Self::HighCarb => "high_carb",
            Self::Cetogenica => "cetogenica",
            Self::Mediterranea => "mediterranea",
            Self::Vegetariana => "vegetariana",
            Self::Vegana => "vegana",
            Self::SemGluten => "sem_gluten",
            Self::Hiperproteica => "hiperproteica",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normocalorica => "Normocaloric",
            Self::LowCarb => "Low carb",
            Self::HighCarb => "High carb",
            Self::Cetogenica => "Ketogenic",
            Self::Mediterranea => "Mediterranean",
            Self::Vegetariana => "Vegetarian",
            Self::Vegana => "Vegan",
            Self::SemGluten => "Gluten-free",
            Self::Hiperproteica => "High protein",
            Self::Custom => "Custom",
        }
    }

    /// Whether manual overrides and the custom split apply
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Parse a canonical identifier or English alias, case-insensitive
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "normocalorica" | "normocaloric" => Some(Self::Normocalorica),
            "low_carb" | "lowcarb" => Some(Self::LowCarb),
            "high_carb" | "highcarb" => Some(Self::HighCarb),
            "cetogenica" | "ketogenic" | "keto" => Some(Self::Cetogenica),
            "mediterranea" | "mediterranean" => Some(Self::Mediterranea),
            "vegetariana" | "vegetarian" => Some(Self::Vegetariana),
            "vegana" | "vegan" => Some(Self::Vegana),
            "sem_gluten" | "gluten_free" => Some(Self::SemGluten),
            "hiperproteica" | "high_protein" => Some(Self::Hiperproteica),
            "custom" | "personalizada" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage allocation of calories across carbohydrate, protein and fat
///
/// Built-in diet types always total 100. A custom split is stored as the
/// nutritionist typed it; nothing here enforces the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Carbohydrate share of calories (%)
    pub carbs_percent: f64,
    /// Protein share of calories (%)
    pub protein_percent: f64,
    /// Fat share of calories (%)
    pub fats_percent: f64,
}

impl MacroSplit {
    /// Create a split from carbohydrate, protein and fat percentages
    #[must_use]
    pub fn new(carbs_percent: f64, protein_percent: f64, fats_percent: f64) -> Self {
        Self {
            carbs_percent,
            protein_percent,
            fats_percent,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        self.carbs_percent + self.protein_percent + self.fats_percent
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        let (carbs, protein, fats) = defaults::CUSTOM_SPLIT_PERCENT;
        Self::new(carbs, protein, fats)
    }
}

/// Manual overrides honored only for [`DietType::Custom`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomTargets {
    /// Replaces the computed basal rate (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr: Option<i32>,
    /// Replaces the computed total energy expenditure (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_energy_expenditure: Option<i32>,
    /// Replaces the target calories outright (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
}

impl CustomTargets {
    /// Whether any override is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bmr.is_none() && self.total_energy_expenditure.is_none() && self.calories.is_none()
    }
}
