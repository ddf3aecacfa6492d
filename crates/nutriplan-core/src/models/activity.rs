// ABOUTME: Activity level multipliers applied to basal metabolic rate
// ABOUTME: Five fixed factors (1.2 to 1.9) with labels, parsing and serde as the numeric factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when matching a numeric factor to a level
const FACTOR_TOLERANCE: f64 = 1e-6;

/// Activity level for total energy expenditure
///
/// Factors follow `McArdle`, Katch & Katch (2010), Exercise Physiology.
/// Serialized as the numeric factor, which is how the diet editor stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "ActivityLevelRepr", into = "f64")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise): 1.2
    Sedentary,
    /// Lightly active (1-3 days/week): 1.375
    LightlyActive,
    /// Moderately active (3-5 days/week): 1.55
    #[default]
    ModeratelyActive,
    /// Very active (6-7 days/week): 1.725
    VeryActive,
    /// Extra active (hard training 2x/day): 1.9
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in ascending factor order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Multiplier applied to the basal rate
    #[must_use]
    pub fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Label shown in the activity selector
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::LightlyActive => "Lightly active (1-3 days/week)",
            Self::ModeratelyActive => "Moderately active (3-5 days/week)",
            Self::VeryActive => "Very active (6-7 days/week)",
            Self::ExtraActive => "Extra active (hard training 2x/day)",
        }
    }

    /// `snake_case` identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Match a numeric factor to a level
    #[must_use]
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < FACTOR_TOLERANCE)
    }

    /// Parse a `snake_case` name or a numeric factor such as `"1.55"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly_active" | "light" => Some(Self::LightlyActive),
            "moderately_active" | "moderate" => Some(Self::ModeratelyActive),
            "very_active" => Some(Self::VeryActive),
            "extra_active" | "extremely_active" => Some(Self::ExtraActive),
            other => other.parse::<f64>().ok().and_then(Self::from_factor),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.factor())
    }
}

impl From<ActivityLevel> for f64 {
    fn from(level: ActivityLevel) -> Self {
        level.factor()
    }
}

/// Wire representation: either the numeric factor or the level name
#[derive(Deserialize)]
#[serde(untagged)]
enum ActivityLevelRepr {
    Factor(f64),
    Name(String),
}

impl TryFrom<ActivityLevelRepr> for ActivityLevel {
    type Error = String;

    fn try_from(repr: ActivityLevelRepr) -> Result<Self, Self::Error> {
        match repr {
            ActivityLevelRepr::Factor(factor) => Self::from_factor(factor)
                .ok_or_else(|| format!("{factor} is not a supported activity factor")),
            ActivityLevelRepr::Name(name) => {
                Self::parse(&name).ok_or_else(|| format!("unknown activity level '{name}'"))
            }
        }
    }
}
