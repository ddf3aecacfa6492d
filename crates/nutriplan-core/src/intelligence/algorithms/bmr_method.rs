// ABOUTME: Metabolic-rate calculation method identifiers with legacy alias resolution
// ABOUTME: Eleven canonical equations, lossy parsing, labels and citations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equation used to estimate basal or total energy expenditure
///
/// Serialized as the canonical identifier. Deserialization is lossy: legacy
/// aliases resolve to their canonical method and unknown identifiers fall
/// back to [`CalculationMethod::Mifflin1990`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalculationMethod {
    /// Harris & Benedict (1919), original coefficients
    HarrisBenedict1919,
    /// Roza & Shizgal (1984) revision of Harris-Benedict
    HarrisBenedict1984,
    /// Mifflin-St Jeor (1990)
    #[default]
    Mifflin1990,
    /// Henry & Rees (1991), age-banded, weight only
    HenryRees1991,
    /// Tinsley et al. (2018), body-weight equation
    Tinsley2018Weight,
    /// Katch-McArdle (1996), lean-mass equation
    KatchMcArdle1996,
    /// Cunningham (1980), lean-mass equation
    Cunningham1980,
    /// Tinsley et al. (2018), lean-mass equation
    Tinsley2018Lbm,
    /// FAO/WHO/UNU (2004) Schofield equations, age-banded
    FaoWho2004,
    /// IOM (2005) estimated energy requirement, includes activity
    EerIom2005,
    /// IOM/NASEM (2023) estimated energy requirement, includes activity
    EerIom2023,
}

impl CalculationMethod {
    /// All canonical methods in selector order
    pub const ALL: [Self; 11] = [
        Self::HarrisBenedict1919,
        Self::HarrisBenedict1984,
        Self::Mifflin1990,
        Self::HenryRees1991,
        Self::Tinsley2018Weight,
        Self::KatchMcArdle1996,
        Self::Cunningham1980,
        Self::Tinsley2018Lbm,
        Self::FaoWho2004,
        Self::EerIom2005,
        Self::EerIom2023,
    ];

    /// Canonical identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HarrisBenedict1919 => "harris_benedict_1919",
            Self::HarrisBenedict1984 => "harris_benedict_1984",
            Self::Mifflin1990 => "mifflin_1990",
            Self::HenryRees1991 => "henry_rees_1991",
            Self::Tinsley2018Weight => "tinsley_2018_weight",
            Self::KatchMcArdle1996 => "katch_mcardle_1996",
            Self::Cunningham1980 => "cunningham_1980",
            Self::Tinsley2018Lbm => "tinsley_2018_lbm",
            Self::FaoWho2004 => "fao_who_2004",
            Self::EerIom2005 => "eer_iom_2005",
            Self::EerIom2023 => "eer_iom_2023",
        }
    }

    /// Parse a canonical identifier or legacy alias
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "harris_benedict_1919" => Some(Self::HarrisBenedict1919),
            "harris_benedict_1984" | "harris_benedict" => Some(Self::HarrisBenedict1984),
            "mifflin_1990" | "mifflin" => Some(Self::Mifflin1990),
            "henry_rees_1991" => Some(Self::HenryRees1991),
            "tinsley_2018_weight" => Some(Self::Tinsley2018Weight),
            "katch_mcardle_1996" => Some(Self::KatchMcArdle1996),
            "cunningham_1980" | "cunningham" => Some(Self::Cunningham1980),
            "tinsley_2018_lbm" => Some(Self::Tinsley2018Lbm),
            "fao_who_2004" => Some(Self::FaoWho2004),
            "eer_iom_2005" => Some(Self::EerIom2005),
            "eer_iom_2023" => Some(Self::EerIom2023),
            _ => None,
        }
    }

    /// Parse, falling back to Mifflin-St Jeor for unrecognized identifiers
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Whether the equation already yields total expenditure (EER/IOM family)
    #[must_use]
    pub const fn includes_activity(&self) -> bool {
        matches!(self, Self::EerIom2005 | Self::EerIom2023)
    }

    /// Whether the equation is driven by lean mass instead of body weight
    #[must_use]
    pub const fn uses_lean_mass(&self) -> bool {
        matches!(
            self,
            Self::KatchMcArdle1996 | Self::Cunningham1980 | Self::Tinsley2018Lbm
        )
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HarrisBenedict1919 => "Harris-Benedict (1919)",
            Self::HarrisBenedict1984 => "Harris-Benedict revised (1984)",
            Self::Mifflin1990 => "Mifflin-St Jeor (1990)",
            Self::HenryRees1991 => "Henry & Rees (1991)",
            Self::Tinsley2018Weight => "Tinsley, body weight (2018)",
            Self::KatchMcArdle1996 => "Katch-McArdle (1996)",
            Self::Cunningham1980 => "Cunningham (1980)",
            Self::Tinsley2018Lbm => "Tinsley, lean mass (2018)",
            Self::FaoWho2004 => "FAO/WHO/UNU (2004)",
            Self::EerIom2005 => "EER - IOM (2005)",
            Self::EerIom2023 => "EER - IOM (2023)",
        }
    }

    /// Primary reference for the equation
    #[must_use]
    pub const fn citation(&self) -> &'static str {
        match self {
            Self::HarrisBenedict1919 => {
                "Harris JA, Benedict FG. A Biometric Study of Basal Metabolism in Man. Carnegie Institution, 1919"
            }
            Self::HarrisBenedict1984 => {
                "Roza AM, Shizgal HM. Am J Clin Nutr 1984;40(1):168-182"
            }
            Self::Mifflin1990 => "Mifflin MD et al. Am J Clin Nutr 1990;51(2):241-247",
            Self::HenryRees1991 => "Henry CJK, Rees DG. Eur J Clin Nutr 1991;45(4):177-185",
            Self::Tinsley2018Weight | Self::Tinsley2018Lbm => {
                "Tinsley GM et al. Int J Sport Nutr Exerc Metab 2019;29(4):397-404"
            }
            Self::KatchMcArdle1996 => {
                "McArdle WD, Katch FI, Katch VL. Exercise Physiology, 4th ed., 1996"
            }
            Self::Cunningham1980 => "Cunningham JJ. Am J Clin Nutr 1980;33(11):2372-2374",
            Self::FaoWho2004 => {
                "FAO/WHO/UNU. Human Energy Requirements. Food and Nutrition Technical Report 1, 2004"
            }
            Self::EerIom2005 => {
                "Institute of Medicine. Dietary Reference Intakes for Energy, 2005"
            }
            Self::EerIom2023 => {
                "National Academies. Dietary Reference Intakes for Energy, 2023"
            }
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CalculationMethod {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl From<CalculationMethod> for String {
    fn from(method: CalculationMethod) -> Self {
        method.as_str().to_owned()
    }
}
