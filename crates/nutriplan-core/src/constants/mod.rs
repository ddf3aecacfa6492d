// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, body-composition fallbacks, default profile and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Values that a deployment may want to
//! tune (validation thresholds, CLI defaults) live in configuration instead.

/// Energy densities and fixed daily targets
///
/// References:
/// - Atwater general factors (USDA Handbook No. 74, 1973)
/// - Institute of Medicine (2005). Dietary Reference Intakes for Energy, Carbohydrate,
///   Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids
pub mod energy {
    /// Carbohydrate energy density (kcal/g)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Protein energy density (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Daily fiber target (g), independent of every other input
    pub const DAILY_FIBER_GRAMS: i32 = 25;
    /// Kilocalories per megajoule, as used by the MJ/day equations
    pub const KCAL_PER_MJ: f64 = 239.0;
}

/// Body composition fallbacks
pub mod body_composition {
    /// Lean mass fraction of body weight when neither body fat nor muscle mass is known
    pub const DEFAULT_LEAN_MASS_FRACTION: f64 = 0.75;
}

/// Fallback values used when the host has no patient selected
pub mod defaults {
    /// Fallback body weight (kg)
    pub const PROFILE_WEIGHT_KG: f64 = 70.0;
    /// Fallback height (m)
    pub const PROFILE_HEIGHT_M: f64 = 1.70;
    /// Fallback age (years)
    pub const PROFILE_AGE_YEARS: u32 = 30;
    /// Physical activity coefficient used by the EER equations when none is supplied
    pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;
    /// Custom macro split used until the nutritionist edits it (carbs/protein/fats %)
    pub const CUSTOM_SPLIT_PERCENT: (f64, f64, f64) = (50.0, 20.0, 30.0);
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Calculator service name
    pub const NUTRIPLAN: &str = "nutriplan";
    /// CLI binary name
    pub const NUTRIPLAN_CLI: &str = "nutriplan-cli";
}
