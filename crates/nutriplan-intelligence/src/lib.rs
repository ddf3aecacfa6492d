// ABOUTME: Metabolic and macro target calculator for NutriPlan diet plans
// ABOUTME: Pure, stateless calculation engine consumed by the diet editor and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriPlan Intelligence
//!
//! Derives energy and macronutrient targets for a diet plan from patient
//! biometrics and plan configuration.
//!
//! ## Pipeline
//!
//! 1. [`bmr_formulas`]: named equations mapping biometrics to a basal rate
//! 2. [`energy_expenditure`]: activity scaling and the caloric goal delta
//! 3. [`diet_profiles`]: static diet-type macro splits
//! 4. [`target_resolver`]: combines the above, applies manual overrides, converts to grams
//! 5. [`recalculation`]: re-runs the resolver synchronously on every input change
//!
//! Every function in the pipeline is total: out-of-range biometrics produce
//! odd numbers, never errors. [`validation`] reports such inputs as warnings
//! without touching the calculation.

/// Basal/resting metabolic rate equations
pub mod bmr_formulas;

/// Calculator configuration (validation thresholds, host defaults)
pub mod config;

/// Diet-type macro percentage table
pub mod diet_profiles;

/// Activity scaling and goal adjustment
pub mod energy_expenditure;

/// Input-change reducer and synchronous recalculation trigger
pub mod recalculation;

/// Target resolver combining equations, profiles and overrides
pub mod target_resolver;

/// Biometric and macro-split warnings
pub mod validation;

pub use bmr_formulas::{calculate, BmrInputs};
pub use recalculation::{InputChange, RecalculationTrigger};
pub use target_resolver::{resolve_targets, CalculatorInput};
pub use validation::{validate, BiometricWarning};
