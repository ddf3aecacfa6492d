// ABOUTME: Core data models for the NutriPlan calculator
// ABOUTME: Re-exports biometrics, activity levels, diet types and calculation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain value types exchanged between the host application (the diet
//! editor) and the calculator. Every model is serializable so the host can
//! persist or transmit it as JSON without a translation layer.
//!
//! - `PatientBiometrics`: weight, height, age, sex and optional body composition
//! - `ActivityLevel`: the five fixed activity multipliers
//! - `DietType` / `MacroSplit` / `CustomTargets`: diet-plan configuration
//! - `CalculationResult` / `MacroTargets`: resolver output

mod activity;
mod biometrics;
mod diet;
mod targets;

pub use activity::ActivityLevel;
pub use biometrics::{lean_mass, PatientBiometrics, Sex};
pub use diet::{CustomTargets, DietType, MacroSplit};
pub use targets::{CalculationResult, MacroTargets};
