// ABOUTME: Core types and constants for the NutriPlan diet-target calculator
// ABOUTME: Foundation crate with error handling, biometric and diet models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriPlan Core
//!
//! Foundation crate providing shared types and constants for the NutriPlan
//! metabolic and macro target calculator. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, fallback profile values, service names
//! - **models**: Patient biometrics, activity levels, diet types, calculation results
//! - **intelligence**: Calculation method identifiers (`CalculationMethod`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (biometrics, activity levels, diet types, targets)
pub mod models;

/// Intelligence types (`CalculationMethod`)
pub mod intelligence;
