// ABOUTME: Main library entry point for the NutriPlan target calculator host layer
// ABOUTME: Wires environment configuration, structured logging and JSON input loading around the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriPlan
//!
//! Host-side plumbing for the NutriPlan metabolic and macro target
//! calculator. The calculation itself lives in `nutriplan-intelligence`;
//! this crate adds what a process needs around it:
//!
//! - **Config**: `NUTRIPLAN_*` environment overrides over built-in defaults
//! - **Logging**: `tracing-subscriber` setup with JSON, pretty and compact output
//! - **Input**: loading a serialized [`CalculatorInput`] from disk
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::CalculatorConfig;
//! use nutriplan::errors::AppResult;
//! use nutriplan::input::load_input;
//! use nutriplan::resolve_targets;
//!
//! fn main() -> AppResult<()> {
//!     let config = CalculatorConfig::load()?;
//!     let input = load_input("plan.json")?;
//!     let result = resolve_targets(&input);
//!
//!     println!(
//!         "{} kcal/day (defaults: {})",
//!         result.target_calories, config.defaults.method
//!     );
//!     Ok(())
//! }
//! ```

/// Environment-driven calculator configuration
pub mod config;

/// Reading calculator inputs from JSON files
pub mod input;

/// Structured logging setup
pub mod logging;

pub use nutriplan_core::{constants, errors, models};
pub use nutriplan_intelligence::{
    calculate, resolve_targets, validate, BiometricWarning, BmrInputs, CalculatorInput,
    InputChange, RecalculationTrigger,
};
