// ABOUTME: NutriPlan CLI - command-line front end for the metabolic and macro target calculator
// ABOUTME: Resolves diet targets, evaluates single equations and lists the reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Targets for a 70 kg, 1.70 m, 30 year old man on a normocaloric diet
//! nutriplan-cli targets --weight 70 --height 1.70 --age 30 --sex M
//!
//! # Same patient, ketogenic diet with a 500 kcal deficit, JSON output
//! nutriplan-cli targets --weight 70 --height 1.70 --age 30 --diet cetogenica --goal=-500 --json
//!
//! # Targets from a saved calculator input, overriding the equation
//! nutriplan-cli targets --input plan.json --method katch_mcardle_1996
//!
//! # Raw basal rate for one equation
//! nutriplan-cli bmr --method henry_rees_1991 --weight 60 --height 1.65 --age 25 --sex F
//!
//! # Reference tables
//! nutriplan-cli methods
//! nutriplan-cli diets
//! nutriplan-cli activity-levels
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use nutriplan::config::CalculatorConfig;
use nutriplan::errors::AppResult;
use nutriplan::logging::LoggingConfig;
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{ActivityLevel, DietType, PatientBiometrics, Sex};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "NutriPlan metabolic and macro target calculator",
    long_about = "Computes basal metabolic rate, total energy expenditure, calorie target and macronutrient grams for a diet plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Resolve energy and macro targets for a patient and diet plan
    Targets(TargetsArgs),

    /// Evaluate a single BMR equation without activity or diet adjustments
    Bmr(BmrArgs),

    /// List the available calculation methods
    Methods,

    /// List diet types and their macro splits
    Diets,

    /// List activity levels and their multipliers
    ActivityLevels,
}

/// Patient biometrics shared by `targets` and `bmr`
#[derive(Args, Debug, Default)]
struct PatientArgs {
    /// Body weight (kg)
    #[arg(long)]
    weight: Option<f64>,

    /// Height (m)
    #[arg(long)]
    height: Option<f64>,

    /// Age (years)
    #[arg(long)]
    age: Option<u32>,

    /// Biological sex (M/F)
    #[arg(long, value_parser = parse_sex)]
    sex: Option<Sex>,

    /// Body fat (%)
    #[arg(long)]
    body_fat: Option<f64>,

    /// Muscle mass (kg)
    #[arg(long)]
    muscle_mass: Option<f64>,
}

impl PatientArgs {
    /// Whether no biometric flag was given
    const fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.height.is_none()
            && self.age.is_none()
            && self.sex.is_none()
            && self.body_fat.is_none()
            && self.muscle_mass.is_none()
    }

    /// `base` with every supplied flag written over it
    fn apply_to(&self, base: PatientBiometrics) -> PatientBiometrics {
        PatientBiometrics {
            weight_kg: self.weight.unwrap_or(base.weight_kg),
            height_m: self.height.unwrap_or(base.height_m),
            age_years: self.age.unwrap_or(base.age_years),
            sex: self.sex.unwrap_or(base.sex),
            body_fat_percent: self.body_fat.or(base.body_fat_percent),
            muscle_mass_kg: self.muscle_mass.or(base.muscle_mass_kg),
        }
    }
}

#[derive(Args, Debug)]
struct TargetsArgs {
    /// Calculator input JSON file; flags override its fields
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    #[command(flatten)]
    patient: PatientArgs,

    /// Calculation method (e.g. mifflin_1990, eer_iom_2005)
    #[arg(long, value_parser = parse_method)]
    method: Option<CalculationMethod>,

    /// Diet type (e.g. normocalorica, low_carb, custom)
    #[arg(long, value_parser = parse_diet)]
    diet: Option<DietType>,

    /// Activity level name or multiplier (e.g. moderately_active, 1.55)
    #[arg(long, value_parser = parse_activity)]
    activity: Option<ActivityLevel>,

    /// Caloric goal delta (kcal/day, negative for a deficit)
    #[arg(long, allow_hyphen_values = true)]
    goal: Option<i32>,

    /// Custom diet: basal rate override (kcal/day)
    #[arg(long)]
    custom_bmr: Option<i32>,

    /// Custom diet: total energy expenditure override (kcal/day)
    #[arg(long)]
    custom_tee: Option<i32>,

    /// Custom diet: calorie target override (kcal/day)
    #[arg(long)]
    custom_calories: Option<i32>,

    /// Custom diet: carbohydrate share (%)
    #[arg(long)]
    carbs: Option<f64>,

    /// Custom diet: protein share (%)
    #[arg(long)]
    protein: Option<f64>,

    /// Custom diet: fat share (%)
    #[arg(long)]
    fats: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BmrArgs {
    /// Calculation method
    #[arg(long, value_parser = parse_method)]
    method: Option<CalculationMethod>,

    #[command(flatten)]
    patient: PatientArgs,

    /// Activity level used by the EER equations
    #[arg(long, value_parser = parse_activity)]
    activity: Option<ActivityLevel>,
}

fn parse_method(s: &str) -> Result<CalculationMethod, String> {
    CalculationMethod::parse(s).ok_or_else(|| format!("unknown calculation method '{s}'"))
}

fn parse_diet(s: &str) -> Result<DietType, String> {
    DietType::parse(s).ok_or_else(|| format!("unknown diet type '{s}'"))
}

fn parse_activity(s: &str) -> Result<ActivityLevel, String> {
    ActivityLevel::parse(s).ok_or_else(|| format!("unknown activity level '{s}'"))
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    Sex::parse(s).ok_or_else(|| format!("unknown sex '{s}', expected M or F"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json_errors = matches!(&cli.command, Command::Targets(args) if args.json);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            let exit_code = ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1));
            if json_errors {
                helpers::display::print_error_json(e);
            } else {
                eprintln!("Error: {e}");
            }
            exit_code
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = CalculatorConfig::global();
    debug!(defaults = ?config.defaults, "Using calculator defaults");

    match command {
        Command::Targets(args) => commands::targets::run(config, args),
        Command::Bmr(args) => {
            commands::bmr::run(config, args);
            Ok(())
        }
        Command::Methods => {
            commands::reference::methods();
            Ok(())
        }
        Command::Diets => {
            commands::reference::diets();
            Ok(())
        }
        Command::ActivityLevels => {
            commands::reference::activity_levels();
            Ok(())
        }
    }
}
