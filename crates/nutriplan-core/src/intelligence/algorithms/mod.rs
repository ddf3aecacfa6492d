// ABOUTME: Intelligence algorithm identifiers re-exported from nutriplan-core
// ABOUTME: Contains CalculationMethod for metabolic-rate estimation

/// Metabolic-rate calculation methods
pub mod bmr_method;

pub use bmr_method::CalculationMethod;
