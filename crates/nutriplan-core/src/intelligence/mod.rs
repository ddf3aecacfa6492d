// ABOUTME: Intelligence module re-exports for calculation method identifiers
// ABOUTME: Contains CalculationMethod used by models, the calculator and the CLI

/// Metabolic-rate calculation methods
pub mod algorithms;

pub use algorithms::CalculationMethod;
