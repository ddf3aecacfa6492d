// ABOUTME: Input-change reducer and synchronous recalculation trigger for the diet editor
// ABOUTME: Re-resolves targets on every input change and publishes them to listeners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reactive Recalculation
//!
//! The host owns a [`RecalculationTrigger`] (or just a [`CalculatorInput`])
//! and feeds it [`InputChange`]s. Recalculation happens inside
//! [`RecalculationTrigger::apply`], so callers never observe a result that
//! lags its inputs.

use crate::target_resolver::{resolve_targets, CalculatorInput};
use nutriplan_core::intelligence::CalculationMethod;
use nutriplan_core::models::{
    ActivityLevel, CalculationResult, CustomTargets, DietType, MacroSplit, PatientBiometrics,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One edit to the calculator inputs (last write wins per field)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum InputChange {
    /// Patient selected or cleared
    Patient(Option<PatientBiometrics>),
    /// Equation changed
    Method(CalculationMethod),
    /// Diet type changed
    DietType(DietType),
    /// Activity level changed
    ActivityLevel(ActivityLevel),
    /// Goal delta changed (kcal/day)
    GoalAdjustment(i32),
    /// Manual overrides changed
    CustomTargets(CustomTargets),
    /// Custom macro split changed
    CustomMacros(MacroSplit),
}

impl InputChange {
    /// Name of the input field this change touches
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Patient(_) => "patient",
            Self::Method(_) => "method",
            Self::DietType(_) => "diet_type",
            Self::ActivityLevel(_) => "activity_level",
            Self::GoalAdjustment(_) => "goal_adjustment",
            Self::CustomTargets(_) => "custom_targets",
            Self::CustomMacros(_) => "custom_macros",
        }
    }
}

impl CalculatorInput {
    /// Return a copy of `self` with `change` applied
    #[must_use]
    pub fn apply(mut self, change: InputChange) -> Self {
        match change {
            InputChange::Patient(patient) => self.patient = patient,
            InputChange::Method(method) => self.method = method,
            InputChange::DietType(diet_type) => self.diet_type = diet_type,
            InputChange::ActivityLevel(level) => self.activity_level = level,
            InputChange::GoalAdjustment(delta) => self.goal_adjustment = delta,
            InputChange::CustomTargets(targets) => self.custom_targets = targets,
            InputChange::CustomMacros(split) => self.custom_macros = split,
        }
        self
    }
}

type Listener = Box<dyn FnMut(&CalculationResult) + Send>;

/// Holds the current inputs and their settled targets
pub struct RecalculationTrigger {
    input: CalculatorInput,
    result: CalculationResult,
    revision: u64,
    listeners: Vec<Listener>,
}

impl RecalculationTrigger {
    /// Resolve `input` once and start tracking it
    #[must_use]
    pub fn new(input: CalculatorInput) -> Self {
        let result = resolve_targets(&input);
        Self {
            input,
            result,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Current inputs
    #[must_use]
    pub const fn input(&self) -> &CalculatorInput {
        &self.input
    }

    /// Targets for the current inputs
    #[must_use]
    pub const fn result(&self) -> &CalculationResult {
        &self.result
    }

    /// Number of recalculations since construction
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called with every published result
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CalculationResult) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `change`, recompute and publish the new targets
    pub fn apply(&mut self, change: InputChange) -> &CalculationResult {
        self.input = self.input.apply(change);
        self.recalculate(change.field())
    }

    /// Replace all inputs at once, recompute and publish
    pub fn replace(&mut self, input: CalculatorInput) -> &CalculationResult {
        self.input = input;
        self.recalculate("all")
    }

    fn recalculate(&mut self, field: &'static str) -> &CalculationResult {
        let previous = self.result;
        self.result = resolve_targets(&self.input);
        self.revision += 1;

        debug!(
            field,
            revision = self.revision,
            changed = previous != self.result,
            target_calories = self.result.target_calories,
            "Recalculated diet targets"
        );

        for listener in &mut self.listeners {
            listener(&self.result);
        }
        &self.result
    }
}

impl fmt::Debug for RecalculationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecalculationTrigger")
            .field("input", &self.input)
            .field("result", &self.result)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for RecalculationTrigger {
    fn default() -> Self {
        Self::new(CalculatorInput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::Sex;
    use std::sync::{Arc, Mutex};

    fn patient() -> PatientBiometrics {
        PatientBiometrics::new(70.0, 1.75, 30, Sex::Male)
    }

    #[test]
    fn test_apply_replaces_single_field() {
        let input = CalculatorInput::default();
        let next = input.apply(InputChange::GoalAdjustment(-500));
        assert_eq!(next.goal_adjustment, -500);
        assert_eq!(next.method, input.method);
        assert_eq!(input.goal_adjustment, 0);
    }

    #[test]
    fn test_last_write_wins() {
        let input = CalculatorInput::default()
            .apply(InputChange::DietType(DietType::LowCarb))
            .apply(InputChange::DietType(DietType::Cetogenica));
        assert_eq!(input.diet_type, DietType::Cetogenica);
    }

    #[test]
    fn test_trigger_result_tracks_inputs() {
        let mut trigger = RecalculationTrigger::new(CalculatorInput::default());
        assert_eq!(trigger.revision(), 0);

        let result = *trigger.apply(InputChange::Patient(Some(patient())));
        assert_eq!(result.bmr, 1649);
        assert_eq!(trigger.revision(), 1);
        assert_eq!(trigger.result(), &resolve_targets(trigger.input()));
    }

    #[test]
    fn test_listeners_receive_every_result() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut trigger = RecalculationTrigger::new(CalculatorInput {
            patient: Some(patient()),
            ..CalculatorInput::default()
        });
        trigger.subscribe(move |result| sink.lock().unwrap().push(result.target_calories));

        trigger.apply(InputChange::GoalAdjustment(-500));
        trigger.apply(InputChange::GoalAdjustment(0));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0] + 500, seen[1]);
    }

    #[test]
    fn test_input_change_field_names() {
        assert_eq!(InputChange::Patient(None).field(), "patient");
        assert_eq!(
            InputChange::CustomMacros(MacroSplit::default()).field(),
            "custom_macros"
        );
    }
}
