// ABOUTME: Criterion benchmarks for the metabolic and macro target calculator
// ABOUTME: Measures single equations, full target resolution and recalculation bursts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the target calculator.
//!
//! The calculator runs on every keystroke in the diet editor, so these
//! track per-call cost of each equation and of a full resolution.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::models::{ActivityLevel, DietType, PatientBiometrics, Sex};
use nutriplan::{
    calculate, resolve_targets, BmrInputs, CalculatorInput, InputChange, RecalculationTrigger,
};
use nutriplan_core::intelligence::CalculationMethod;

/// Goal deltas swept by the recalculation benchmark (kcal/day)
const GOAL_SWEEP: [i32; 8] = [-750, -500, -250, 0, 250, 500, 750, 1000];

fn bench_patient() -> PatientBiometrics {
    PatientBiometrics::new(82.5, 1.78, 42, Sex::Female).with_body_fat_percent(31.0)
}

fn bench_bmr_formulas(c: &mut Criterion) {
    let inputs = BmrInputs::from_biometrics(&bench_patient(), ActivityLevel::VeryActive.factor());
    let mut group = c.benchmark_group("bmr_formulas");

    for method in CalculationMethod::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(method.as_str()),
            &method,
            |b, &method| b.iter(|| calculate(black_box(method), black_box(&inputs))),
        );
    }

    group.finish();
}

fn bench_resolve_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_targets");
    group.throughput(Throughput::Elements(DietType::ALL.len() as u64));

    group.bench_function("all_diet_types", |b| {
        b.iter(|| {
            for diet_type in DietType::ALL {
                let input = CalculatorInput {
                    patient: Some(bench_patient()),
                    method: CalculationMethod::KatchMcArdle1996,
                    diet_type,
                    ..CalculatorInput::default()
                };
                black_box(resolve_targets(black_box(&input)));
            }
        });
    });

    group.bench_function("standard_profile", |b| {
        let input = CalculatorInput::default();
        b.iter(|| resolve_targets(black_box(&input)));
    });

    group.finish();
}

fn bench_recalculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recalculation");
    group.throughput(Throughput::Elements(GOAL_SWEEP.len() as u64));

    group.bench_function("goal_sweep", |b| {
        let mut trigger = RecalculationTrigger::new(CalculatorInput {
            patient: Some(bench_patient()),
            ..CalculatorInput::default()
        });
        trigger.subscribe(|result| {
            black_box(result.target_calories);
        });

        b.iter(|| {
            for delta in GOAL_SWEEP {
                black_box(trigger.apply(InputChange::GoalAdjustment(delta)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bmr_formulas,
    bench_resolve_targets,
    bench_recalculation
);
criterion_main!(benches);
