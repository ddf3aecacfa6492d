// ABOUTME: Command modules for nutriplan-cli
// ABOUTME: Target resolution, single-equation evaluation and reference table listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod bmr;
pub mod reference;
pub mod targets;
