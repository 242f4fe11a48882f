// ABOUTME: Domain service layer combining the preference store with the suggestion engine
// ABOUTME: Provides interface-agnostic operations reusable by the CLI and embedding callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Domain service layer
//!
//! Services own the I/O around the pure engine: reading stored preferences,
//! validating stored values, and logging outcomes.

/// Meal planning over stored preferences
pub mod meal_planning;

pub use meal_planning::MealPlanningService;
