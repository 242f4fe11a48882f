// ABOUTME: Meal suggestion engine for cycle-aware nutrition planning
// ABOUTME: Phase guidance lookup, meal construction rules, and grocery list derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

#![deny(unsafe_code)]

//! # Bloom Intelligence
//!
//! Pure, synchronous functions that turn food preferences and a cycle phase into
//! meal suggestions and a grocery list. Nothing here performs I/O; every call reads
//! only its own input, so callers may invoke the engine concurrently.
//!
//! ```rust
//! use bloom_core::models::{CyclePhase, FoodCategory, FoodPreferences};
//! use bloom_intelligence::{generate_meal_suggestions, MealPlanRequest};
//!
//! let preferences = FoodPreferences::default()
//!     .with(FoodCategory::Proteins, ["Chicken"])
//!     .with(FoodCategory::Vegetables, ["Broccoli"]);
//! let plan = generate_meal_suggestions(&MealPlanRequest::new(preferences, CyclePhase::Luteal));
//! assert_eq!(plan.meals.len(), 1);
//! assert_eq!(plan.total_calories, 450);
//! ```

/// Engine configuration (grocery limits, calorie defaults)
pub mod config;
/// Grocery list derivation
pub mod grocery;
/// Meal construction rules
pub mod meal_planner;
/// Static guidance per cycle phase
pub mod phase_guidance;

pub use config::{ConfigError, GroceryListConfig, MealPlanningConfig};
pub use grocery::{generate_grocery_list, generate_grocery_list_with_config};
pub use meal_planner::{
    generate_meal_suggestions, generate_meal_suggestions_for_phase, MealPlanRequest,
    MealPlanResult,
};
pub use phase_guidance::{phase_info, PhaseInfo};
