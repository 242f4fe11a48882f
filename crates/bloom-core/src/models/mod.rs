// ABOUTME: Core data models for cycle-aware meal planning
// ABOUTME: Re-exports preference, cycle, meal, and grocery types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

/// Menstrual cycle phase
pub mod cycle;
/// Grocery list items
pub mod grocery;
/// Food preferences and meal suggestions
pub mod nutrition;

pub use cycle::CyclePhase;
pub use grocery::{GroceryCategory, GroceryItem};
pub use nutrition::{FoodCategory, FoodPreferences, MealSuggestion, MealType};
