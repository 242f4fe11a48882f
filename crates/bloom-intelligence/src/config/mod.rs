// ABOUTME: Configuration module for bloom-intelligence crate
// ABOUTME: Re-exports meal planning configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

/// Configuration validation errors
pub mod error;
/// Meal planning and grocery list configuration
pub mod meal_planning;

pub use error::ConfigError;
pub use meal_planning::{GroceryListConfig, GrocerySectionConfig, MealPlanningConfig};
