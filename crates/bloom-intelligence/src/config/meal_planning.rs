// ABOUTME: Meal planning configuration for calorie defaults and grocery list derivation
// ABOUTME: Configures per-category truncation limits and quantity labels with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Meal Planning Configuration
//!
//! Defaults reproduce the fixed behavior of the suggestion engine exactly:
//! 3 proteins, 4 vegetables, 3 fruits and 2 grains on the grocery list.

use super::error::ConfigError;
use bloom_core::constants::{defaults, grocery};
use bloom_core::models::{FoodCategory, GroceryCategory};
use serde::{Deserialize, Serialize};

/// Meal Planning Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanningConfig {
    /// Calorie target used when neither the request nor the store carries one
    pub default_calorie_target: f64,
    /// Grocery list derivation settings
    pub grocery: GroceryListConfig,
}

impl Default for MealPlanningConfig {
    fn default() -> Self {
        Self {
            default_calorie_target: defaults::CALORIE_TARGET,
            grocery: GroceryListConfig::default(),
        }
    }
}

impl MealPlanningConfig {
    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive or non-finite
    /// calorie target, or any error from [`GroceryListConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_calorie_target.is_finite() || self.default_calorie_target <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "default_calorie_target must be a positive number, got {}",
                self.default_calorie_target
            )));
        }
        self.grocery.validate()
    }
}

/// Truncation limit and quantity label for one grocery section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrocerySectionConfig {
    /// Maximum number of preferred foods taken, in preference order
    pub limit: usize,
    /// Quantity label attached to every item of the section
    pub quantity: String,
}

impl GrocerySectionConfig {
    fn new(limit: usize, quantity: &str) -> Self {
        Self {
            limit,
            quantity: quantity.to_owned(),
        }
    }
}

/// Grocery list derivation configuration
///
/// Only proteins, vegetables, fruits and grains produce grocery items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListConfig {
    /// Proteins section: default 3 items, "2 servings"
    pub proteins: GrocerySectionConfig,
    /// Vegetables section: default 4 items, "1 bunch"
    pub vegetables: GrocerySectionConfig,
    /// Fruits section: default 3 items, "1 lb"
    pub fruits: GrocerySectionConfig,
    /// Grains section: default 2 items, "1 package"
    pub grains: GrocerySectionConfig,
}

impl Default for GroceryListConfig {
    fn default() -> Self {
        Self {
            proteins: GrocerySectionConfig::new(grocery::PROTEIN_LIMIT, grocery::PROTEIN_QUANTITY),
            vegetables: GrocerySectionConfig::new(
                grocery::VEGETABLE_LIMIT,
                grocery::VEGETABLE_QUANTITY,
            ),
            fruits: GrocerySectionConfig::new(grocery::FRUIT_LIMIT, grocery::FRUIT_QUANTITY),
            grains: GrocerySectionConfig::new(grocery::GRAIN_LIMIT, grocery::GRAIN_QUANTITY),
        }
    }
}

impl GroceryListConfig {
    /// Sections in output order, paired with their source category and store aisle
    #[must_use]
    pub fn sections(&self) -> [(FoodCategory, GroceryCategory, &GrocerySectionConfig); 4] {
        [
            (
                FoodCategory::Proteins,
                GroceryCategory::Protein,
                &self.proteins,
            ),
            (
                FoodCategory::Vegetables,
                GroceryCategory::Produce,
                &self.vegetables,
            ),
            (FoodCategory::Fruits, GroceryCategory::Produce, &self.fruits),
            (FoodCategory::Grains, GroceryCategory::Grains, &self.grains),
        ]
    }

    /// Validate limits and quantity labels
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a section limit is zero and
    /// `ConfigError::MissingField` if a quantity label is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, _, section) in self.sections() {
            if section.limit == 0 {
                return Err(ConfigError::InvalidRange(format!(
                    "grocery.{category}.limit must be at least 1"
                )));
            }
            if section.quantity.trim().is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "grocery.{category}.quantity"
                )));
            }
        }
        Ok(())
    }
}
