// ABOUTME: Grocery list derivation from ordered food preferences
// ABOUTME: Truncates each shopped category and tags items with aisle and quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Grocery list generation
//!
//! Independent of cycle phase and calorie target. Dairy and fats are never
//! shopped for.

use crate::config::GroceryListConfig;
use bloom_core::models::{FoodPreferences, GroceryItem};
use tracing::debug;

/// Build a grocery list with the default section limits
#[must_use]
pub fn generate_grocery_list(preferences: &FoodPreferences) -> Vec<GroceryItem> {
    generate_grocery_list_with_config(preferences, &GroceryListConfig::default())
}

/// Build a grocery list with explicit section limits and quantity labels
///
/// Output is proteins, vegetables, fruits, grains, each truncated to its limit
/// and kept in preference order.
#[must_use]
pub fn generate_grocery_list_with_config(
    preferences: &FoodPreferences,
    config: &GroceryListConfig,
) -> Vec<GroceryItem> {
    let items: Vec<GroceryItem> = config
        .sections()
        .into_iter()
        .flat_map(move |(food_category, grocery_category, section)| {
            preferences
                .category(food_category)
                .iter()
                .take(section.limit)
                .map(move |name| GroceryItem {
                    name: name.clone(),
                    category: grocery_category,
                    quantity: section.quantity.clone(),
                })
        })
        .collect();

    debug!(item_count = items.len(), "Generated grocery list");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::models::{FoodCategory, GroceryCategory};

    #[test]
    fn test_dairy_and_fats_are_never_listed() {
        let prefs = FoodPreferences::default()
            .with(FoodCategory::Dairy, ["Milk", "Cheese"])
            .with(FoodCategory::Fats, ["Olive Oil"]);
        assert!(generate_grocery_list(&prefs).is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let mut config = GroceryListConfig::default();
        config.vegetables.limit = 1;
        config.vegetables.quantity = "2 heads".to_owned();
        let prefs =
            FoodPreferences::default().with(FoodCategory::Vegetables, ["Lettuce", "Cabbage"]);

        let items = generate_grocery_list_with_config(&prefs, &config);
        assert_eq!(
            items,
            vec![GroceryItem {
                name: "Lettuce".to_owned(),
                category: GroceryCategory::Produce,
                quantity: "2 heads".to_owned(),
            }]
        );
    }
}
