// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness
// ABOUTME: Output formatting helpers for bloom-cli
// ABOUTME: Provides consistent display functions for plans, grocery lists, and preferences

use bloom_wellness::errors::AppResult;
use bloom_wellness::intelligence::MealPlanResult;
use bloom_wellness::models::{FoodCategory, FoodPreferences, GroceryItem};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a meal plan
pub fn display_meal_plan(plan: &MealPlanResult) {
    let info = &plan.phase_info;
    println!("\nPhase focus: {}", info.focus.join(", "));
    println!("Boost: {}", info.boost);
    println!("{}", info.description);
    println!("{}", "=".repeat(60));

    if plan.meals.is_empty() {
        println!("No meals yet: add proteins, vegetables, grains or fruits to your preferences.");
        return;
    }

    for meal in &plan.meals {
        println!("\n{}: {}", meal.meal_type, meal.title);
        println!(
            "   {} kcal | {} g protein | {} g fiber | bloom score {}",
            meal.calories, meal.protein, meal.fiber, meal.bloom_score
        );
        println!("   Ingredients: {}", meal.ingredients.join(", "));
        println!("   Tags: {}", meal.tags.join(" | "));
    }

    println!("\n{}", "-".repeat(60));
    println!(
        "Total: {} kcal | {} g protein | {} g fiber",
        plan.total_calories, plan.total_protein, plan.total_fiber
    );
}

/// Display a grocery list
pub fn display_grocery_list(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("Grocery list is empty.");
        return;
    }

    let width = name_column_width(items);
    println!("\nGrocery list ({} items)", items.len());
    println!("{}", "=".repeat(40));
    for item in items {
        println!(
            "[{:<7}] {:<width$}  {}",
            item.category.as_str(),
            item.name,
            item.quantity
        );
    }
}

/// Widest item name in characters; format width pads by `char`, not byte
fn name_column_width(items: &[GroceryItem]) -> usize {
    items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Display stored food preferences
pub fn display_preferences(preferences: &FoodPreferences) {
    println!("\nFood preferences");
    println!("{}", "=".repeat(40));
    for category in FoodCategory::ALL {
        let foods = preferences.category(category);
        let listed = if foods.is_empty() {
            "-".to_owned()
        } else {
            foods.join(", ")
        };
        println!("{:<11} {listed}", format!("{category}:"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_wellness::models::GroceryCategory;

    fn item(name: &str) -> GroceryItem {
        GroceryItem {
            name: name.to_owned(),
            category: GroceryCategory::Produce,
            quantity: "1 bunch".to_owned(),
        }
    }

    #[test]
    fn test_name_column_width_counts_characters() {
        let items = [item("Jalapeño"), item("Kale"), item("Pak choi 小白菜")];
        assert_eq!(name_column_width(&items), 12);
        assert_eq!(name_column_width(&[item("Açaí")]), 4);
        assert_eq!(name_column_width(&[]), 0);
    }
}
