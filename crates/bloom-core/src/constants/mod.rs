// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Meal rule nutrition facts, grocery limits, defaults, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Constants module
//!
//! Constants are grouped by domain. The meal and grocery values are part of the
//! user-visible contract of the suggestion engine and change only deliberately.

/// Request defaults
pub mod defaults {
    /// Daily calorie target assumed when a request carries none (kcal)
    pub const CALORIE_TARGET: f64 = 2000.0;
}

/// Fixed nutrition facts and scores per meal rule
pub mod meals {
    /// Breakfast energy (kcal)
    pub const BREAKFAST_CALORIES: u32 = 320;
    /// Breakfast protein (g)
    pub const BREAKFAST_PROTEIN_G: u32 = 12;
    /// Breakfast fiber (g)
    pub const BREAKFAST_FIBER_G: u32 = 8;
    /// Breakfast bloom score
    pub const BREAKFAST_BLOOM_SCORE: u8 = 92;

    /// Lunch energy (kcal)
    pub const LUNCH_CALORIES: u32 = 450;
    /// Lunch protein (g)
    pub const LUNCH_PROTEIN_G: u32 = 35;
    /// Lunch fiber (g)
    pub const LUNCH_FIBER_G: u32 = 6;
    /// Lunch bloom score
    pub const LUNCH_BLOOM_SCORE: u8 = 95;

    /// Dinner energy (kcal)
    pub const DINNER_CALORIES: u32 = 420;
    /// Dinner protein (g)
    pub const DINNER_PROTEIN_G: u32 = 18;
    /// Dinner fiber (g)
    pub const DINNER_FIBER_G: u32 = 12;
    /// Dinner bloom score
    pub const DINNER_BLOOM_SCORE: u8 = 88;

    /// Ingredient always added to breakfast
    pub const BREAKFAST_BASE_INGREDIENT: &str = "Greek Yogurt";
    /// Lunch grain when the user listed none
    pub const LUNCH_FALLBACK_GRAIN: &str = "Brown Rice";
    /// Dinner grain when the user listed none
    pub const DINNER_FALLBACK_GRAIN: &str = "Quinoa";

    /// Breakfast lead tag
    pub const HIGH_FIBER_TAG: &str = "High Fiber";
    /// Lunch lead tag
    pub const HIGH_PROTEIN_TAG: &str = "High Protein";
}

/// Grocery list truncation limits and quantity labels
pub mod grocery {
    /// Proteins taken from preferences
    pub const PROTEIN_LIMIT: usize = 3;
    /// Vegetables taken from preferences
    pub const VEGETABLE_LIMIT: usize = 4;
    /// Fruits taken from preferences
    pub const FRUIT_LIMIT: usize = 3;
    /// Grains taken from preferences
    pub const GRAIN_LIMIT: usize = 2;

    /// Quantity label for proteins
    pub const PROTEIN_QUANTITY: &str = "2 servings";
    /// Quantity label for vegetables
    pub const VEGETABLE_QUANTITY: &str = "1 bunch";
    /// Quantity label for fruits
    pub const FRUIT_QUANTITY: &str = "1 lb";
    /// Quantity label for grains
    pub const GRAIN_QUANTITY: &str = "1 package";
}

/// Service names for structured logging
pub mod service_names {
    /// Bloom CLI service name
    pub const BLOOM_CLI: &str = "bloom_cli";
    /// Library crate target used in log filters
    pub const BLOOM_WELLNESS: &str = "bloom_wellness";
}
