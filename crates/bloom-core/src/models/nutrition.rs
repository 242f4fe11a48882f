// ABOUTME: Food preference and meal suggestion models for cycle-aware planning
// ABOUTME: FoodPreferences, FoodCategory, MealType, and MealSuggestion definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category a preference list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Meat, fish, legumes, eggs
    Proteins,
    /// Vegetables and leafy greens
    Vegetables,
    /// Fresh or frozen fruit
    Fruits,
    /// Grains and starches
    Grains,
    /// Milk products
    Dairy,
    /// Oils, nuts, seeds
    Fats,
}

impl FoodCategory {
    /// All categories in preference-record order
    pub const ALL: [Self; 6] = [
        Self::Proteins,
        Self::Vegetables,
        Self::Fruits,
        Self::Grains,
        Self::Dairy,
        Self::Fats,
    ];

    /// Field name used in serialized preferences
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Proteins => "proteins",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Grains => "grains",
            Self::Dairy => "dairy",
            Self::Fats => "fats",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's preferred foods, grouped by category
///
/// Order inside each list matters: index 0 is the primary choice and is
/// used first when building meals. Absent lists deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodPreferences {
    /// Preferred proteins
    pub proteins: Vec<String>,
    /// Preferred vegetables
    pub vegetables: Vec<String>,
    /// Preferred fruits
    pub fruits: Vec<String>,
    /// Preferred grains
    pub grains: Vec<String>,
    /// Preferred dairy products
    pub dairy: Vec<String>,
    /// Preferred fats
    pub fats: Vec<String>,
}

impl FoodPreferences {
    /// Borrow the list for a category
    #[must_use]
    pub fn category(&self, category: FoodCategory) -> &[String] {
        match category {
            FoodCategory::Proteins => &self.proteins,
            FoodCategory::Vegetables => &self.vegetables,
            FoodCategory::Fruits => &self.fruits,
            FoodCategory::Grains => &self.grains,
            FoodCategory::Dairy => &self.dairy,
            FoodCategory::Fats => &self.fats,
        }
    }

    /// Mutably borrow the list for a category
    pub fn category_mut(&mut self, category: FoodCategory) -> &mut Vec<String> {
        match category {
            FoodCategory::Proteins => &mut self.proteins,
            FoodCategory::Vegetables => &mut self.vegetables,
            FoodCategory::Fruits => &mut self.fruits,
            FoodCategory::Grains => &mut self.grains,
            FoodCategory::Dairy => &mut self.dairy,
            FoodCategory::Fats => &mut self.fats,
        }
    }

    /// Builder-style setter for one category
    #[must_use]
    pub fn with<I, S>(mut self, category: FoodCategory, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.category_mut(category) = foods.into_iter().map(Into::into).collect();
        self
    }

    /// True when no category holds any food
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FoodCategory::ALL
            .iter()
            .all(|category| self.category(*category).is_empty())
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealType {
    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested meal with its fixed nutrition facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    /// Human-readable meal title
    pub title: String,
    /// Which meal of the day this is
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Fiber in grams
    pub fiber: u32,
    /// Desirability score, 0-100
    pub bloom_score: u8,
    /// Display tags
    pub tags: Vec<String>,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
}
