// ABOUTME: Grocery list item model derived from food preferences
// ABOUTME: GroceryItem and the closed GroceryCategory set used for store aisles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery store section an item is shopped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroceryCategory {
    /// Butcher, fish counter, legumes
    Protein,
    /// Fruit and vegetables
    Produce,
    /// Dry goods aisle
    Grains,
}

impl GroceryCategory {
    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Produce => "Produce",
            Self::Grains => "Grains",
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Food name as entered by the user
    pub name: String,
    /// Store section
    pub category: GroceryCategory,
    /// Descriptive quantity ("2 servings", "1 bunch")
    pub quantity: String,
}
