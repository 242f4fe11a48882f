// ABOUTME: Preference management commands for bloom-cli
// ABOUTME: Handles setting and showing food preferences, cycle phase, and calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use bloom_wellness::{
    errors::AppResult,
    intelligence::phase_info,
    models::{FoodCategory, FoodPreferences},
    preferences::PreferenceStore,
    services::MealPlanningService,
};

type Result<T> = AppResult<T>;
use tracing::info;

use crate::helpers::display::{display_preferences, print_json};

/// Food lists collected from command-line flags
pub struct FoodLists {
    pub proteins: Vec<String>,
    pub vegetables: Vec<String>,
    pub fruits: Vec<String>,
    pub grains: Vec<String>,
    pub dairy: Vec<String>,
    pub fats: Vec<String>,
}

impl FoodLists {
    fn into_preferences(self) -> FoodPreferences {
        [
            (FoodCategory::Proteins, self.proteins),
            (FoodCategory::Vegetables, self.vegetables),
            (FoodCategory::Fruits, self.fruits),
            (FoodCategory::Grains, self.grains),
            (FoodCategory::Dairy, self.dairy),
            (FoodCategory::Fats, self.fats),
        ]
        .into_iter()
        .fold(FoodPreferences::default(), |prefs, (category, foods)| {
            prefs.with(category, clean(foods))
        })
    }
}

// Trims entries and drops blanks left by stray commas
fn clean(foods: Vec<String>) -> impl Iterator<Item = String> {
    foods
        .into_iter()
        .map(|food| food.trim().to_owned())
        .filter(|food| !food.is_empty())
}

/// Replace stored food preferences
pub async fn set<S: PreferenceStore>(
    service: &MealPlanningService<S>,
    foods: FoodLists,
) -> Result<()> {
    let preferences = foods.into_preferences();
    if preferences.is_empty() {
        info!("Storing empty food preferences");
    }
    service.save_preferences(&preferences).await?;

    println!("Food preferences saved.");
    display_preferences(&preferences);
    Ok(())
}

/// Show stored food preferences
pub async fn show<S: PreferenceStore>(service: &MealPlanningService<S>, json: bool) -> Result<()> {
    let preferences = service.load_preferences().await?;
    if json {
        return print_json(&preferences);
    }
    display_preferences(&preferences);
    Ok(())
}

/// Store the current cycle phase
pub async fn set_phase<S: PreferenceStore>(
    service: &MealPlanningService<S>,
    phase: &str,
) -> Result<()> {
    let phase = service.set_cycle_phase(phase).await?;
    println!("Cycle phase set to {phase}.");
    Ok(())
}

/// Show the stored cycle phase with its guidance
pub async fn show_phase<S: PreferenceStore>(service: &MealPlanningService<S>) -> Result<()> {
    let phase = service.cycle_phase().await?;
    let info = phase_info(phase);
    println!("Cycle phase: {phase}");
    println!("Focus: {}", info.focus.join(", "));
    println!("Boost: {}", info.boost);
    println!("{}", info.description);
    Ok(())
}

/// Store the daily calorie target
pub async fn set_calories<S: PreferenceStore>(
    service: &MealPlanningService<S>,
    calories: f64,
) -> Result<()> {
    service.set_calorie_target(calories).await?;
    println!("Calorie target set to {calories} kcal.");
    Ok(())
}
