// ABOUTME: Planning commands for bloom-cli
// ABOUTME: Prints meal suggestions and grocery lists built from stored preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use bloom_wellness::{
    errors::AppResult, models::CyclePhase, preferences::PreferenceStore,
    services::MealPlanningService,
};

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_grocery_list, display_meal_plan, print_json};

/// Suggest meals for the stored or overridden cycle phase
pub async fn meals<S: PreferenceStore>(
    service: &MealPlanningService<S>,
    phase: Option<CyclePhase>,
    json: bool,
) -> Result<()> {
    let plan = service.plan(phase).await?;
    if json {
        return print_json(&plan);
    }
    display_meal_plan(&plan);
    Ok(())
}

/// Print a grocery list for stored preferences
pub async fn grocery<S: PreferenceStore>(
    service: &MealPlanningService<S>,
    json: bool,
) -> Result<()> {
    let items = service.grocery_list().await?;
    if json {
        return print_json(&items);
    }
    display_grocery_list(&items);
    Ok(())
}
