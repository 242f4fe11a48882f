// ABOUTME: Meal planning service that reads stored preferences and runs the suggestion engine
// ABOUTME: Validates stored cycle phase and calorie target before building plan requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use crate::preferences::{PreferenceKey, PreferenceStore};
use bloom_core::errors::{AppError, AppResult, ErrorCode};
use bloom_core::models::{CyclePhase, FoodPreferences, GroceryItem};
use bloom_intelligence::{
    generate_grocery_list_with_config, generate_meal_suggestions, MealPlanRequest,
    MealPlanResult, MealPlanningConfig,
};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Meal planning over a [`PreferenceStore`]
#[derive(Clone)]
pub struct MealPlanningService<S: PreferenceStore> {
    store: S,
    config: MealPlanningConfig,
}

impl<S: PreferenceStore> MealPlanningService<S> {
    /// Create a service over `store`
    #[must_use]
    pub const fn new(store: S, config: MealPlanningConfig) -> Self {
        Self { store, config }
    }

    /// Borrow the underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist food preferences
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn save_preferences(&self, preferences: &FoodPreferences) -> AppResult<()> {
        self.store
            .set(PreferenceKey::FoodPreferences, preferences)
            .await?;
        info!(
            proteins = preferences.proteins.len(),
            vegetables = preferences.vegetables.len(),
            fruits = preferences.fruits.len(),
            grains = preferences.grains.len(),
            "Saved food preferences"
        );
        Ok(())
    }

    /// Stored food preferences; empty when none were saved
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_preferences(&self) -> AppResult<FoodPreferences> {
        Ok(self
            .store
            .get(PreferenceKey::FoodPreferences)
            .await?
            .unwrap_or_default())
    }

    /// Validate and persist the current cycle phase
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidArgument` for an unknown phase name, or a store error
    pub async fn set_cycle_phase(&self, cycle_phase: &str) -> AppResult<CyclePhase> {
        let phase = CyclePhase::parse(cycle_phase)?;
        self.store.set(PreferenceKey::CyclePhase, &phase).await?;
        info!(cycle_phase = %phase, "Saved cycle phase");
        Ok(phase)
    }

    /// Stored cycle phase
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` when no phase was saved and
    /// `ErrorCode::InvalidArgument` when the stored value is not a known phase
    pub async fn cycle_phase(&self) -> AppResult<CyclePhase> {
        let stored: Option<String> = self.store.get(PreferenceKey::CyclePhase).await?;
        let raw = stored.ok_or_else(|| {
            AppError::not_found("cycle phase").with_resource_id(PreferenceKey::CyclePhase.as_str())
        })?;
        CyclePhase::parse(&raw).inspect_err(|_| {
            warn!(stored = %raw, "Stored cycle phase is not recognized");
        })
    }

    /// Validate and persist the daily calorie target
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` unless the target is a positive number
    pub async fn set_calorie_target(&self, calorie_target: f64) -> AppResult<()> {
        if !calorie_target.is_finite() || calorie_target <= 0.0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("calorie target must be a positive number, got {calorie_target}"),
            )
            .with_resource_id(PreferenceKey::CalorieTarget.as_str()));
        }
        self.store
            .set(PreferenceKey::CalorieTarget, &calorie_target)
            .await
    }

    /// Persist dietary restriction labels
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn set_dietary_restrictions(&self, restrictions: &BTreeSet<String>) -> AppResult<()> {
        self.store
            .set(PreferenceKey::DietaryRestrictions, restrictions)
            .await
    }

    /// Assemble a request from stored values
    ///
    /// `phase_override` takes precedence over the stored phase.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::cycle_phase`] when no override is given, or a
    /// store error
    pub async fn build_request(
        &self,
        phase_override: Option<CyclePhase>,
    ) -> AppResult<MealPlanRequest> {
        let cycle_phase = match phase_override {
            Some(phase) => phase,
            None => self.cycle_phase().await?,
        };
        let preferences = self.load_preferences().await?;
        let calorie_target: Option<f64> = self.store.get(PreferenceKey::CalorieTarget).await?;
        let dietary_restrictions: Option<BTreeSet<String>> =
            self.store.get(PreferenceKey::DietaryRestrictions).await?;

        Ok(MealPlanRequest {
            preferences,
            cycle_phase,
            calorie_target: Some(calorie_target.unwrap_or(self.config.default_calorie_target)),
            dietary_restrictions: dietary_restrictions.unwrap_or_default(),
        })
    }

    /// Generate a meal plan from stored preferences
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::build_request`]
    pub async fn plan(&self, phase_override: Option<CyclePhase>) -> AppResult<MealPlanResult> {
        let request = self.build_request(phase_override).await?;
        let result = generate_meal_suggestions(&request);

        info!(
            cycle_phase = %request.cycle_phase,
            meals = result.meals.len(),
            total_calories = result.total_calories,
            total_protein = result.total_protein,
            total_fiber = result.total_fiber,
            "Generated meal plan"
        );
        if result.meals.is_empty() {
            warn!("No meal rule matched the stored preferences");
        }
        Ok(result)
    }

    /// Generate a grocery list from stored preferences
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn grocery_list(&self) -> AppResult<Vec<GroceryItem>> {
        let preferences = self.load_preferences().await?;
        let items = generate_grocery_list_with_config(&preferences, &self.config.grocery);
        info!(items = items.len(), "Generated grocery list");
        Ok(items)
    }
}
