// ABOUTME: Cycle-aware meal suggestion engine built from food preferences
// ABOUTME: Breakfast, lunch, and dinner construction rules plus nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Meal Suggestion Engine
//!
//! Maps a user's food preferences and current cycle phase to at most three meal
//! suggestions. Each meal comes from an independent rule gated on how many foods
//! the user listed in the relevant categories:
//!
//! | Meal      | Fires when                      | kcal | protein | fiber | score |
//! |-----------|---------------------------------|------|---------|-------|-------|
//! | Breakfast | grains >= 1 and fruits >= 1     | 320  | 12 g    | 8 g   | 92    |
//! | Lunch     | proteins >= 1 and vegetables >= 1 | 450 | 35 g   | 6 g   | 95    |
//! | Dinner    | proteins >= 2 and vegetables >= 2 | 420 | 18 g   | 12 g  | 88    |
//!
//! Generation is pure: no I/O, no randomness, no shared state.

use crate::phase_guidance::{phase_info, PhaseInfo};
use bloom_core::constants::{defaults, meals};
use bloom_core::errors::AppResult;
use bloom_core::models::{CyclePhase, FoodPreferences, MealSuggestion, MealType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Input to meal generation
///
/// `calorie_target` and `dietary_restrictions` are carried for callers that
/// persist or display them; generation does not read either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// The user's food preferences
    #[serde(default)]
    pub preferences: FoodPreferences,
    /// Current cycle phase
    pub cycle_phase: CyclePhase,
    /// Daily calorie target in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<f64>,
    /// Free-form dietary restrictions
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub dietary_restrictions: BTreeSet<String>,
}

impl MealPlanRequest {
    /// Create a request with no calorie target and no restrictions
    #[must_use]
    pub fn new(preferences: FoodPreferences, cycle_phase: CyclePhase) -> Self {
        Self {
            preferences,
            cycle_phase,
            calorie_target: None,
            dietary_restrictions: BTreeSet::new(),
        }
    }

    /// Set the calorie target
    #[must_use]
    pub const fn with_calorie_target(mut self, calorie_target: f64) -> Self {
        self.calorie_target = Some(calorie_target);
        self
    }

    /// Set the dietary restrictions
    #[must_use]
    pub fn with_dietary_restrictions<I, S>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    /// Calorie target, defaulting to 2000 kcal
    #[must_use]
    pub fn calorie_target(&self) -> f64 {
        self.calorie_target.unwrap_or(defaults::CALORIE_TARGET)
    }

    /// Parse a request from JSON produced by a UI layer
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidArgument` if `cyclePhase` is not one of the four
    /// phases or a field has the wrong type, or `ErrorCode::SerializationError` if
    /// the JSON is malformed.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Output of meal generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    /// Fired meals in Breakfast, Lunch, Dinner order
    pub meals: Vec<MealSuggestion>,
    /// Guidance for the requested phase
    pub phase_info: PhaseInfo,
    /// Sum of meal calories
    pub total_calories: u32,
    /// Sum of meal protein (g)
    pub total_protein: u32,
    /// Sum of meal fiber (g)
    pub total_fiber: u32,
}

impl MealPlanResult {
    fn from_meals(meals: Vec<MealSuggestion>, phase_info: PhaseInfo) -> Self {
        let (total_calories, total_protein, total_fiber) =
            meals.iter().fold((0, 0, 0), |(calories, protein, fiber), meal| {
                (
                    calories + meal.calories,
                    protein + meal.protein,
                    fiber + meal.fiber,
                )
            });
        Self {
            meals,
            phase_info,
            total_calories,
            total_protein,
            total_fiber,
        }
    }

    /// Meal of the given type, if its rule fired
    #[must_use]
    pub fn meal(&self, meal_type: MealType) -> Option<&MealSuggestion> {
        self.meals.iter().find(|meal| meal.meal_type == meal_type)
    }
}

/// A meal construction rule
type MealRule = fn(&FoodPreferences, CyclePhase, &PhaseInfo) -> Option<MealSuggestion>;

/// Rules in output order
const MEAL_RULES: [MealRule; 3] = [breakfast_rule, lunch_rule, dinner_rule];

/// Generate meal suggestions for a request
#[must_use]
pub fn generate_meal_suggestions(request: &MealPlanRequest) -> MealPlanResult {
    let info = phase_info(request.cycle_phase);
    let meals: Vec<MealSuggestion> = MEAL_RULES
        .iter()
        .filter_map(|rule| rule(&request.preferences, request.cycle_phase, info))
        .collect();

    debug!(
        cycle_phase = %request.cycle_phase,
        meal_count = meals.len(),
        "Generated meal suggestions"
    );

    MealPlanResult::from_meals(meals, *info)
}

/// Generate meal suggestions from a phase name supplied as text
///
/// # Errors
///
/// Returns `ErrorCode::InvalidArgument` if `cycle_phase` is not one of the four phases
pub fn generate_meal_suggestions_for_phase(
    preferences: &FoodPreferences,
    cycle_phase: &str,
) -> AppResult<MealPlanResult> {
    let phase = CyclePhase::parse(cycle_phase).map_err(|e| {
        debug!(cycle_phase, "Rejected meal plan request");
        e
    })?;
    Ok(generate_meal_suggestions(&MealPlanRequest::new(
        preferences.clone(),
        phase,
    )))
}

fn phase_tag(phase: CyclePhase) -> String {
    format!("{phase} Phase")
}

/// Element 1, falling back to element 0
fn second_or_first(items: &[String]) -> Option<&str> {
    items.get(1).or_else(|| items.first()).map(String::as_str)
}

fn breakfast_rule(
    preferences: &FoodPreferences,
    phase: CyclePhase,
    _info: &PhaseInfo,
) -> Option<MealSuggestion> {
    let grain = preferences.grains.first()?;
    let fruit = preferences.fruits.first()?;

    Some(MealSuggestion {
        title: format!("{grain} with {fruit}"),
        meal_type: MealType::Breakfast,
        calories: meals::BREAKFAST_CALORIES,
        protein: meals::BREAKFAST_PROTEIN_G,
        fiber: meals::BREAKFAST_FIBER_G,
        bloom_score: meals::BREAKFAST_BLOOM_SCORE,
        tags: vec![meals::HIGH_FIBER_TAG.to_owned(), phase_tag(phase)],
        ingredients: vec![
            grain.clone(),
            fruit.clone(),
            meals::BREAKFAST_BASE_INGREDIENT.to_owned(),
        ],
    })
}

fn lunch_rule(
    preferences: &FoodPreferences,
    _phase: CyclePhase,
    info: &PhaseInfo,
) -> Option<MealSuggestion> {
    let protein = preferences.proteins.first()?;
    let vegetable = preferences.vegetables.first()?;
    let grain = preferences
        .grains
        .first()
        .map_or(meals::LUNCH_FALLBACK_GRAIN, String::as_str);

    let mut tags = Vec::with_capacity(1 + info.focus.len());
    tags.push(meals::HIGH_PROTEIN_TAG.to_owned());
    tags.extend(info.focus.iter().map(|focus| (*focus).to_owned()));

    Some(MealSuggestion {
        title: format!("{protein} with {vegetable}"),
        meal_type: MealType::Lunch,
        calories: meals::LUNCH_CALORIES,
        protein: meals::LUNCH_PROTEIN_G,
        fiber: meals::LUNCH_FIBER_G,
        bloom_score: meals::LUNCH_BLOOM_SCORE,
        tags,
        ingredients: vec![protein.clone(), vegetable.clone(), grain.to_owned()],
    })
}

fn dinner_rule(
    preferences: &FoodPreferences,
    phase: CyclePhase,
    info: &PhaseInfo,
) -> Option<MealSuggestion> {
    if preferences.proteins.len() < 2 || preferences.vegetables.len() < 2 {
        return None;
    }
    let protein = second_or_first(&preferences.proteins)?;
    let vegetable = second_or_first(&preferences.vegetables)?;
    let grain = second_or_first(&preferences.grains).unwrap_or(meals::DINNER_FALLBACK_GRAIN);

    Some(MealSuggestion {
        title: format!("{protein} Bowl"),
        meal_type: MealType::Dinner,
        calories: meals::DINNER_CALORIES,
        protein: meals::DINNER_PROTEIN_G,
        fiber: meals::DINNER_FIBER_G,
        bloom_score: meals::DINNER_BLOOM_SCORE,
        tags: vec![info.focus[0].to_owned(), phase_tag(phase)],
        ingredients: vec![protein.to_owned(), vegetable.to_owned(), grain.to_owned()],
    })
}
