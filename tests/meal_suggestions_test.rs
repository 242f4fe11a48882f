// ABOUTME: Integration tests for cycle-aware meal suggestion generation
// ABOUTME: Tests rule firing, nutrition totals, phase tags, determinism, and phase validation
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Tests for the meal suggestion engine including:
//! - Which rules fire for which preference counts
//! - Fixed nutrition facts and their totals
//! - Phase guidance carried into tags and results
//! - Rejection of unknown phase names

mod common;

use bloom_wellness::errors::{AppError, ErrorCode};
use bloom_wellness::intelligence::{
    generate_meal_suggestions, generate_meal_suggestions_for_phase, phase_info, MealPlanRequest,
};
use bloom_wellness::models::{CyclePhase, FoodCategory, FoodPreferences, MealType};
use common::{full_preferences, lunch_only_preferences};

// ============================================================================
// Rule Firing Tests
// ============================================================================

#[test]
fn test_empty_preferences_yield_no_meals_in_every_phase() {
    for phase in CyclePhase::ALL {
        let result =
            generate_meal_suggestions(&MealPlanRequest::new(FoodPreferences::default(), phase));

        assert!(result.meals.is_empty(), "{phase} produced meals");
        assert_eq!(result.total_calories, 0);
        assert_eq!(result.total_protein, 0);
        assert_eq!(result.total_fiber, 0);
        assert_eq!(&result.phase_info, phase_info(phase));
    }
}

#[test]
fn test_dairy_and_fats_alone_fire_nothing() {
    let prefs = FoodPreferences::default()
        .with(FoodCategory::Dairy, ["Yogurt"])
        .with(FoodCategory::Fats, ["Avocado"]);
    let result = generate_meal_suggestions(&MealPlanRequest::new(prefs, CyclePhase::Luteal));
    assert!(result.meals.is_empty());
}

#[test]
fn test_full_preferences_fire_all_three_rules() {
    let result = generate_meal_suggestions(&MealPlanRequest::new(
        full_preferences(),
        CyclePhase::Follicular,
    ));

    assert_eq!(result.meals.len(), 3);
    let types: Vec<MealType> = result.meals.iter().map(|meal| meal.meal_type).collect();
    assert_eq!(types, [MealType::Breakfast, MealType::Lunch, MealType::Dinner]);

    assert_eq!(result.total_calories, 320 + 450 + 420);
    assert_eq!(result.total_protein, 12 + 35 + 18);
    assert_eq!(result.total_fiber, 8 + 6 + 12);
}

#[test]
fn test_single_protein_and_vegetable_fire_lunch_only() {
    let result = generate_meal_suggestions(&MealPlanRequest::new(
        lunch_only_preferences(),
        CyclePhase::Menstrual,
    ));

    assert_eq!(result.meals.len(), 1);
    assert_eq!(result.meals[0].meal_type, MealType::Lunch);
    assert!(result.meal(MealType::Breakfast).is_none());
    assert!(result.meal(MealType::Dinner).is_none());
    assert_eq!(result.total_calories, 450);
}

#[test]
fn test_breakfast_without_lunch_or_dinner() {
    let prefs = FoodPreferences::default()
        .with(FoodCategory::Grains, ["Oats"])
        .with(FoodCategory::Fruits, ["Berries"])
        .with(FoodCategory::Proteins, ["Eggs", "Tofu"]);
    let result = generate_meal_suggestions(&MealPlanRequest::new(prefs, CyclePhase::Ovulatory));

    assert_eq!(result.meals.len(), 1);
    let breakfast = result.meal(MealType::Breakfast).unwrap();
    assert_eq!(breakfast.title, "Oats with Berries");
    assert_eq!(breakfast.ingredients, ["Oats", "Berries", "Greek Yogurt"]);
}

// ============================================================================
// Meal Content Tests
// ============================================================================

#[test]
fn test_meal_content_for_full_preferences() {
    let result =
        generate_meal_suggestions(&MealPlanRequest::new(full_preferences(), CyclePhase::Luteal));

    let breakfast = result.meal(MealType::Breakfast).unwrap();
    assert_eq!(breakfast.title, "Rice with Apple");
    assert_eq!(breakfast.bloom_score, 92);
    assert_eq!(breakfast.tags, ["High Fiber", "luteal Phase"]);

    let lunch = result.meal(MealType::Lunch).unwrap();
    assert_eq!(lunch.title, "Chicken with Broccoli");
    assert_eq!(lunch.ingredients, ["Chicken", "Broccoli", "Rice"]);
    assert_eq!(lunch.bloom_score, 95);
    assert_eq!(
        lunch.tags,
        [
            "High Protein",
            "Complex Carbs",
            "Magnesium-Rich Foods",
            "Healthy Fats"
        ]
    );

    let dinner = result.meal(MealType::Dinner).unwrap();
    assert_eq!(dinner.title, "Salmon Bowl");
    assert_eq!(dinner.ingredients, ["Salmon", "Spinach", "Quinoa"]);
    assert_eq!(dinner.bloom_score, 88);
    assert_eq!(dinner.tags, ["Complex Carbs", "luteal Phase"]);
}

#[test]
fn test_lunch_falls_back_to_brown_rice() {
    let result = generate_meal_suggestions(&MealPlanRequest::new(
        lunch_only_preferences(),
        CyclePhase::Follicular,
    ));
    assert_eq!(result.meals[0].ingredients[2], "Brown Rice");
}

#[test]
fn test_dinner_without_grains_uses_quinoa() {
    let prefs = FoodPreferences::default()
        .with(FoodCategory::Proteins, ["Beef", "Lentils"])
        .with(FoodCategory::Vegetables, ["Kale", "Peppers", "Onion"]);
    let result = generate_meal_suggestions(&MealPlanRequest::new(prefs, CyclePhase::Menstrual));

    let dinner = result.meal(MealType::Dinner).unwrap();
    assert_eq!(dinner.title, "Lentils Bowl");
    assert_eq!(dinner.ingredients, ["Lentils", "Peppers", "Quinoa"]);
    assert_eq!(dinner.tags, ["Iron-Rich Foods", "menstrual Phase"]);
}

#[test]
fn test_phase_changes_tags_but_not_nutrition() {
    let follicular = generate_meal_suggestions(&MealPlanRequest::new(
        full_preferences(),
        CyclePhase::Follicular,
    ));
    let ovulatory = generate_meal_suggestions(&MealPlanRequest::new(
        full_preferences(),
        CyclePhase::Ovulatory,
    ));

    assert_eq!(follicular.total_calories, ovulatory.total_calories);
    assert_ne!(follicular.meals[1].tags, ovulatory.meals[1].tags);
    assert_eq!(ovulatory.phase_info.boost, "Zinc");
}

#[test]
fn test_calorie_target_and_restrictions_do_not_filter() {
    let base = MealPlanRequest::new(full_preferences(), CyclePhase::Luteal);
    let constrained = base
        .clone()
        .with_calorie_target(900.0)
        .with_dietary_restrictions(["vegetarian", "gluten-free"]);

    assert_eq!(
        generate_meal_suggestions(&base),
        generate_meal_suggestions(&constrained)
    );
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    let request = MealPlanRequest::new(full_preferences(), CyclePhase::Follicular);
    let first = generate_meal_suggestions(&request);
    for _ in 0..5 {
        assert_eq!(generate_meal_suggestions(&request), first);
    }
}

// ============================================================================
// Phase Validation Tests
// ============================================================================

#[test]
fn test_unknown_phase_is_invalid_argument() {
    let err = generate_meal_suggestions_for_phase(&full_preferences(), "invalid").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
    assert!(err.message.contains("invalid"));
}

#[test]
fn test_phase_names_must_match_exactly() {
    let result = generate_meal_suggestions_for_phase(&lunch_only_preferences(), "luteal").unwrap();
    assert_eq!(result.phase_info.boost, "Magnesium");

    for raw in ["LUTEAL", "Luteal", " luteal "] {
        let err = generate_meal_suggestions_for_phase(&lunch_only_preferences(), raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument, "accepted {raw:?}");
    }
}

#[test]
fn test_serde_and_from_json_agree_on_phase_names() {
    for raw in ["invalid", "Luteal", "LUTEAL"] {
        let json = format!(r#"{{"preferences":{{}},"cyclePhase":"{raw}"}}"#);

        let serde_err = serde_json::from_str::<MealPlanRequest>(&json).unwrap_err();
        assert_eq!(AppError::from(serde_err).code, ErrorCode::InvalidArgument);
        assert_eq!(
            MealPlanRequest::from_json(&json).unwrap_err().code,
            ErrorCode::InvalidArgument
        );
    }

    let json = r#"{"preferences":{},"cyclePhase":"luteal"}"#;
    let via_serde: MealPlanRequest = serde_json::from_str(json).unwrap();
    assert_eq!(via_serde, MealPlanRequest::from_json(json).unwrap());
    assert_eq!(via_serde.cycle_phase, CyclePhase::Luteal);
}

#[test]
fn test_request_from_json_rejects_unknown_phase() {
    let err = MealPlanRequest::from_json(r#"{"preferences":{},"cyclePhase":"spring"}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
}

#[test]
fn test_request_from_json_accepts_partial_preferences() {
    let request = MealPlanRequest::from_json(
        r#"{
            "preferences": {"proteins": ["Chicken"], "vegetables": ["Broccoli"]},
            "cyclePhase": "ovulatory",
            "calorieTarget": 1800,
            "dietaryRestrictions": ["dairy-free"]
        }"#,
    )
    .unwrap();

    assert_eq!(request.cycle_phase, CyclePhase::Ovulatory);
    assert!((request.calorie_target() - 1800.0).abs() < f64::EPSILON);
    assert!(request.dietary_restrictions.contains("dairy-free"));
    assert_eq!(generate_meal_suggestions(&request).meals.len(), 1);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = MealPlanRequest::from_json("{not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_result_serializes_with_camel_case_fields() {
    let result = generate_meal_suggestions(&MealPlanRequest::new(
        lunch_only_preferences(),
        CyclePhase::Follicular,
    ));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["totalCalories"], 450);
    assert_eq!(json["meals"][0]["type"], "Lunch");
    assert_eq!(json["meals"][0]["bloomScore"], 95);
    assert_eq!(json["phaseInfo"]["boost"], "Vitamin B");
}
