// ABOUTME: Integration tests for the meal planning service over a preference store
// ABOUTME: Tests stored phase handling, overrides, calorie target validation, and grocery lists
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

mod common;

use bloom_wellness::errors::ErrorCode;
use bloom_wellness::intelligence::MealPlanningConfig;
use bloom_wellness::models::{CyclePhase, FoodPreferences, MealType};
use bloom_wellness::preferences::{
    InMemoryPreferenceStore, JsonFilePreferenceStore, PreferenceKey, PreferenceStore,
};
use bloom_wellness::services::MealPlanningService;
use common::{full_preferences, lunch_only_preferences, memory_service, temp_file_store};
use std::collections::BTreeSet;

#[tokio::test]
async fn test_plan_uses_stored_preferences_and_phase() {
    let service = memory_service();
    service.save_preferences(&full_preferences()).await.unwrap();
    assert_eq!(
        service.set_cycle_phase("follicular").await.unwrap(),
        CyclePhase::Follicular
    );

    let plan = service.plan(None).await.unwrap();
    assert_eq!(plan.meals.len(), 3);
    assert_eq!(plan.total_calories, 1190);
    assert_eq!(plan.total_protein, 65);
    assert_eq!(plan.total_fiber, 26);
    assert_eq!(plan.phase_info.boost, "Vitamin B");
}

#[tokio::test]
async fn test_phase_override_beats_stored_phase() {
    let service = memory_service();
    service
        .save_preferences(&lunch_only_preferences())
        .await
        .unwrap();
    service.set_cycle_phase("menstrual").await.unwrap();

    let plan = service.plan(Some(CyclePhase::Luteal)).await.unwrap();
    let lunch = plan.meal(MealType::Lunch).unwrap();
    assert!(lunch.tags.iter().any(|tag| tag == "Complex Carbs"));
    assert_eq!(service.cycle_phase().await.unwrap(), CyclePhase::Menstrual);
}

#[tokio::test]
async fn test_plan_without_phase_is_not_found() {
    let service = memory_service();
    let err = service.plan(None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.context.resource_id.as_deref(), Some("cycle_phase"));
}

#[tokio::test]
async fn test_plan_with_override_needs_no_stored_phase() {
    let service = memory_service();
    let plan = service.plan(Some(CyclePhase::Ovulatory)).await.unwrap();
    assert!(plan.meals.is_empty());
    assert_eq!(plan.total_calories, 0);
}

#[tokio::test]
async fn test_unknown_phase_is_rejected_and_not_stored() {
    let service = memory_service();
    let err = service.set_cycle_phase("invalid").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
    assert!(!service.store().has(PreferenceKey::CyclePhase).await.unwrap());
}

#[tokio::test]
async fn test_corrupt_stored_phase_is_invalid_argument() {
    let service = memory_service();
    service
        .store()
        .set(PreferenceKey::CyclePhase, &"winter")
        .await
        .unwrap();

    let err = service.plan(None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
}

#[tokio::test]
async fn test_missing_preferences_load_as_empty() {
    let service = memory_service();
    assert_eq!(
        service.load_preferences().await.unwrap(),
        FoodPreferences::default()
    );
    assert!(service.grocery_list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_calorie_target_validation_and_default() {
    let service = memory_service();
    service.set_cycle_phase("luteal").await.unwrap();

    let request = service.build_request(None).await.unwrap();
    assert_eq!(request.calorie_target, Some(2000.0));

    for bad in [0.0, -150.0, f64::NAN] {
        let err = service.set_calorie_target(bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    service.set_calorie_target(1650.0).await.unwrap();
    let request = service.build_request(None).await.unwrap();
    assert_eq!(request.calorie_target, Some(1650.0));
}

#[tokio::test]
async fn test_configured_default_calorie_target() {
    let config = MealPlanningConfig {
        default_calorie_target: 2400.0,
        ..MealPlanningConfig::default()
    };
    let service = MealPlanningService::new(InMemoryPreferenceStore::new(), config);

    let request = service
        .build_request(Some(CyclePhase::Follicular))
        .await
        .unwrap();
    assert_eq!(request.calorie_target, Some(2400.0));
}

#[tokio::test]
async fn test_dietary_restrictions_carried_into_request() {
    let service = memory_service();
    let restrictions: BTreeSet<String> = ["nut-free".to_owned(), "vegetarian".to_owned()]
        .into_iter()
        .collect();
    service.set_dietary_restrictions(&restrictions).await.unwrap();
    service.save_preferences(&full_preferences()).await.unwrap();

    let request = service
        .build_request(Some(CyclePhase::Luteal))
        .await
        .unwrap();
    assert_eq!(request.dietary_restrictions, restrictions);

    let plan = service.plan(Some(CyclePhase::Luteal)).await.unwrap();
    assert_eq!(plan.meals.len(), 3);
}

#[tokio::test]
async fn test_grocery_list_from_stored_preferences() {
    let service = memory_service();
    service.save_preferences(&full_preferences()).await.unwrap();

    let items = service.grocery_list().await.unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0].name, "Chicken");
}

#[tokio::test]
async fn test_service_over_file_store_survives_restart() {
    let (_dir, store) = temp_file_store();
    let service = MealPlanningService::new(store.clone(), MealPlanningConfig::default());
    service.save_preferences(&full_preferences()).await.unwrap();
    service.set_cycle_phase("ovulatory").await.unwrap();

    let restarted = MealPlanningService::new(
        JsonFilePreferenceStore::new(store.path()),
        MealPlanningConfig::default(),
    );
    assert_eq!(restarted.cycle_phase().await.unwrap(), CyclePhase::Ovulatory);
    assert_eq!(restarted.plan(None).await.unwrap().meals.len(), 3);
}
