// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, preference fixtures, and store constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `bloom_wellness`

use bloom_wellness::intelligence::MealPlanningConfig;
use bloom_wellness::models::{FoodCategory, FoodPreferences};
use bloom_wellness::preferences::{InMemoryPreferenceStore, JsonFilePreferenceStore};
use bloom_wellness::services::MealPlanningService;
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::util::SubscriberInitExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .finish()
            .try_init();
    });
}

/// Preferences that fire all three meal rules
pub fn full_preferences() -> FoodPreferences {
    FoodPreferences::default()
        .with(FoodCategory::Proteins, ["Chicken", "Salmon"])
        .with(FoodCategory::Vegetables, ["Broccoli", "Spinach"])
        .with(FoodCategory::Grains, ["Rice", "Quinoa"])
        .with(FoodCategory::Fruits, ["Apple"])
}

/// Preferences that fire only the lunch rule
pub fn lunch_only_preferences() -> FoodPreferences {
    FoodPreferences::default()
        .with(FoodCategory::Proteins, ["Chicken"])
        .with(FoodCategory::Vegetables, ["Broccoli"])
}

/// Service over a fresh in-memory store
pub fn memory_service() -> MealPlanningService<InMemoryPreferenceStore> {
    init_test_logging();
    MealPlanningService::new(InMemoryPreferenceStore::new(), MealPlanningConfig::default())
}

/// File store inside a new temporary directory; keep the `TempDir` alive
pub fn temp_file_store() -> (TempDir, JsonFilePreferenceStore) {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFilePreferenceStore::new(dir.path().join("nested").join("preferences.json"));
    (dir, store)
}
