// ABOUTME: Preference store abstraction for persisting food preferences and cycle phase
// ABOUTME: Pluggable key-value backends (in-memory, JSON file) behind a fixed key set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

use bloom_core::errors::AppResult;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

pub use file::JsonFilePreferenceStore;
pub use memory::InMemoryPreferenceStore;

/// Fixed keys under which preference data is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceKey {
    /// `FoodPreferences` record
    FoodPreferences,
    /// Current cycle phase, stored as its lowercase name
    CyclePhase,
    /// Daily calorie target (kcal)
    CalorieTarget,
    /// Set of dietary restriction labels
    DietaryRestrictions,
}

impl PreferenceKey {
    /// All keys
    pub const ALL: [Self; 4] = [
        Self::FoodPreferences,
        Self::CyclePhase,
        Self::CalorieTarget,
        Self::DietaryRestrictions,
    ];

    /// Storage key string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FoodPreferences => "food_preferences",
            Self::CyclePhase => "cycle_phase",
            Self::CalorieTarget => "calorie_target",
            Self::DietaryRestrictions => "dietary_restrictions",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference store trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust
/// use bloom_wellness::preferences::{InMemoryPreferenceStore, PreferenceKey, PreferenceStore};
/// # async fn example() -> Result<(), bloom_core::errors::AppError> {
/// let store = InMemoryPreferenceStore::new();
/// store.set(PreferenceKey::CalorieTarget, &1800.0_f64).await?;
///
/// let target: Option<f64> = store.get(PreferenceKey::CalorieTarget).await?;
/// assert_eq!(target, Some(1800.0));
/// assert!(!store.has(PreferenceKey::CyclePhase).await?);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync + Clone {
    /// Retrieve and deserialize a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored value does not
    /// deserialize into `T`
    async fn get<T: DeserializeOwned>(&self, key: PreferenceKey) -> AppResult<Option<T>>;

    /// Serialize and store a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    async fn set<T: Serialize + Send + Sync>(&self, key: PreferenceKey, value: &T)
        -> AppResult<()>;

    /// Check whether a key holds a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn has(&self, key: PreferenceKey) -> AppResult<bool>;

    /// Remove a key, returning whether it held a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn remove(&self, key: PreferenceKey) -> AppResult<bool>;
}
