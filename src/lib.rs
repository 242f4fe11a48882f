// ABOUTME: Main library entry point for the Bloom cycle-aware meal planner
// ABOUTME: Wires configuration, logging, the preference store, and meal planning services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

#![deny(unsafe_code)]

//! # Bloom Wellness
//!
//! Cycle-aware meal suggestions and grocery lists built from a user's food
//! preferences.
//!
//! ## Architecture
//!
//! - **`bloom-core`**: errors, domain models, constants
//! - **`bloom-intelligence`**: the pure suggestion engine
//! - **this crate**: environment configuration, logging, a key-value
//!   preference store, and the service that connects stored preferences to the
//!   engine
//!
//! ## Quick Start
//!
//! ```rust
//! use bloom_wellness::preferences::InMemoryPreferenceStore;
//! use bloom_wellness::services::MealPlanningService;
//! use bloom_wellness::intelligence::MealPlanningConfig;
//! # async fn example() -> Result<(), bloom_wellness::errors::AppError> {
//! let service = MealPlanningService::new(
//!     InMemoryPreferenceStore::new(),
//!     MealPlanningConfig::default(),
//! );
//! service.set_cycle_phase("follicular").await?;
//! let plan = service.plan(None).await?;
//! assert!(plan.meals.is_empty());
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Key-value preference store collaborator
pub mod preferences;

/// Meal planning services over stored preferences
pub mod services;

pub use bloom_core::{constants, errors, models};

/// Re-export of the suggestion engine
pub use bloom_intelligence as intelligence;
