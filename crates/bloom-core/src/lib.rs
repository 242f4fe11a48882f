// ABOUTME: Core types and constants for the Bloom meal planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

#![deny(unsafe_code)]

//! # Bloom Core
//!
//! Foundation crate providing shared types and constants for cycle-aware meal
//! planning. Kept free of engine logic so it changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Meal rule facts, grocery limits, defaults
//! - **models**: Food preferences, cycle phase, meals, grocery items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodPreferences`, `CyclePhase`, `MealSuggestion`, `GroceryItem`)
pub mod models;
