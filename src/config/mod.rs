// ABOUTME: Configuration management module for the Bloom CLI and meal planning service
// ABOUTME: Loads environment-driven settings and engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Configuration module
//!
//! Environment-only configuration: no config files are read. Engine settings
//! live in `bloom_intelligence::config` and are embedded here.

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
