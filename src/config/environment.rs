// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, store location, and engine defaults parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

//! Environment-based configuration

use bloom_core::errors::AppResult;
use bloom_intelligence::{ConfigError, MealPlanningConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Environment variable naming the preference store file
pub const STORE_PATH_VAR: &str = "BLOOM_STORE_PATH";
/// Environment variable overriding the default daily calorie target
pub const CALORIE_TARGET_VAR: &str = "BLOOM_DEFAULT_CALORIE_TARGET";
/// Environment variable selecting the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// JSON file backing the preference store
    pub store_path: PathBuf,
    /// Engine settings
    pub meal_planning: MealPlanningConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if `BLOOM_DEFAULT_CALORIE_TARGET` is not a
    /// positive number
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(ENVIRONMENT_VAR)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let store_path = env::var(STORE_PATH_VAR)
            .map_or_else(|_| default_store_path(), PathBuf::from);

        let mut meal_planning = MealPlanningConfig::default();
        if let Ok(raw) = env::var(CALORIE_TARGET_VAR) {
            meal_planning.default_calorie_target = parse_calorie_target(&raw)?;
        }
        meal_planning.validate()?;

        debug!(
            environment = %environment,
            store_path = %store_path.display(),
            default_calorie_target = meal_planning.default_calorie_target,
            "Loaded configuration from environment"
        );

        Ok(Self {
            environment,
            store_path,
            meal_planning,
        })
    }

    /// Replace the store path, e.g. from a `--store` flag
    #[must_use]
    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }
}

/// `$XDG_DATA_HOME/bloom/preferences.json`, or `./data/preferences.json`
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, storing preferences under ./data");
            PathBuf::from("data").join("preferences.json")
        },
        |dir| dir.join("bloom").join("preferences.json"),
    )
}

fn parse_calorie_target(raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|e| {
        ConfigError::Parse(format!(
            "{CALORIE_TARGET_VAR} must be a number, got '{raw}': {e}"
        ))
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::ValueOutOfRange(format!(
            "{CALORIE_TARGET_VAR} must be positive, got {value}"
        )));
    }
    Ok(value)
}
