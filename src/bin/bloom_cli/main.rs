// ABOUTME: Bloom CLI - command-line front end for cycle-aware meal planning
// ABOUTME: Manages stored food preferences and cycle phase, prints meal plans and grocery lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness
//!
//! Usage:
//! ```bash
//! # Store food preferences
//! bloom-cli preferences set --proteins Chicken,Salmon --vegetables Spinach,Broccoli
//!
//! # Record the current cycle phase
//! bloom-cli phase set luteal
//!
//! # Suggest meals for the stored phase, or override it
//! bloom-cli plan
//! bloom-cli plan --phase ovulatory --json
//!
//! # Build a grocery list
//! bloom-cli grocery
//! ```

mod commands;
mod helpers;

use bloom_wellness::config::AppConfig;
use bloom_wellness::errors::{AppResult, ErrorResponse};
use bloom_wellness::logging::LoggingConfig;
use bloom_wellness::models::CyclePhase;
use bloom_wellness::preferences::JsonFilePreferenceStore;
use bloom_wellness::services::MealPlanningService;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bloom-cli",
    about = "Bloom cycle-aware meal planner",
    long_about = "Suggests meals and grocery lists from your food preferences, tuned to the current menstrual cycle phase."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Preference store file override
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Food preference commands
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommand,
    },

    /// Cycle phase commands
    Phase {
        #[command(subcommand)]
        action: PhaseCommand,
    },

    /// Calorie target commands
    Calories {
        #[command(subcommand)]
        action: CaloriesCommand,
    },

    /// Suggest breakfast, lunch and dinner
    Plan {
        /// Phase to plan for instead of the stored one
        #[arg(long, value_parser = CyclePhase::parse)]
        phase: Option<CyclePhase>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a grocery list from stored preferences
    Grocery {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PreferencesCommand {
    /// Replace stored food preferences
    Set(FoodArgs),

    /// Show stored food preferences
    Show {
        /// Print preferences as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Comma-separated food lists, one flag per category
#[derive(Args)]
struct FoodArgs {
    /// Preferred proteins (e.g., "Chicken,Salmon")
    #[arg(long, value_delimiter = ',')]
    proteins: Vec<String>,

    /// Preferred vegetables
    #[arg(long, value_delimiter = ',')]
    vegetables: Vec<String>,

    /// Preferred fruits
    #[arg(long, value_delimiter = ',')]
    fruits: Vec<String>,

    /// Preferred grains
    #[arg(long, value_delimiter = ',')]
    grains: Vec<String>,

    /// Preferred dairy
    #[arg(long, value_delimiter = ',')]
    dairy: Vec<String>,

    /// Preferred fats
    #[arg(long, value_delimiter = ',')]
    fats: Vec<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PhaseCommand {
    /// Store the current cycle phase
    Set {
        /// One of menstrual, follicular, ovulatory, luteal
        phase: String,
    },

    /// Show the stored cycle phase and its guidance
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CaloriesCommand {
    /// Store the daily calorie target
    Set {
        /// Target in kcal
        #[arg(allow_negative_numbers = true)]
        calories: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }
    debug!(store_path = %config.store_path.display(), "Opening preference store");

    let store = JsonFilePreferenceStore::new(config.store_path.clone());
    let service = MealPlanningService::new(store, config.meal_planning);

    let json_output = cli.command.wants_json();
    if let Err(error) = run(cli.command, &service).await {
        if json_output {
            helpers::display::print_json(&ErrorResponse::from(error))?;
            std::process::exit(1);
        }
        return Err(error.into());
    }

    Ok(())
}

impl Command {
    /// Whether output, including failures, should be JSON
    const fn wants_json(&self) -> bool {
        matches!(
            self,
            Self::Plan { json: true, .. }
                | Self::Grocery { json: true }
                | Self::Preferences {
                    action: PreferencesCommand::Show { json: true }
                }
        )
    }
}

async fn run(
    command: Command,
    service: &MealPlanningService<JsonFilePreferenceStore>,
) -> AppResult<()> {
    match command {
        Command::Preferences { action } => match action {
            PreferencesCommand::Set(foods) => {
                commands::preferences::set(
                    service,
                    commands::preferences::FoodLists {
                        proteins: foods.proteins,
                        vegetables: foods.vegetables,
                        fruits: foods.fruits,
                        grains: foods.grains,
                        dairy: foods.dairy,
                        fats: foods.fats,
                    },
                )
                .await
            }
            PreferencesCommand::Show { json } => commands::preferences::show(service, json).await,
        },
        Command::Phase { action } => match action {
            PhaseCommand::Set { phase } => commands::preferences::set_phase(service, &phase).await,
            PhaseCommand::Show => commands::preferences::show_phase(service).await,
        },
        Command::Calories { action } => match action {
            CaloriesCommand::Set { calories } => {
                commands::preferences::set_calories(service, calories).await
            }
        },
        Command::Plan { phase, json } => commands::plan::meals(service, phase, json).await,
        Command::Grocery { json } => commands::plan::grocery(service, json).await,
    }
}
