// ABOUTME: NutriSync CLI - non-interactive front end for supplement recommendations
// ABOUTME: Lists symptoms, recommends supplements from a catalog, and summarizes wearable metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync
//!
//! Usage:
//! ```bash
//! # Show the symptoms the engine understands
//! nutrisync-cli symptoms
//!
//! # Recommend supplements for a 30 year old woman
//! nutrisync-cli recommend --catalog supplements.json \
//!     --symptom "Fatigue" --symptom "Brain fog" --age 30 --gender female
//!
//! # Same, as JSON on stdout
//! nutrisync-cli recommend --catalog supplements.json --symptom Fatigue \
//!     --age 30 --gender female --json
//!
//! # Summarize a week of wearable data
//! nutrisync-cli wearable --metrics health_export.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrisync::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrisync-cli",
    about = "NutriSync supplement recommendation CLI",
    long_about = "Recommends dietary supplements from self-reported symptoms, age, gender, and pregnancy status, and summarizes wearable health metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the known symptoms
    Symptoms,

    /// Recommend supplements for reported symptoms
    Recommend {
        /// Supplement catalog (JSON array of rows)
        #[arg(long)]
        catalog: PathBuf,

        /// Reported symptom, repeat for several
        #[arg(long = "symptom")]
        symptoms: Vec<String>,

        /// Age in years (0 to 120)
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// Gender: male or female
        #[arg(long)]
        gender: String,

        /// Currently pregnant (female only)
        #[arg(long)]
        pregnant: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize wearable health metrics
    Wearable {
        /// Wearable samples (JSON array of daily rows)
        #[arg(long)]
        metrics: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!("NutriSync CLI");

    match cli.command {
        Command::Symptoms => commands::symptoms::list(),
        Command::Recommend {
            catalog,
            symptoms,
            age,
            gender,
            pregnant,
            json,
        } => {
            let request = commands::recommend::RecommendRequest {
                catalog,
                symptoms,
                age,
                gender,
                pregnant,
            };
            commands::recommend::run(&request, json)?;
        }
        Command::Wearable { metrics, json } => commands::wearable::run(&metrics, json)?,
    }

    Ok(())
}
