// ABOUTME: Recommend subcommand running the engine over a catalog file
// ABOUTME: Prints a human-readable report or the serialized report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::helpers::display::display_recommendation;
use anyhow::Result;
use nutrisync::catalog_loader::load_catalog;
use nutrisync::intelligence::RecommendationEngine;
use std::path::PathBuf;

/// Arguments of one recommendation request
pub struct RecommendRequest {
    /// Catalog file
    pub catalog: PathBuf,
    /// Reported symptoms as typed
    pub symptoms: Vec<String>,
    /// Age in years
    pub age: i64,
    /// Gender as typed
    pub gender: String,
    /// Pregnancy flag
    pub pregnant: bool,
}

/// Load the catalog, run the engine, and print the report
pub fn run(request: &RecommendRequest, json: bool) -> Result<()> {
    let engine = RecommendationEngine::new(load_catalog(&request.catalog)?);
    let report = engine.recommend(
        &request.symptoms,
        request.age,
        &request.gender,
        request.pregnant,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_recommendation(&report);
    }
    Ok(())
}
