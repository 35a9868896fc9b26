// ABOUTME: Wearable subcommand summarizing daily health metrics against targets
// ABOUTME: Prints a human-readable report or the serialized report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::helpers::display::display_wearable_report;
use anyhow::Result;
use nutrisync::intelligence::{analyze_wearable, IntelligenceConfig};
use nutrisync::wearable_loader::load_wearable_samples;
use std::path::Path;

/// Load samples, analyze them, and print the report
pub fn run(metrics: &Path, json: bool) -> Result<()> {
    let samples = load_wearable_samples(metrics)?;
    let report = analyze_wearable(&samples, &IntelligenceConfig::global().wearable)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_wearable_report(&report);
    }
    Ok(())
}
