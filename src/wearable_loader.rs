// ABOUTME: Loads daily wearable samples from a JSON array
// ABOUTME: Accepts either snake_case field names or the health export column headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::errors::{AppError, AppResult};
use crate::models::WearableSample;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read and parse a wearable samples file
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read and
/// `SerializationError` when it is not a JSON array of samples
pub fn load_wearable_samples(path: impl AsRef<Path>) -> AppResult<Vec<WearableSample>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!(
            "Failed to read wearable metrics {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;
    let samples: Vec<WearableSample> = serde_json::from_str(&contents)?;
    info!(path = %path.display(), samples = samples.len(), "Loaded wearable samples");
    Ok(samples)
}
