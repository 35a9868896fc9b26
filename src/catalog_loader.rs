// ABOUTME: Loads the supplement catalog from a JSON array of AUSNUT-style rows
// ABOUTME: Coerces nutrient cells leniently; malformed or empty cells become null
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Supplement catalog ingestion
//!
//! Each row is a JSON object keyed by the column headers of the AUSNUT
//! dietary supplement table:
//!
//! ```json
//! [
//!   {
//!     "Dietary supplement name": "GNC Magnesium 500",
//!     "Magnesium (Mg) (mg)": "500,0",
//!     "Price": "24.99AUD",
//!     "Purchase Link": "https://example.com/gnc-magnesium",
//!     "Image Link": "https://example.com/gnc-magnesium.png"
//!   }
//! ]
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::SupplementRecord;
use crate::reference::NutrientColumn;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Column holding the product display name
pub const NAME_COLUMN: &str = "Dietary supplement name";
/// Column holding the purchase link
pub const PURCHASE_LINK_COLUMN: &str = "Purchase Link";
/// Column holding the image link
pub const IMAGE_LINK_COLUMN: &str = "Image Link";
/// Column holding the price string
pub const PRICE_COLUMN: &str = "Price";

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read, `SerializationError`
/// for invalid JSON, and `InvalidFormat` for a row without a name
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Vec<SupplementRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!(
            "Failed to read supplement catalog {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;
    let records = parse_catalog(&contents)?;
    info!(path = %path.display(), rows = records.len(), "Loaded supplement catalog");
    Ok(records)
}

/// Parse catalog rows from a JSON string
///
/// # Errors
///
/// Returns `SerializationError` for invalid JSON and `InvalidFormat` for a
/// row without a name
pub fn parse_catalog(json: &str) -> AppResult<Vec<SupplementRecord>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &Map<String, Value>) -> AppResult<SupplementRecord> {
    let name = row
        .get(NAME_COLUMN)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::invalid_format(format!("Catalog row {index} has no '{NAME_COLUMN}'"))
                .with_resource_id(index.to_string())
        })?;

    let mut record = SupplementRecord::new(name)
        .with_purchase_link(text_cell(row.get(PURCHASE_LINK_COLUMN)))
        .with_image_link(text_cell(row.get(IMAGE_LINK_COLUMN)))
        .with_price(text_cell(row.get(PRICE_COLUMN)));

    for (header, value) in row {
        if matches!(
            header.as_str(),
            NAME_COLUMN | PURCHASE_LINK_COLUMN | IMAGE_LINK_COLUMN | PRICE_COLUMN
        ) {
            continue;
        }
        match NutrientColumn::from_header(header) {
            Some(column) => record = record.with_nutrient(column, coerce_amount(value)),
            None => debug!(row = index, column = %header, "Ignoring unknown catalog column"),
        }
    }
    Ok(record)
}

/// Lenient numeric coercion for a nutrient cell.
///
/// Numbers pass through, strings accept a comma or dot decimal separator,
/// and everything else (including non-finite values) is `None`.
#[must_use]
pub fn coerce_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|amount| amount.is_finite())
}

fn text_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}
