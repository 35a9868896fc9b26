// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging, a sample supplement catalog, and profile helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrisync`

use nutrisync::models::{Demographics, Gender, SupplementRecord};
use nutrisync::reference::NutrientColumn;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default is quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Validated profile, panicking on invalid input
pub fn profile(age: u32, gender: Gender, pregnant: bool) -> Demographics {
    Demographics::new(age, gender, pregnant).unwrap()
}

/// Small catalog covering every demographic bucket.
///
/// | index | name                         | bucket        |
/// |-------|------------------------------|---------------|
/// | 0     | GNC Magnesium 500            | women + men   |
/// | 1     | Pfeiffer Calcium & Magnesium | women + men   |
/// | 2     | Blackmores Women's Iron      | women         |
/// | 3     | Swisse Men's Zinc            | men           |
/// | 4     | Elevit Prenatal Multi        | pregnancy     |
/// | 5     | Kids Smart Calcium           | child         |
/// | 6     | Teen Multi Boost             | teen          |
pub fn sample_catalog() -> Vec<SupplementRecord> {
    vec![
        SupplementRecord::new("GNC Magnesium 500")
            .with_nutrient(NutrientColumn::Magnesium, Some(500.0))
            .with_price("24.99AUD")
            .with_purchase_link("https://shop.example/gnc-magnesium-500")
            .with_image_link("https://shop.example/gnc-magnesium-500.png"),
        SupplementRecord::new("Pfeiffer Calcium & Magnesium")
            .with_nutrient(NutrientColumn::Calcium, Some(600.0))
            .with_nutrient(NutrientColumn::Magnesium, Some(300.0))
            .with_price("12.50AUD"),
        SupplementRecord::new("Blackmores Women's Iron")
            .with_nutrient(NutrientColumn::Iron, Some(24.0))
            .with_price("18.00AUD"),
        SupplementRecord::new("Swisse Men's Zinc")
            .with_nutrient(NutrientColumn::Zinc, Some(25.0))
            .with_price("15.95AUD"),
        SupplementRecord::new("Elevit Prenatal Multi")
            .with_nutrient(NutrientColumn::Iron, Some(60.0))
            .with_nutrient(NutrientColumn::FolicAcid, Some(800.0))
            .with_price("86.55AUD"),
        SupplementRecord::new("Kids Smart Calcium")
            .with_nutrient(NutrientColumn::Calcium, Some(350.0))
            .with_price("14.00AUD"),
        SupplementRecord::new("Teen Multi Boost")
            .with_nutrient(NutrientColumn::Iron, Some(9.0))
            .with_nutrient(NutrientColumn::VitaminC, Some(100.0))
            .with_price("21.00AUD"),
    ]
}
