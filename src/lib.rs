// ABOUTME: Main library entry point for the NutriSync supplement recommender
// ABOUTME: Wires logging and JSON ingestion around the recommendation engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

#![deny(unsafe_code)]

//! # NutriSync
//!
//! Recommends dietary supplements from self-reported symptoms and a
//! demographic profile, and summarizes wearable health metrics.
//!
//! ## Architecture
//!
//! - **`nutrisync-core`**: errors, models, nutrient reference tables
//! - **`nutrisync-intelligence`**: the recommendation pipeline and its configuration
//! - **this crate**: logging setup, JSON ingestion, and the `nutrisync-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrisync::catalog_loader::load_catalog;
//! use nutrisync::errors::AppResult;
//! use nutrisync::intelligence::RecommendationEngine;
//!
//! fn main() -> AppResult<()> {
//!     let engine = RecommendationEngine::new(load_catalog("supplements.json")?);
//!     let report = engine.recommend(&["Fatigue", "Brain fog"], 30, "female", false)?;
//!     for supplement in &report.ranked_supplements {
//!         println!("{} ({:.1})", supplement.name, supplement.score);
//!     }
//!     Ok(())
//! }
//! ```

/// Supplement catalog ingestion from JSON
pub mod catalog_loader;

/// Structured logging configuration
pub mod logging;

/// Wearable sample ingestion from JSON
pub mod wearable_loader;

pub use nutrisync_core::{constants, errors, models, reference};
pub use nutrisync_intelligence as intelligence;
