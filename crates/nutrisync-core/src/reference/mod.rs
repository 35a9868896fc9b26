// ABOUTME: Static nutrient reference data shared by every engine stage
// ABOUTME: Re-exports symptom, deficiency, nutrient column, RDI, and adjustment tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Nutrient reference tables.
//!
//! Lookups are modeled as enums with `const fn` accessors so a misspelled
//! nutrient is a compile error rather than a silently empty lookup.

/// Demographic severity multipliers
pub mod adjustments;
/// Nutrient columns and deficiency vocabulary
pub mod nutrients;
/// Recommended daily intake tables
pub mod rdi;
/// Symptom vocabulary
pub mod symptoms;

pub use adjustments::{AdjustmentRule, RuleCondition, DEMOGRAPHIC_ADJUSTMENTS};
pub use nutrients::{Deficiency, NutrientColumn};
pub use symptoms::Symptom;
