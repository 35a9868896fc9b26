// ABOUTME: Recommended daily intake tables keyed by nutrient column
// ABOUTME: Base adult targets plus child, pregnancy, and older-adult override sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Recommended Daily Intake reference values.
//!
//! Units follow the column headers (g, mg or µg per day).

use super::nutrients::NutrientColumn;

use NutrientColumn as C;

/// Baseline adult targets, 22 columns
pub const BASE_RDI: [(NutrientColumn, f64); 22] = [
    (C::Protein, 50.0),
    (C::Iron, 18.0),
    (C::Magnesium, 400.0),
    (C::Potassium, 3500.0),
    (C::Thiamin, 1.2),
    (C::VitaminB12, 2.4),
    (C::VitaminC, 90.0),
    (C::Zinc, 11.0),
    (C::Calcium, 1000.0),
    (C::FolicAcid, 400.0),
    (C::DietaryFolateEquivalents, 400.0),
    (C::VitaminARetinolEquivalents, 900.0),
    (C::Riboflavin, 1.3),
    (C::Niacin, 16.0),
    (C::VitaminB6, 1.3),
    (C::VitaminD, 15.0),
    (C::VitaminE, 15.0),
    (C::Iodine, 150.0),
    (C::Phosphorus, 700.0),
    (C::Selenium, 55.0),
    (C::DietaryFibre, 30.0),
    (C::LongChainOmega3, 250.0),
];

/// Replacement targets for children under 9
pub const CHILD_RDI: [(NutrientColumn, f64); 11] = [
    (C::Protein, 19.0),
    (C::Iron, 10.0),
    (C::Magnesium, 130.0),
    (C::Potassium, 2300.0),
    (C::Thiamin, 0.6),
    (C::VitaminB12, 1.2),
    (C::VitaminC, 25.0),
    (C::Zinc, 5.0),
    (C::Calcium, 700.0),
    (C::FolicAcid, 200.0),
    (C::DietaryFolateEquivalents, 200.0),
];

/// Replacement targets during pregnancy
pub const PREGNANCY_RDI: [(NutrientColumn, f64); 11] = [
    (C::Protein, 71.0),
    (C::Iron, 27.0),
    (C::Magnesium, 350.0),
    (C::Potassium, 2900.0),
    (C::Thiamin, 1.4),
    (C::VitaminB12, 2.6),
    (C::VitaminC, 85.0),
    (C::Zinc, 11.0),
    (C::Calcium, 1000.0),
    (C::FolicAcid, 600.0),
    (C::DietaryFolateEquivalents, 600.0),
];

/// Children below this age use [`CHILD_RDI`]
pub const CHILD_RDI_MAX_AGE_EXCLUSIVE: u32 = 9;

/// Adults from this age use the older-adult overrides
pub const OLDER_ADULT_MIN_AGE: u32 = 51;

/// Older adults from this age get the higher vitamin D target
pub const ELDERLY_VITAMIN_D_MIN_AGE: u32 = 70;

/// Older-adult calcium target (mg)
pub const OLDER_ADULT_CALCIUM_MG: f64 = 1200.0;

/// Vitamin D target for ages 51 to 69 (µg)
pub const OLDER_ADULT_VITAMIN_D_UG: f64 = 15.0;

/// Vitamin D target from age 70 (µg)
pub const ELDERLY_VITAMIN_D_UG: f64 = 20.0;

/// Iron target for women aged 19 to 50 (mg)
pub const FERTILE_FEMALE_IRON_MG: f64 = 18.0;

/// Zinc target for men over 50 (mg)
pub const OLDER_MALE_ZINC_MG: f64 = 11.0;
