// ABOUTME: Recommendation output models returned by the engine facade
// ABOUTME: DeficiencyCount and RecommendationReport with serde support for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use super::{Demographics, RankedSupplement};
use crate::reference::Deficiency;
use serde::{Deserialize, Serialize};

/// How many reported symptoms pointed at a deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficiencyCount {
    /// Deficiency
    pub deficiency: Deficiency,
    /// Number of symptom hits
    pub count: u32,
}

/// Complete answer to one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Profile the report was computed for
    pub demographics: Demographics,
    /// Deficiencies by descending symptom count
    pub deficiencies: Vec<DeficiencyCount>,
    /// Dietary advice, one sentence per deficiency
    pub general_recommendation: String,
    /// Ranked short-list, best first
    pub ranked_supplements: Vec<RankedSupplement>,
    /// Product, age, and symptom specific advice
    pub specific_recommendations: Vec<String>,
    /// "Why this product" rationale lines
    pub why_this_product: Vec<String>,
}
