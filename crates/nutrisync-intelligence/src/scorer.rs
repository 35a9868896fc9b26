// ABOUTME: Scores candidate supplements against weighted deficiencies and daily intake targets
// ABOUTME: Sums RDI coverage per mapped nutrient column, then applies a name-based demographic boost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::config::intelligence::AffinityConfig;
use crate::deficiency_analyzer::DeficiencyScores;
use crate::rdi::RdiTable;
use nutrisync_core::models::{Demographics, SupplementRecord};
use std::collections::BTreeMap;

/// A candidate with its raw, unnormalized score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSupplement {
    /// Product display name
    pub name: String,
    /// Raw score (sum of coverage times severity, boosted)
    pub raw_score: f64,
    /// Where to buy the product
    pub purchase_link: String,
    /// Product image URL
    pub image_link: String,
    /// Price string
    pub price: String,
}

/// Coverage of the detected deficiencies by one supplement.
///
/// Every mapped column with a finite positive amount and an RDI target adds
/// `amount / target * severity`. Anything else adds nothing.
#[must_use]
pub fn deficiency_coverage(
    supplement: &SupplementRecord,
    scores: &DeficiencyScores,
    rdi: &RdiTable,
) -> f64 {
    scores
        .iter()
        .flat_map(|(deficiency, severity)| {
            deficiency
                .nutrient_columns()
                .iter()
                .map(move |column| (*column, severity))
        })
        .filter_map(|(column, severity)| {
            let amount = supplement
                .amount(column)
                .filter(|amount| amount.is_finite() && *amount > 0.0)?;
            let target = rdi.target(column).filter(|target| *target > 0.0)?;
            Some(amount / target * severity)
        })
        .sum()
}

/// Boost for a product whose name targets the caller's demographic.
///
/// Only the first matching branch applies: women's products for women, then
/// men's products for men, then pregnancy products for pregnant callers.
#[must_use]
pub fn affinity_multiplier(name: &str, profile: &Demographics, affinity: &AffinityConfig) -> f64 {
    let name = name.to_lowercase();
    if profile.is_female() && name.contains("women") {
        affinity.women_multiplier
    } else if profile.is_male() && name.contains("men") {
        affinity.men_multiplier
    } else if profile.pregnant && name.contains("pregnancy") {
        affinity.pregnancy_multiplier
    } else {
        1.0
    }
}

/// Raw scores for every candidate.
///
/// Candidates sharing a display name collapse into one entry; the last one
/// wins. Output is ordered by name.
#[must_use]
pub fn score_supplements(
    scores: &DeficiencyScores,
    rdi: &RdiTable,
    candidates: &[&SupplementRecord],
    profile: &Demographics,
    affinity: &AffinityConfig,
) -> Vec<ScoredSupplement> {
    let mut scored: BTreeMap<&str, ScoredSupplement> = BTreeMap::new();
    for supplement in candidates {
        let raw_score = deficiency_coverage(supplement, scores, rdi)
            * affinity_multiplier(&supplement.name, profile, affinity);
        scored.insert(
            &supplement.name,
            ScoredSupplement {
                name: supplement.name.clone(),
                raw_score,
                purchase_link: supplement.purchase_link.clone(),
                image_link: supplement.image_link.clone(),
                price: supplement.price.clone(),
            },
        );
    }
    scored.into_values().collect()
}
