// ABOUTME: Normalizes raw supplement scores, drops weak matches, and selects the top entries
// ABOUTME: Ordering is descending score with ties broken by ascending name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::config::intelligence::RankingConfig;
use crate::scorer::ScoredSupplement;
use nutrisync_core::models::RankedSupplement;
use std::cmp::Ordering;

/// Scale raw scores so the best candidate gets `scale`.
///
/// With no candidates, or when the best raw score is not positive, the
/// denominator is 1.
#[must_use]
pub fn normalize_scores(scored: Vec<ScoredSupplement>, scale: f64) -> Vec<RankedSupplement> {
    let max = scored
        .iter()
        .map(|s| s.raw_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let denominator = if max > 0.0 { max } else { 1.0 };

    scored
        .into_iter()
        .map(|s| RankedSupplement {
            score: s.raw_score / denominator * scale,
            name: s.name,
            purchase_link: s.purchase_link,
            image_link: s.image_link,
            price: s.price,
        })
        .collect()
}

/// Total order used for the short-list
#[must_use]
pub fn compare_ranked(a: &RankedSupplement, b: &RankedSupplement) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.name.cmp(&b.name))
}

/// Normalize, keep scores strictly above the threshold, sort, take `top_n`
#[must_use]
pub fn rank_supplements(
    scored: Vec<ScoredSupplement>,
    config: &RankingConfig,
) -> Vec<RankedSupplement> {
    let mut ranked: Vec<RankedSupplement> = normalize_scores(scored, config.normalized_scale)
        .into_iter()
        .filter(|s| s.score > config.min_normalized_score)
        .collect();
    ranked.sort_by(compare_ranked);
    ranked.truncate(config.top_n);
    ranked
}
