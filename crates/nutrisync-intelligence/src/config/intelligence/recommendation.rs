// ABOUTME: Recommendation engine configuration for supplement ranking
// ABOUTME: Configures short-list size, score filter, name affinity boosts, and explanation thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Recommendation Engine Configuration
//!
//! Provides configuration for supplement ranking: how many products make the
//! short-list, which normalized scores are shown at all, how much a
//! demographic product name boosts a raw score, and when the explainer calls
//! a product highly recommended or suggests alternating two of them.

use nutrisync_core::constants::ranking;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Normalization and short-list selection
    pub ranking: RankingConfig,
    /// Name-based demographic boosts
    pub affinity: AffinityConfig,
    /// Explanation text thresholds
    pub explanation: ExplanationConfig,
}

/// Normalization and selection of the ranked short-list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum number of supplements returned
    pub top_n: usize,
    /// Normalized scores must be strictly greater than this to be kept
    pub min_normalized_score: f64,
    /// Score given to the best candidate after normalization
    pub normalized_scale: f64,
}

/// Multipliers applied when a product name matches the caller's demographic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffinityConfig {
    /// Female caller, name contains "women"
    pub women_multiplier: f64,
    /// Male caller, name contains "men"
    pub men_multiplier: f64,
    /// Pregnant caller, name contains "pregnancy"
    pub pregnancy_multiplier: f64,
}

/// Thresholds used when turning the short-list into advice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationConfig {
    /// Normalized score at or above which a product is "highly recommended"
    pub highly_recommended_score: f64,
    /// The top two products are suggested for alternation below this gap
    pub alternation_gap: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: ranking::DEFAULT_TOP_N,
            min_normalized_score: ranking::DEFAULT_MIN_NORMALIZED_SCORE,
            normalized_scale: ranking::NORMALIZED_SCALE,
        }
    }
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            women_multiplier: 1.15,
            men_multiplier: 1.15,
            pregnancy_multiplier: 1.3,
        }
    }
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            highly_recommended_score: 90.0,
            alternation_gap: 10.0,
        }
    }
}
