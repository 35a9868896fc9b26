// ABOUTME: Supplement recommendation engine for NutriSync
// ABOUTME: Deficiency analysis, RDI resolution, scoring, ranking, explanation, and wearable metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

#![deny(unsafe_code)]

//! # NutriSync Intelligence
//!
//! The recommendation pipeline, leaves first:
//!
//! - **catalog**: demographic bucket index over the supplement table
//! - **`deficiency_analyzer`**: symptoms to counts to adjusted severities
//! - **rdi**: daily intake targets for a profile
//! - **scorer**: raw supplement scores
//! - **ranker**: normalization, filtering, top-N
//! - **explainer**: human-readable advice for the short-list
//! - **`recommendation_engine`**: facade running the whole pipeline
//! - **wearable**: averages of wearable metrics against targets

/// Demographic bucket index over the supplement catalog
pub mod catalog;
/// Engine configuration with environment overrides
pub mod config;
/// Symptom analysis and demographic severity adjustment
pub mod deficiency_analyzer;
/// Short-list advice text
pub mod explainer;
/// Score normalization and top-N selection
pub mod ranker;
/// Daily intake target resolution
pub mod rdi;
/// Recommendation pipeline facade
pub mod recommendation_engine;
/// Raw supplement scoring
pub mod scorer;
/// Wearable metrics analysis
pub mod wearable;

pub use catalog::SupplementCatalog;
pub use config::IntelligenceConfig;
pub use deficiency_analyzer::{
    adjust_for_demographics, analyze_symptoms, general_recommendation, DeficiencyScores,
};
pub use explainer::{interpret_scores_and_recommend, Explanation};
pub use ranker::rank_supplements;
pub use rdi::{get_rdi, RdiTable};
pub use recommendation_engine::RecommendationEngine;
pub use scorer::{score_supplements, ScoredSupplement};
pub use wearable::analyze_wearable;
