// ABOUTME: End-to-end tests for the recommendation engine facade
// ABOUTME: Runs realistic profiles through the full pipeline and checks input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisync::errors::ErrorCode;
use nutrisync::intelligence::config::intelligence::{RankingConfig, RecommendationEngineConfig};
use nutrisync::intelligence::deficiency_analyzer::NO_DEFICIENCIES_MESSAGE;
use nutrisync::intelligence::explainer::{CLOSING_MESSAGE, NO_MATCH_MESSAGE};
use nutrisync::intelligence::RecommendationEngine;
use nutrisync::models::{Gender, RecommendationReport};
use nutrisync::reference::Deficiency;
use std::thread;

mod common;
use common::{assert_close, init_test_logging, profile, sample_catalog};

fn engine() -> RecommendationEngine {
    init_test_logging();
    RecommendationEngine::with_config(sample_catalog(), RecommendationEngineConfig::default())
}

fn ranked_names(report: &RecommendationReport) -> Vec<&str> {
    report
        .ranked_supplements
        .iter()
        .map(|s| s.name.as_str())
        .collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_fatigued_woman() {
    let report = engine()
        .recommend(&["Fatigue"], 30, "female", false)
        .unwrap();

    assert_eq!(report.deficiencies[0].deficiency, Deficiency::Iron);
    assert_eq!(
        ranked_names(&report),
        vec!["Blackmores Women's Iron", "GNC Magnesium 500"]
    );
    assert_close(report.ranked_supplements[0].score, 100.0);
    assert_close(report.ranked_supplements[1].score, 1.25 / 2.3 * 100.0);
    assert_eq!(report.ranked_supplements[1].price, "24.99AUD");

    let specific = &report.specific_recommendations;
    assert_eq!(specific.len(), 5);
    assert_eq!(
        specific[0],
        "Highly Recommended: Blackmores Women's Iron is an excellent match for your needs."
    );
    assert!(specific[1].starts_with("Adult women"));
    assert!(specific[2].starts_with("To address fatigue"));
    assert!(specific[3].starts_with("While Blackmores Women's Iron is the top recommendation"));
    assert_eq!(specific[4], CLOSING_MESSAGE);

    assert_eq!(report.why_this_product.len(), 1);
    assert!(report.why_this_product[0].starts_with("GNC Magnesium 500:"));
}

#[test]
fn test_pregnant_woman_prefers_prenatal_iron() {
    let report = engine()
        .recommend(&["fatigue"], 30, "Female", true)
        .unwrap();

    assert_eq!(
        ranked_names(&report),
        vec!["Elevit Prenatal Multi", "Blackmores Women's Iron"]
    );
    assert!(report.specific_recommendations[1].starts_with("During pregnancy"));
}

#[test]
fn test_older_man_with_fatigue() {
    let report = engine().recommend(&["Fatigue"], 60, "male", false).unwrap();

    assert_eq!(
        ranked_names(&report),
        vec!["GNC Magnesium 500", "Pfeiffer Calcium & Magnesium"]
    );
    assert_close(report.ranked_supplements[1].score, 60.0);
    assert_eq!(report.why_this_product.len(), 2);
}

#[test]
fn test_child_with_bone_pain() {
    let report = engine().recommend(&["Bone pain"], 8, "male", false).unwrap();

    assert_eq!(ranked_names(&report), vec!["Kids Smart Calcium"]);
    assert_eq!(report.specific_recommendations.len(), 2);
    assert!(report.specific_recommendations[1].starts_with("For children"));
}

#[test]
fn test_no_symptoms_gives_fallback() {
    let report = engine()
        .recommend::<&str>(&[], 30, "female", false)
        .unwrap();

    assert!(report.deficiencies.is_empty());
    assert_eq!(report.general_recommendation, NO_DEFICIENCIES_MESSAGE);
    assert!(report.ranked_supplements.is_empty());
    assert_eq!(report.specific_recommendations, vec![NO_MATCH_MESSAGE]);
}

#[test]
fn test_unknown_symptoms_are_ignored() {
    let with_noise = engine()
        .recommend(&["Fatigue", "Hiccups"], 30, "female", false)
        .unwrap();
    let without = engine().recommend(&["Fatigue"], 30, "female", false).unwrap();

    assert_eq!(with_noise.deficiencies, without.deficiencies);
    assert_eq!(ranked_names(&with_noise), ranked_names(&without));
}

#[test]
fn test_custom_top_n() {
    let config = RecommendationEngineConfig {
        ranking: RankingConfig {
            top_n: 1,
            ..RankingConfig::default()
        },
        ..RecommendationEngineConfig::default()
    };
    let engine = RecommendationEngine::with_config(sample_catalog(), config);
    let report = engine.recommend(&["Fatigue"], 30, "female", false).unwrap();

    assert_eq!(ranked_names(&report), vec!["Blackmores Women's Iron"]);
    assert!(!report
        .specific_recommendations
        .iter()
        .any(|line| line == CLOSING_MESSAGE));
}

#[test]
fn test_recommend_for_matches_recommend() {
    let engine = engine();
    let direct = engine.recommend_for(&["Brain fog"], &profile(45, Gender::Male, false));
    let parsed = engine.recommend(&["Brain fog"], 45, "male", false).unwrap();

    assert_eq!(direct.specific_recommendations, parsed.specific_recommendations);
    assert_eq!(direct.demographics, parsed.demographics);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_age_out_of_range() {
    let engine = engine();

    let too_old = engine.recommend(&["Fatigue"], 121, "female", false).unwrap_err();
    assert_eq!(too_old.code, ErrorCode::ValueOutOfRange);
    assert!(too_old.context.request_id.is_some());

    let negative = engine.recommend(&["Fatigue"], -1, "female", false).unwrap_err();
    assert_eq!(negative.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_age_bounds_are_inclusive() {
    let engine = engine();
    assert!(engine.recommend(&["Fatigue"], 0, "male", false).is_ok());
    assert!(engine.recommend(&["Fatigue"], 120, "male", false).is_ok());
}

#[test]
fn test_invalid_gender() {
    let err = engine()
        .recommend(&["Fatigue"], 30, "other", false)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_pregnant_male_rejected() {
    let err = engine()
        .recommend(&["Fatigue"], 30, "male", true)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RecommendationEngine>();

    let engine = engine();
    let baseline = engine.recommend(&["Fatigue"], 30, "female", false).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.recommend(&["Fatigue"], 30, "female", false)))
            .collect();
        for handle in handles {
            let report = handle.join().unwrap().unwrap();
            assert_eq!(report.specific_recommendations, baseline.specific_recommendations);
        }
    });
}
