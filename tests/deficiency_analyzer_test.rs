// ABOUTME: Integration tests for symptom analysis and demographic severity adjustment
// ABOUTME: Covers counting, ordering, compounding multipliers, and dietary advice text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisync::intelligence::deficiency_analyzer::{parse_symptoms, NO_DEFICIENCIES_MESSAGE};
use nutrisync::intelligence::{
    adjust_for_demographics, analyze_symptoms, general_recommendation, DeficiencyScores,
};
use nutrisync::models::{DeficiencyCount, Gender};
use nutrisync::reference::{Deficiency, Symptom};

mod common;
use common::{assert_close, init_test_logging, profile};

// ============================================================================
// SYMPTOM PARSING
// ============================================================================

#[test]
fn test_parse_symptoms_ignores_unknown_and_case() {
    init_test_logging();
    let symptoms = parse_symptoms(&["fatigue", "  Brain Fog ", "Headache", ""]);
    assert_eq!(symptoms, vec![Symptom::Fatigue, Symptom::BrainFog]);
}

#[test]
fn test_symptom_vocabulary_is_stable() {
    let names: Vec<&str> = Symptom::ALL.iter().map(|s| s.name()).collect();

    assert_eq!(names.len(), 10);
    assert_eq!(names.first(), Some(&"Fatigue"));
    assert_eq!(names.last(), Some(&"Brain fog"));
    assert!(Symptom::ALL
        .iter()
        .all(|s| Symptom::from_name(s.name()) == Some(*s)));
}

#[test]
fn test_parse_symptoms_keeps_repeats() {
    let symptoms = parse_symptoms(&["Fatigue", "Fatigue"]);
    assert_eq!(symptoms, vec![Symptom::Fatigue, Symptom::Fatigue]);
}

// ============================================================================
// DEFICIENCY COUNTING
// ============================================================================

#[test]
fn test_fatigue_maps_to_four_deficiencies() {
    let counts = analyze_symptoms(&[Symptom::Fatigue]);
    let deficiencies: Vec<Deficiency> = counts.iter().map(|c| c.deficiency).collect();

    assert_eq!(
        deficiencies,
        vec![
            Deficiency::Iron,
            Deficiency::VitaminB12,
            Deficiency::VitaminB6,
            Deficiency::Magnesium,
        ]
    );
    assert!(counts.iter().all(|c| c.count == 1));
}

#[test]
fn test_shared_deficiencies_sort_first_with_stable_ties() {
    let counts = analyze_symptoms(&[Symptom::Fatigue, Symptom::BrainFog]);

    assert_eq!(
        counts,
        vec![
            DeficiencyCount {
                deficiency: Deficiency::Iron,
                count: 2
            },
            DeficiencyCount {
                deficiency: Deficiency::VitaminB12,
                count: 2
            },
            DeficiencyCount {
                deficiency: Deficiency::VitaminB6,
                count: 1
            },
            DeficiencyCount {
                deficiency: Deficiency::Magnesium,
                count: 1
            },
            DeficiencyCount {
                deficiency: Deficiency::Omega3FattyAcids,
                count: 1
            },
        ]
    );
}

#[test]
fn test_counts_sum_to_symptom_mappings() {
    let symptoms = [
        Symptom::Fatigue,
        Symptom::BonePain,
        Symptom::MuscleWeakness,
        Symptom::Fatigue,
    ];
    let counts = analyze_symptoms(&symptoms);

    let total: u32 = counts.iter().map(|c| c.count).sum();
    let expected: usize = symptoms.iter().map(|s| s.deficiencies().len()).sum();
    assert_eq!(total as usize, expected);
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_no_symptoms_yields_no_deficiencies() {
    assert!(analyze_symptoms(&[]).is_empty());
}

// ============================================================================
// DEMOGRAPHIC ADJUSTMENT
// ============================================================================

#[test]
fn test_fertile_female_iron_boost() {
    let counts = analyze_symptoms(&[Symptom::Fatigue]);
    let mut scores = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut scores, &profile(30, Gender::Female, false));

    assert_close(scores.get(Deficiency::Iron), 1.5);
    assert_close(scores.get(Deficiency::Magnesium), 1.0);
}

#[test]
fn test_pregnancy_compounds_with_fertile_age() {
    let counts = analyze_symptoms(&[Symptom::Fatigue]);
    let mut scores = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut scores, &profile(30, Gender::Female, true));

    assert_close(scores.get(Deficiency::Iron), 2.7);
}

#[test]
fn test_elderly_rules_stack_on_older_adult_rules() {
    let counts = analyze_symptoms(&[Symptom::BonePain, Symptom::BrainFog]);
    let mut scores = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut scores, &profile(75, Gender::Male, false));

    assert_close(scores.get(Deficiency::Calcium), 1.2 * 1.3);
    assert_close(scores.get(Deficiency::VitaminD), 1.2 * 1.5);
    assert_close(scores.get(Deficiency::VitaminB12), 1.3 * 1.4);
}

#[test]
fn test_adjustment_never_introduces_deficiencies() {
    let counts = analyze_symptoms(&[Symptom::PoorNightVision]);
    let mut scores = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut scores, &profile(30, Gender::Female, true));

    assert!(!scores.contains(Deficiency::Iron));
    assert_close(scores.get(Deficiency::Iron), 0.0);
    assert_eq!(scores.len(), 1);
}

#[test]
fn test_adjusting_twice_compounds() {
    let counts = analyze_symptoms(&[Symptom::Fatigue]);
    let teen = profile(15, Gender::Male, false);

    let mut once = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut once, &teen);
    let mut twice = once.clone();
    adjust_for_demographics(&mut twice, &teen);

    assert_close(once.get(Deficiency::Magnesium), 1.1);
    assert_close(twice.get(Deficiency::Magnesium), 1.1 * 1.1);
}

#[test]
fn test_fresh_copies_adjust_identically() {
    let counts = analyze_symptoms(&[Symptom::BonePain]);
    let child = profile(6, Gender::Female, false);

    let mut first = DeficiencyScores::from_counts(&counts);
    let mut second = DeficiencyScores::from_counts(&counts);
    adjust_for_demographics(&mut first, &child);
    adjust_for_demographics(&mut second, &child);

    assert_eq!(first, second);
    assert_close(first.get(Deficiency::VitaminD), 1.3);
}

// ============================================================================
// GENERAL RECOMMENDATION
// ============================================================================

#[test]
fn test_general_recommendation_without_deficiencies() {
    assert_eq!(general_recommendation(&[]), NO_DEFICIENCIES_MESSAGE);
}

#[test]
fn test_general_recommendation_uses_advice_and_generic_fallback() {
    let counts = analyze_symptoms(&[Symptom::Fatigue]);
    let text = general_recommendation(&counts);

    assert!(text.starts_with("Iron supplementation may be beneficial."));
    assert!(text.contains(
        "Address potential Vitamin B6 deficiency. Consult a healthcare professional for specific dietary advice or supplementation."
    ));
    assert!(text.ends_with("Good sources include nuts, seeds, and leafy greens."));
}

// ============================================================================
// AGE BOUNDARIES
// ============================================================================

fn adjusted(symptom: Symptom, age: u32, gender: Gender) -> DeficiencyScores {
    let mut scores = DeficiencyScores::from_counts(&analyze_symptoms(&[symptom]));
    adjust_for_demographics(&mut scores, &profile(age, gender, false));
    scores
}

#[test]
fn test_female_iron_across_age_boundaries() {
    // adolescent x1.2 covers 9..=18, fertile x1.5 covers 13..=50
    let cases = [
        (8, 1.1),
        (9, 1.2),
        (12, 1.2),
        (13, 1.8),
        (18, 1.8),
        (19, 1.5),
        (50, 1.5),
        (51, 1.0),
    ];

    for (age, expected) in cases {
        let iron = adjusted(Symptom::Fatigue, age, Gender::Female).get(Deficiency::Iron);
        assert!(
            (iron - expected).abs() < common::EPSILON,
            "age {age}: expected {expected}, got {iron}"
        );
    }
}

#[test]
fn test_older_adult_boundaries() {
    let cases = [
        (Deficiency::VitaminB12, Symptom::BrainFog, 50, 1.0),
        (Deficiency::VitaminB12, Symptom::BrainFog, 51, 1.3),
        (Deficiency::VitaminB12, Symptom::BrainFog, 70, 1.3),
        (Deficiency::VitaminB12, Symptom::BrainFog, 71, 1.3 * 1.4),
        (Deficiency::Zinc, Symptom::WeakenedImmuneSystem, 50, 1.0),
        (Deficiency::Zinc, Symptom::WeakenedImmuneSystem, 51, 1.1),
        (Deficiency::Calcium, Symptom::BonePain, 8, 1.2),
        (Deficiency::Calcium, Symptom::BonePain, 9, 1.5),
        (Deficiency::Calcium, Symptom::BonePain, 18, 1.5),
        (Deficiency::Calcium, Symptom::BonePain, 19, 1.0),
    ];

    for (deficiency, symptom, age, expected) in cases {
        let severity = adjusted(symptom, age, Gender::Male).get(deficiency);
        assert!(
            (severity - expected).abs() < common::EPSILON,
            "{deficiency} at age {age}: expected {expected}, got {severity}"
        );
    }
}
