// ABOUTME: Turns the ranked short-list into product, age, and symptom specific advice
// ABOUTME: Deterministic text assembly; no scoring happens here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Recommendation explainer
//!
//! Output order of the specific recommendations:
//!
//! 1. "Highly Recommended" lines for top entries at or above the threshold
//! 2. One age-bracket sentence
//! 3. One sentence per reported symptom that has advice
//! 4. With two or more entries, an alternation or alternative hint followed
//!    by the closing reminder

use crate::config::intelligence::ExplanationConfig;
use nutrisync_core::models::{AgeGroup, Demographics, Gender, RankedSupplement};
use nutrisync_core::reference::Symptom;
use serde::{Deserialize, Serialize};

/// Sole recommendation when nothing made the short-list
pub const NO_MATCH_MESSAGE: &str = "Based on the provided information, no specific supplements are recommended. Please consult with a healthcare professional for personalized advice.";

/// Closing reminder appended when two or more products are recommended
pub const CLOSING_MESSAGE: &str = "Remember to maintain a balanced diet alongside any supplementation. Always consult with a healthcare professional before starting any new supplement regimen, especially if you have existing health conditions or are taking medications.";

/// Products with a curated rationale
const PRODUCT_RATIONALES: [(&str, &str); 2] = [
    (
        "GNC Magnesium 500",
        "High-potency (500mg per serving)\nSupports bone and muscle health\nAids nerve function and energy\nMay improve sleep quality",
    ),
    (
        "Pfeiffer Calcium & Magnesium",
        "Balanced calcium and magnesium combo\nPromotes bone density and strength\nSupports muscle and nerve function\nCost-effective for dual mineral needs",
    ),
];

/// Advice assembled for a short-list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Product, age, and symptom specific advice
    pub specific_recommendations: Vec<String>,
    /// "{name}: {rationale}" lines for products with a curated rationale
    pub why_this_product: Vec<String>,
}

/// Curated rationale for a product, if there is one
#[must_use]
pub fn product_rationale(name: &str) -> Option<&'static str> {
    PRODUCT_RATIONALES
        .iter()
        .find(|(product, _)| *product == name)
        .map(|(_, rationale)| *rationale)
}

/// Age-bracket advice sentence
#[must_use]
pub const fn age_group_advice(profile: &Demographics) -> &'static str {
    match (profile.age_group(), profile.gender, profile.pregnant) {
        (AgeGroup::Child, _, _) => "For children, it's crucial to focus on supplements that support growth and development.",
        (AgeGroup::Teen, _, _) => "Teens may benefit from supplements that support bone health, energy, and overall growth.",
        (AgeGroup::Adult, Gender::Female, true) => "During pregnancy, focus on prenatal supplements that provide essential nutrients for both mother and baby.",
        (AgeGroup::Adult, Gender::Female, false) => "Adult women should consider supplements that support bone health, iron levels, and overall wellness.",
        (AgeGroup::Adult, Gender::Male, _) => "Adult men may benefit from supplements that support heart health, muscle function, and overall vitality.",
    }
}

/// Build the specific recommendations and product rationales
#[must_use]
pub fn interpret_scores_and_recommend(
    top: &[RankedSupplement],
    symptoms: &[Symptom],
    profile: &Demographics,
    config: &ExplanationConfig,
) -> Explanation {
    let mut explanation = Explanation::default();
    if top.is_empty() {
        explanation
            .specific_recommendations
            .push(NO_MATCH_MESSAGE.to_owned());
        return explanation;
    }

    for entry in top {
        if entry.score >= config.highly_recommended_score {
            explanation.specific_recommendations.push(format!(
                "Highly Recommended: {} is an excellent match for your needs.",
                entry.name
            ));
        }
        if let Some(rationale) = product_rationale(&entry.name) {
            explanation
                .why_this_product
                .push(format!("{}: {rationale}", entry.name));
        }
    }

    explanation
        .specific_recommendations
        .push(age_group_advice(profile).to_owned());

    let mut advised: Vec<Symptom> = Vec::with_capacity(symptoms.len());
    for symptom in symptoms {
        if advised.contains(symptom) {
            continue;
        }
        advised.push(*symptom);
        if let Some(advice) = symptom.supplement_advice() {
            explanation.specific_recommendations.push(advice.to_owned());
        }
    }

    if let [first, second, ..] = top {
        if first.name != second.name {
            let hint = if first.score - second.score < config.alternation_gap {
                format!(
                    "Consider alternating between {} and {}, as they are both well-suited to your needs.",
                    first.name, second.name
                )
            } else {
                format!(
                    "While {} is the top recommendation, {} could be an alternative option to consider.",
                    first.name, second.name
                )
            };
            explanation.specific_recommendations.push(hint);
        }
        explanation
            .specific_recommendations
            .push(CLOSING_MESSAGE.to_owned());
    }

    explanation
}
