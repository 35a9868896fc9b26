// ABOUTME: Maps reported symptoms to ranked deficiency counts and demographic-adjusted severities
// ABOUTME: Also produces the general dietary recommendation text for the detected deficiencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Deficiency analysis
//!
//! Three steps, each usable on its own:
//!
//! 1. [`analyze_symptoms`] counts how many reported symptoms point at each
//!    deficiency.
//! 2. [`DeficiencyScores::from_counts`] turns the counts into severities and
//!    [`adjust_for_demographics`] scales them with the ordered rule table in
//!    [`DEMOGRAPHIC_ADJUSTMENTS`].
//! 3. [`general_recommendation`] renders one advice sentence per deficiency.

use nutrisync_core::models::{DeficiencyCount, Demographics};
use nutrisync_core::reference::{Deficiency, Symptom, DEMOGRAPHIC_ADJUSTMENTS};
use std::collections::BTreeMap;
use tracing::debug;

/// Returned when no symptom maps to a known deficiency
pub const NO_DEFICIENCIES_MESSAGE: &str =
    "No specific deficiencies identified based on the given symptoms.";

/// Parse symptom identifiers, skipping the ones outside the vocabulary
#[must_use]
pub fn parse_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<Symptom> {
    symptoms
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let parsed = Symptom::from_name(raw);
            if parsed.is_none() {
                debug!(symptom = raw, "Ignoring unknown symptom");
            }
            parsed
        })
        .collect()
}

/// Count deficiency hits across the reported symptoms.
///
/// Every occurrence counts, so a repeated symptom counts twice. The result
/// is sorted by descending count; ties keep the order in which the
/// deficiencies were first seen.
#[must_use]
pub fn analyze_symptoms(symptoms: &[Symptom]) -> Vec<DeficiencyCount> {
    let mut counts: Vec<DeficiencyCount> = Vec::new();
    for deficiency in symptoms.iter().flat_map(|symptom| symptom.deficiencies()) {
        match counts.iter_mut().find(|c| c.deficiency == *deficiency) {
            Some(entry) => entry.count += 1,
            None => counts.push(DeficiencyCount {
                deficiency: *deficiency,
                count: 1,
            }),
        }
    }
    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Per-request severity for each detected deficiency
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeficiencyScores {
    severities: BTreeMap<Deficiency, f64>,
}

impl DeficiencyScores {
    /// Seed severities from symptom counts
    #[must_use]
    pub fn from_counts(counts: &[DeficiencyCount]) -> Self {
        Self {
            severities: counts
                .iter()
                .map(|c| (c.deficiency, f64::from(c.count)))
                .collect(),
        }
    }

    /// Set a severity (builder style)
    #[must_use]
    pub fn with_severity(mut self, deficiency: Deficiency, severity: f64) -> Self {
        self.severities.insert(deficiency, severity);
        self
    }

    /// Severity of a deficiency, zero when it was not detected
    #[must_use]
    pub fn get(&self, deficiency: Deficiency) -> f64 {
        self.severities.get(&deficiency).copied().unwrap_or(0.0)
    }

    /// Whether the deficiency was detected
    #[must_use]
    pub fn contains(&self, deficiency: Deficiency) -> bool {
        self.severities.contains_key(&deficiency)
    }

    /// Detected deficiencies and their severities
    pub fn iter(&self) -> impl Iterator<Item = (Deficiency, f64)> + '_ {
        self.severities.iter().map(|(d, s)| (*d, *s))
    }

    /// Number of detected deficiencies
    #[must_use]
    pub fn len(&self) -> usize {
        self.severities.len()
    }

    /// Whether nothing was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.severities.is_empty()
    }

    fn scale(&mut self, deficiency: Deficiency, factor: f64) {
        // undetected deficiencies stay at zero
        if let Some(severity) = self.severities.get_mut(&deficiency) {
            *severity *= factor;
        }
    }
}

/// Scale severities with every matching demographic rule, in table order.
///
/// Each rule multiplies the value left by the previous ones, so calling this
/// twice on the same scores compounds the factors.
pub fn adjust_for_demographics(scores: &mut DeficiencyScores, profile: &Demographics) {
    for rule in DEMOGRAPHIC_ADJUSTMENTS
        .iter()
        .filter(|rule| rule.condition.matches(profile))
    {
        debug!(condition = ?rule.condition, "Applying demographic adjustment");
        for &(deficiency, factor) in rule.factors {
            scores.scale(deficiency, factor);
        }
    }
}

/// Dietary advice for the detected deficiencies, one sentence each
#[must_use]
pub fn general_recommendation(deficiencies: &[DeficiencyCount]) -> String {
    if deficiencies.is_empty() {
        return NO_DEFICIENCIES_MESSAGE.to_owned();
    }
    deficiencies
        .iter()
        .map(|c| {
            c.deficiency.dietary_advice().map_or_else(
                || {
                    format!(
                        "Address potential {} deficiency. Consult a healthcare professional for specific dietary advice or supplementation.",
                        c.deficiency.name()
                    )
                },
                str::to_owned,
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
