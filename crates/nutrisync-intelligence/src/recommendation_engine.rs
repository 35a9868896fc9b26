// ABOUTME: Supplement recommendation engine facade running the full scoring pipeline
// ABOUTME: Validates demographics, analyzes symptoms, scores, ranks, and explains per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Supplement recommendation engine
//!
//! The engine owns an indexed [`SupplementCatalog`] and a copy of the
//! recommendation configuration. Both are read-only after construction, so a
//! single engine can serve concurrent requests through `&self`.

use crate::catalog::SupplementCatalog;
use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::deficiency_analyzer::{
    adjust_for_demographics, analyze_symptoms, general_recommendation, parse_symptoms,
    DeficiencyScores,
};
use crate::explainer::interpret_scores_and_recommend;
use crate::ranker::rank_supplements;
use crate::rdi::get_rdi;
use crate::scorer::score_supplements;
use nutrisync_core::errors::AppResult;
use nutrisync_core::models::{Demographics, RecommendationReport, SupplementRecord};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// Supplement recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: SupplementCatalog,
    config: RecommendationEngineConfig,
}

impl RecommendationEngine {
    /// Create an engine over a catalog using the global configuration
    #[must_use]
    pub fn new(records: Vec<SupplementRecord>) -> Self {
        let global_config = IntelligenceConfig::global();
        Self::with_config(records, global_config.recommendation.clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(records: Vec<SupplementRecord>, config: RecommendationEngineConfig) -> Self {
        Self {
            catalog: SupplementCatalog::new(records),
            config,
        }
    }

    /// Indexed catalog
    #[must_use]
    pub const fn catalog(&self) -> &SupplementCatalog {
        &self.catalog
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Recommend supplements for reported symptoms and a demographic profile.
    ///
    /// Unknown symptoms are ignored. An empty short-list is a normal outcome
    /// and yields the fallback advice.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an age outside 0 to 120 and
    /// `InvalidInput` for an unknown gender or a pregnant male profile.
    pub fn recommend<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        age: i64,
        gender: &str,
        pregnant: bool,
    ) -> AppResult<RecommendationReport> {
        let request_id = Uuid::new_v4();
        let span = info_span!("recommend", %request_id);
        let _guard = span.enter();

        let demographics = Demographics::parse(age, gender, pregnant).map_err(|e| {
            warn!(error = %e, "Rejected recommendation request");
            e.with_request_id(request_id.to_string())
        })?;
        Ok(self.recommend_for(symptoms, &demographics))
    }

    /// Run the pipeline for an already validated profile
    #[must_use]
    pub fn recommend_for<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        demographics: &Demographics,
    ) -> RecommendationReport {
        let symptoms = parse_symptoms(symptoms);
        let deficiencies = analyze_symptoms(&symptoms);
        let general = general_recommendation(&deficiencies);

        let mut scores = DeficiencyScores::from_counts(&deficiencies);
        adjust_for_demographics(&mut scores, demographics);

        let rdi = get_rdi(demographics);
        let candidates = self.catalog.relevant_supplements(demographics);
        debug!(
            deficiencies = deficiencies.len(),
            candidates = candidates.len(),
            "Scoring candidate supplements"
        );
        let scored = score_supplements(
            &scores,
            &rdi,
            &candidates,
            demographics,
            &self.config.affinity,
        );
        let ranked = rank_supplements(scored, &self.config.ranking);

        let explanation = interpret_scores_and_recommend(
            &ranked,
            &symptoms,
            demographics,
            &self.config.explanation,
        );
        info!(
            age = demographics.age,
            gender = %demographics.gender,
            pregnant = demographics.pregnant,
            recommended = ranked.len(),
            "Generated supplement recommendation"
        );

        RecommendationReport {
            demographics: *demographics,
            deficiencies,
            general_recommendation: general,
            ranked_supplements: ranked,
            specific_recommendations: explanation.specific_recommendations,
            why_this_product: explanation.why_this_product,
        }
    }
}
