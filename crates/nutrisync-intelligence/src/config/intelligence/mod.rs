// ABOUTME: Intelligence module configuration for supplement ranking and wearable analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `recommendation` - Ranking, affinity multipliers, explanation thresholds
//! - `wearable` - Daily targets for wearable metrics
//!
//! Values start from the defaults below and can be overridden with
//! `NUTRISYNC_*` environment variables.

pub mod error;
pub mod recommendation;
pub mod wearable;

pub use error::ConfigError;
pub use recommendation::{
    AffinityConfig, ExplanationConfig, RankingConfig, RecommendationEngineConfig,
};
pub use wearable::WearableConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the supplement recommendation engine
    pub recommendation: RecommendationEngineConfig,
    /// Configuration for wearable metric analysis
    pub wearable: WearableConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first rule the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranking = &self.recommendation.ranking;
        if ranking.top_n == 0 {
            return Err(ConfigError::ValueOutOfRange("top_n must be at least 1"));
        }
        if ranking.normalized_scale <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "normalized_scale must be positive",
            ));
        }
        if ranking.min_normalized_score < 0.0
            || ranking.min_normalized_score >= ranking.normalized_scale
        {
            return Err(ConfigError::InvalidRange(
                "min_normalized_score must be in [0, normalized_scale)",
            ));
        }

        let affinity = &self.recommendation.affinity;
        if affinity.women_multiplier <= 0.0
            || affinity.men_multiplier <= 0.0
            || affinity.pregnancy_multiplier <= 0.0
        {
            return Err(ConfigError::InvalidMultiplier(
                "affinity multipliers must be positive",
            ));
        }

        let explanation = &self.recommendation.explanation;
        if explanation.highly_recommended_score > ranking.normalized_scale {
            return Err(ConfigError::InvalidRange(
                "highly_recommended_score must not exceed normalized_scale",
            ));
        }
        if explanation.alternation_gap < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "alternation_gap must not be negative",
            ));
        }

        let wearable = &self.wearable;
        if wearable.sleep_target_hours <= 0.0
            || wearable.daily_steps_target <= 0.0
            || wearable.active_minutes_target <= 0.0
            || wearable.vitamin_c_target_mg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "wearable targets must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Ranking overrides
        let ranking = &mut self.recommendation.ranking;
        Self::apply_env_var("NUTRISYNC_RECOMMENDATION_TOP_N", &mut ranking.top_n)?;
        Self::apply_env_var(
            "NUTRISYNC_RECOMMENDATION_MIN_SCORE",
            &mut ranking.min_normalized_score,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_RECOMMENDATION_NORMALIZED_SCALE",
            &mut ranking.normalized_scale,
        )?;

        // Affinity overrides
        let affinity = &mut self.recommendation.affinity;
        Self::apply_env_var(
            "NUTRISYNC_AFFINITY_WOMEN_MULTIPLIER",
            &mut affinity.women_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_AFFINITY_MEN_MULTIPLIER",
            &mut affinity.men_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_AFFINITY_PREGNANCY_MULTIPLIER",
            &mut affinity.pregnancy_multiplier,
        )?;

        // Explanation overrides
        let explanation = &mut self.recommendation.explanation;
        Self::apply_env_var(
            "NUTRISYNC_EXPLANATION_HIGHLY_RECOMMENDED_SCORE",
            &mut explanation.highly_recommended_score,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_EXPLANATION_ALTERNATION_GAP",
            &mut explanation.alternation_gap,
        )?;

        // Wearable target overrides
        let wearable = &mut self.wearable;
        Self::apply_env_var(
            "NUTRISYNC_WEARABLE_SLEEP_TARGET_HOURS",
            &mut wearable.sleep_target_hours,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_WEARABLE_STEPS_TARGET",
            &mut wearable.daily_steps_target,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_WEARABLE_ACTIVE_MINUTES_TARGET",
            &mut wearable.active_minutes_target,
        )?;
        Self::apply_env_var(
            "NUTRISYNC_WEARABLE_VITAMIN_C_TARGET_MG",
            &mut wearable.vitamin_c_target_mg,
        )?;

        Ok(self)
    }
}
