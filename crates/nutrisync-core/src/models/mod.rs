// ABOUTME: Core data models for the recommendation engine
// ABOUTME: Re-exports demographics, supplement, recommendation, and wearable types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

/// Gender, age brackets, catalog buckets, validated profiles
pub mod demographics;
/// Recommendation report types
pub mod recommendation;
/// Catalog rows and ranked entries
pub mod supplement;
/// Wearable samples and reports
pub mod wearable;

pub use demographics::{AgeGroup, DemographicBucket, Demographics, Gender};
pub use recommendation::{DeficiencyCount, RecommendationReport};
pub use supplement::{RankedSupplement, SupplementRecord};
pub use wearable::{MetricAssessment, WearableMetric, WearableReport, WearableSample};
