// ABOUTME: Wearable health export samples and the aggregated metrics report
// ABOUTME: Field aliases accept the column names of the Apple Health CSV export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of wearable-derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearableSample {
    /// Calendar day of the sample
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Time in bed (hours)
    #[serde(alias = "Sleep Analysis [In Bed] (hr)")]
    pub sleep_hours: f64,
    /// Step count
    #[serde(alias = "Step Count (steps)")]
    pub steps: f64,
    /// Exercise time (minutes)
    #[serde(alias = "Apple Exercise Time (min)")]
    pub active_minutes: f64,
    /// Vitamin C intake (mg)
    #[serde(alias = "Vitamin C (mg)")]
    pub vitamin_c_mg: f64,
}

/// Metric tracked in the wearable report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearableMetric {
    /// Average sleep duration
    Sleep,
    /// Average daily steps
    Steps,
    /// Average active minutes
    ActiveMinutes,
    /// Average vitamin C intake
    VitaminC,
}

impl WearableMetric {
    /// Report label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Average sleep duration",
            Self::Steps => "Average daily steps",
            Self::ActiveMinutes => "Average active minutes",
            Self::VitaminC => "Average Vitamin C intake",
        }
    }

    /// Unit suffix for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Sleep => "hours",
            Self::Steps => "steps",
            Self::ActiveMinutes => "minutes",
            Self::VitaminC => "mg",
        }
    }

    /// Status wording when the average meets its target
    #[must_use]
    pub const fn on_target_status(self) -> &'static str {
        match self {
            Self::Sleep | Self::Steps => "Within recommended range",
            Self::ActiveMinutes => "Meets recommendations",
            Self::VitaminC => "Meets or exceeds recommendations",
        }
    }
}

impl fmt::Display for WearableMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Average of one metric compared with its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAssessment {
    /// Which metric
    pub metric: WearableMetric,
    /// Mean across all samples
    pub average: f64,
    /// Configured daily target
    pub target: f64,
    /// Whether the average falls short of the target
    pub below_target: bool,
    /// Human-readable status
    pub status: String,
}

/// Aggregated wearable metrics with follow-up advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearableReport {
    /// First day covered
    pub period_start: NaiveDate,
    /// Last day covered
    pub period_end: NaiveDate,
    /// Number of samples averaged
    pub sample_count: usize,
    /// Per-metric assessments
    pub metrics: Vec<MetricAssessment>,
    /// Follow-up advice in display order
    pub recommendations: Vec<String>,
}

impl WearableReport {
    /// Assessment for a metric
    #[must_use]
    pub fn metric(&self, metric: WearableMetric) -> Option<&MetricAssessment> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}
