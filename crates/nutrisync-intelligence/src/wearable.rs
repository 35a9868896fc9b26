// ABOUTME: Wearable metrics analyzer averaging daily samples against configured targets
// ABOUTME: Produces per-metric status lines and follow-up advice for sleep, activity, and nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::config::intelligence::WearableConfig;
use nutrisync_core::errors::{AppError, AppResult};
use nutrisync_core::models::{MetricAssessment, WearableMetric, WearableReport, WearableSample};
use tracing::debug;

const BELOW_TARGET_STATUS: &str = "Below recommended";
const HYDRATION_ADVICE: &str = "Ensure adequate water intake throughout the day.";
const WOUND_HEALING_ADVICE: &str = "Monitor wound healing progress and maintain good nutrition and sleep habits to support healing.";

/// Average the samples and compare each metric with its target
///
/// # Errors
///
/// Returns `InvalidInput` when `samples` is empty
pub fn analyze_wearable(
    samples: &[WearableSample],
    config: &WearableConfig,
) -> AppResult<WearableReport> {
    let (Some(period_start), Some(period_end)) = (
        samples.iter().map(|s| s.date).min(),
        samples.iter().map(|s| s.date).max(),
    ) else {
        return Err(AppError::invalid_input(
            "At least one wearable sample is required",
        ));
    };

    let count = samples.len() as f64;
    let mean = |field: fn(&WearableSample) -> f64| samples.iter().map(field).sum::<f64>() / count;

    let metrics = vec![
        assess(WearableMetric::Sleep, mean(|s| s.sleep_hours), config.sleep_target_hours),
        assess(WearableMetric::Steps, mean(|s| s.steps), config.daily_steps_target),
        assess(
            WearableMetric::ActiveMinutes,
            mean(|s| s.active_minutes),
            config.active_minutes_target,
        ),
        assess(
            WearableMetric::VitaminC,
            mean(|s| s.vitamin_c_mg),
            config.vitamin_c_target_mg,
        ),
    ];
    debug!(samples = samples.len(), %period_start, %period_end, "Analyzed wearable samples");

    let report = WearableReport {
        period_start,
        period_end,
        sample_count: samples.len(),
        recommendations: Vec::new(),
        metrics,
    };
    let recommendations = follow_up_advice(&report, config);
    Ok(WearableReport {
        recommendations,
        ..report
    })
}

fn assess(metric: WearableMetric, average: f64, target: f64) -> MetricAssessment {
    let below_target = average < target;
    let status = if below_target {
        BELOW_TARGET_STATUS
    } else {
        metric.on_target_status()
    };
    MetricAssessment {
        metric,
        average,
        target,
        below_target,
        status: status.to_owned(),
    }
}

fn is_below(report: &WearableReport, metric: WearableMetric) -> bool {
    report.metric(metric).is_some_and(|m| m.below_target)
}

fn follow_up_advice(report: &WearableReport, config: &WearableConfig) -> Vec<String> {
    let sleep = if is_below(report, WearableMetric::Sleep) {
        format!(
            "Increase sleep duration to reach {}-{} hours per night.",
            config.sleep_target_hours,
            config.sleep_target_hours + 1.0
        )
    } else {
        "Maintain current sleep schedule.".to_owned()
    };

    let activity = if is_below(report, WearableMetric::Steps)
        || is_below(report, WearableMetric::ActiveMinutes)
    {
        format!(
            "Increase daily activity to reach {} steps and {} active minutes.",
            group_thousands(config.daily_steps_target),
            config.active_minutes_target
        )
    } else {
        "Maintain current activity levels.".to_owned()
    };

    let nutrition = if is_below(report, WearableMetric::VitaminC) {
        "Increase Vitamin C intake through diet or supplements."
    } else {
        "Maintain current Vitamin C intake."
    };

    vec![
        sleep,
        activity,
        nutrition.to_owned(),
        HYDRATION_ADVICE.to_owned(),
        WOUND_HEALING_ADVICE.to_owned(),
    ]
}

/// Round to a whole number and add comma thousands separators (10000 -> "10,000")
fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
