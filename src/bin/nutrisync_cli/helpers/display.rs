// ABOUTME: Output formatting helpers for nutrisync-cli
// ABOUTME: Renders recommendation and wearable reports as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use nutrisync::models::{RecommendationReport, WearableReport};

const RULE_WIDTH: usize = 72;

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Display a recommendation report
pub fn display_recommendation(report: &RecommendationReport) {
    let profile = &report.demographics;
    println!(
        "NutriSync recommendation for a {} year old {}{}",
        profile.age,
        profile.gender,
        if profile.pregnant { " (pregnant)" } else { "" }
    );

    section("General Recommendation");
    println!("{}", report.general_recommendation);

    section("Top Supplements");
    if report.ranked_supplements.is_empty() {
        println!("No supplements matched.");
    }
    for (rank, supplement) in report.ranked_supplements.iter().enumerate() {
        println!("{}. {} (score {:.1})", rank + 1, supplement.name, supplement.score);
        if !supplement.price.is_empty() {
            println!("   Price: {}", supplement.price);
        }
        if !supplement.purchase_link.is_empty() {
            println!("   Buy:   {}", supplement.purchase_link);
        }
        if !supplement.image_link.is_empty() {
            println!("   Image: {}", supplement.image_link);
        }
    }

    if !report.why_this_product.is_empty() {
        section("Why This Product?");
        for why in &report.why_this_product {
            for line in why.lines() {
                println!("  {line}");
            }
            println!();
        }
    }

    section("Specific Recommendations");
    for recommendation in &report.specific_recommendations {
        println!("• {recommendation}");
    }
}

/// Display a wearable metrics report
pub fn display_wearable_report(report: &WearableReport) {
    println!("Health Report");
    println!(
        "Period: {} to {} ({} days)",
        report.period_start, report.period_end, report.sample_count
    );

    section("Metrics");
    for (number, metric) in report.metrics.iter().enumerate() {
        println!(
            "{}. {}: {:.2} {}",
            number + 1,
            metric.metric,
            metric.average,
            metric.metric.unit()
        );
        println!(
            "   Recommended: at least {} {}",
            metric.target,
            metric.metric.unit()
        );
        println!("   Status: {}", metric.status);
    }

    section("Recommendations");
    for (number, recommendation) in report.recommendations.iter().enumerate() {
        println!("{}. {recommendation}", number + 1);
    }
}
