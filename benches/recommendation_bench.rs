// ABOUTME: Criterion benchmarks for the supplement recommendation pipeline
// ABOUTME: Measures catalog indexing, full recommendations, and wearable analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Criterion benchmarks for the recommendation pipeline.
//!
//! Synthetic catalogs spread products over every demographic bucket so the
//! candidate sets grow with the catalog size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrisync::intelligence::config::intelligence::{RecommendationEngineConfig, WearableConfig};
use nutrisync::intelligence::{analyze_wearable, RecommendationEngine, SupplementCatalog};
use nutrisync::models::{SupplementRecord, WearableSample};
use nutrisync::reference::NutrientColumn;

const CATALOG_SIZES: [usize; 3] = [50, 500, 5_000];

const NAME_PREFIXES: [&str; 6] = ["Kids", "Teen", "Women's", "Men's", "Prenatal", "Daily"];

const SYMPTOMS: [&str; 4] = ["Fatigue", "Brain fog", "Bone pain", "Weakened immune system"];

#[allow(clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<SupplementRecord> {
    (0..count)
        .map(|index| {
            let prefix = NAME_PREFIXES[index % NAME_PREFIXES.len()];
            let mut record = SupplementRecord::new(format!("{prefix} Formula {index}"))
                .with_price(format!("{}.99AUD", 10 + index % 40));
            for (offset, column) in NutrientColumn::ALL.iter().enumerate() {
                if (index + offset) % 3 == 0 {
                    let amount = 1.0 + ((index * 37 + offset * 11) % 900) as f64;
                    record = record.with_nutrient(*column, Some(amount));
                }
            }
            record
        })
        .collect()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_samples(count: usize) -> Vec<WearableSample> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);
    (0..count)
        .map(|index| WearableSample {
            date: start + Duration::days(index as i64),
            sleep_hours: 6.0 + (index % 4) as f64,
            steps: 4_000.0 + ((index * 997) % 9_000) as f64,
            active_minutes: 15.0 + (index % 60) as f64,
            vitamin_c_mg: 20.0 + (index % 50) as f64,
        })
        .collect()
}

/// Benchmark bucket indexing as the catalog grows
#[allow(clippy::cast_possible_truncation)]
fn bench_catalog_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for count in CATALOG_SIZES {
        let records = generate_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("index", count), &records, |b, records| {
            b.iter(|| SupplementCatalog::new(black_box(records.clone())));
        });
    }

    group.finish();
}

/// Benchmark the full recommendation pipeline for representative profiles
#[allow(clippy::cast_possible_truncation)]
fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let profiles = [
        ("child", 8_i64, "male", false),
        ("adult_woman", 30, "female", false),
        ("pregnant", 30, "female", true),
        ("older_man", 72, "male", false),
    ];

    for count in CATALOG_SIZES {
        let engine = RecommendationEngine::with_config(
            generate_catalog(count),
            RecommendationEngineConfig::default(),
        );
        group.throughput(Throughput::Elements(count as u64));
        for (label, age, gender, pregnant) in profiles {
            group.bench_with_input(BenchmarkId::new(label, count), &engine, |b, engine| {
                b.iter(|| {
                    engine.recommend(
                        black_box(&SYMPTOMS),
                        black_box(age),
                        black_box(gender),
                        black_box(pregnant),
                    )
                });
            });
        }
    }

    group.finish();
}

/// Benchmark wearable averaging over a year of samples
#[allow(clippy::cast_possible_truncation)]
fn bench_wearable_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("wearable");
    let samples = generate_samples(365);
    let config = WearableConfig::default();

    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("analyze_year", |b| {
        b.iter(|| analyze_wearable(black_box(&samples), black_box(&config)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_indexing,
    bench_recommend,
    bench_wearable_analysis,
);
criterion_main!(benches);
