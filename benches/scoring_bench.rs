// ABOUTME: Criterion benchmarks for the wellness scoring engine
// ABOUTME: Measures single-day scoring, batch series scoring, and dashboard views over long histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

//! Criterion benchmarks for the wellness scoring engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Weekday;
use common::fixtures::{generate_logs, start_date, HistoryLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zenwork::intelligence::{
    filter_journal, JournalFilter, LogWindow, ScoringRequest, WellnessEngine,
    WellnessScoringConfig, WellnessSummary,
};
use zenwork::models::DailyLog;

const WATER_GOAL: u32 = 8;

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Week,
    HistoryLength::Quarter,
    HistoryLength::TwoYears,
];

/// Benchmark scoring one day against histories of increasing length
fn bench_single_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("wellness_metrics");
    let engine = WellnessEngine::new(WellnessScoringConfig::default());

    for length in LENGTHS {
        let logs = generate_logs(length);
        let (history, today) = logs.split_at(logs.len() - 1);
        group.throughput(Throughput::Elements(logs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate", length.count()),
            &(history, today.first()),
            |b, (history, today)| {
                b.iter(|| {
                    let request = ScoringRequest::new(*today, history, WATER_GOAL)
                        .with_weekday(Weekday::Mon);
                    engine.calculate(black_box(&request))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark scoring every day of a history in parallel
fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("wellness_series");
    let engine = WellnessEngine::new(WellnessScoringConfig::default());

    for length in LENGTHS {
        let logs = generate_logs(length);
        group.throughput(Throughput::Elements(logs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_series", length.count()),
            &logs,
            |b, logs| {
                b.iter(|| engine.calculate_series(black_box(logs), black_box(WATER_GOAL)));
            },
        );
    }

    group.finish();
}

/// Benchmark partitioning, summary, and journal views on two years of data
fn bench_dashboard_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_views");
    let logs = generate_logs(HistoryLength::TwoYears);
    let date = logs
        .last()
        .map_or_else(start_date, DailyLog::calendar_date);

    group.bench_function("log_window_partition", |b| {
        b.iter(|| LogWindow::partition(black_box(logs.clone()), black_box(date)));
    });
    group.bench_function("summary", |b| {
        b.iter(|| WellnessSummary::from_logs(black_box(&logs), black_box(date)));
    });
    group.bench_function("journal_high_stress", |b| {
        b.iter(|| filter_journal(black_box(&logs), black_box(JournalFilter::HighStress)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_day,
    bench_series,
    bench_dashboard_views
);
criterion_main!(benches);
