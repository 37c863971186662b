//! Layout engine micro-benchmarks
//!
//! Measures line breaking and whole-report pagination for growing inputs.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use safedoc::{
    EngineConfig, LineBreakOptions, MonospaceMeasurer, ReportGenerator, SafetyReport,
    SyncExecutor, break_lines, build_report_document, generate_batch_with,
};
use serde_json::json;
use std::hint::black_box;

fn report(hazards: usize, steps: usize) -> SafetyReport {
    let value = json!({
        "project": { "name": "Benchmark site", "location": "Yard 4" },
        "hazards": (0..hazards).map(|i| json!({
            "title": format!("Hazard {}", i),
            "description": "Workers utilize elevated platforms adjacent to the excavation edge during lifts.",
            "severity": ["low", "medium", "high", "critical"][i % 4],
            "controls": ["Workers should wear harnesses", "Barricades must be installed prior to work"]
        })).collect::<Vec<_>>(),
        "jobSteps": (0..steps).map(|i| json!({
            "title": format!("Step {}", i),
            "description": "Commence lifting once the exclusion zone is clear.",
            "controls": ["It is recommended to check rigging"]
        })).collect::<Vec<_>>(),
        "emergency": { "assemblyPoint": "Gate B" }
    });
    serde_json::from_value(value).expect("benchmark report")
}

fn benchmark_break_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("break_lines");
    let options = LineBreakOptions::default();
    let sentence = "Keep the exclusion zone clear while the crane is slewing. ";

    for repeat in [1usize, 10, 100] {
        let text = sentence.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("sentences", repeat), &text, |b, text| {
            b.iter(|| {
                break_lines(black_box(text), 300.0, &options, |s: &str| {
                    Ok(s.chars().count() as f32 * 6.0)
                })
            })
        });
    }

    let word = "x".repeat(2_000);
    group.bench_function("long_word", |b| {
        b.iter(|| {
            break_lines(black_box(&word), 120.0, &options, |s: &str| {
                Ok(s.chars().count() as f32 * 6.0)
            })
        })
    });
    group.finish();
}

fn benchmark_paginate_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate_report");
    let config = EngineConfig::default();
    let generator = ReportGenerator::new(config.clone()).expect("default config is valid");
    let measurer = MonospaceMeasurer::new(0.6);

    for hazards in [10usize, 100, 500] {
        let document = build_report_document(&report(hazards, hazards / 2), &config.report)
            .expect("benchmark document");
        group.throughput(Throughput::Elements(document.block_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("hazards", hazards),
            &document,
            |b, document| b.iter(|| generator.plan(black_box(document), &measurer)),
        );
    }
    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = EngineConfig::default();
    let measurer = MonospaceMeasurer::new(0.6);
    let documents: Vec<_> = (0..16)
        .map(|_| build_report_document(&report(40, 20), &config.report).expect("document"))
        .collect();

    group.bench_function("sync", |b| {
        b.iter(|| generate_batch_with(&SyncExecutor, black_box(&documents), &config, &measurer))
    });
    group.bench_function("default_executor", |b| {
        b.iter(|| safedoc::generate_batch(black_box(&documents), &config, &measurer))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_break_lines,
    benchmark_paginate_report,
    benchmark_batch
);
criterion_main!(benches);
