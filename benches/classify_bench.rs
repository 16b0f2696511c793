// benches/classify_bench.rs
//! Benchmarks for component classification and page composition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickstart2page::{
    classify, compose_detail_body, AlertConditionPayload, AlertConditionType, DashboardPayload,
    DocumentationPayload, QuickstartComponent, QuickstartId, QuickstartMetadata, QuickstartRecord,
    QuickstartSlug, SupportLevel,
};

/// Creates a record with `count` components cycling through the three kinds.
fn sample_record(count: usize) -> QuickstartRecord {
    let components = (0..count)
        .map(|i| match i % 3 {
            0 => QuickstartComponent::Dashboard(DashboardPayload {
                display_name: format!("Dashboard {}", i),
                description: Some("Key metrics at a glance.".to_string()),
                screenshots: vec![],
            }),
            1 => QuickstartComponent::AlertCondition(AlertConditionPayload {
                display_name: format!("Alert {}", i),
                condition_type: AlertConditionType::Static,
                details: Some("Threshold breached for five minutes.".to_string()),
            }),
            _ => QuickstartComponent::Documentation(DocumentationPayload {
                display_name: format!("Doc {}", i),
                url: Some("https://docs.example.com".to_string()),
                description: None,
            }),
        })
        .collect();

    QuickstartRecord {
        metadata: QuickstartMetadata {
            display_name: "Benchmark".to_string(),
            slug: QuickstartSlug::parse("benchmark").unwrap(),
            keywords: vec!["bench".to_string()],
            icon: None,
            summary: Some("Synthetic quickstart for benchmarking.".to_string()),
            description: Some("Synthetic description.".to_string()),
            quickstart_components: components,
            authors: vec![],
            installer: None,
        },
        id: QuickstartId::random(),
        support_level: SupportLevel::Community,
        source_url: None,
    }
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for size in [10, 100, 1_000] {
        let record = sample_record(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &record, |b, record| {
            b.iter(|| classify(black_box(record)));
        });
    }
    group.finish();
}

fn bench_page_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for size in [10, 100] {
        let record = sample_record(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &record, |b, record| {
            b.iter(|| compose_detail_body(black_box(record), None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classification, bench_page_composition);
criterion_main!(benches);
