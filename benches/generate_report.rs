use criterion::{criterion_group, criterion_main, Criterion};
use maize_advisor::{fixtures, AdvisoryQuery, Advisor, Month};
use std::hint::black_box;

fn bench_single_report(c: &mut Criterion) {
    let advisor = Advisor::new(fixtures::savanna_tables());

    c.bench_function("generate_report_kaduna_july_low", |b| {
        b.iter(|| {
            advisor
                .generate_report(black_box("Kaduna"), black_box("July"), black_box("Low"))
                .unwrap()
        })
    });
}

fn bench_batch_reports(c: &mut Criterion) {
    let advisor = Advisor::new(fixtures::savanna_tables());
    let queries: Vec<AdvisoryQuery> = Month::ALL
        .iter()
        .flat_map(|m| {
            [
                AdvisoryQuery::new("Kaduna", m.name(), "Low"),
                AdvisoryQuery::new("Kaduna", m.name(), "High"),
                AdvisoryQuery::new("Kano", m.name(), "Medium"),
            ]
        })
        .collect();

    c.bench_function("generate_reports_36_queries", |b| {
        b.iter(|| advisor.generate_reports(black_box(&queries)))
    });
}

criterion_group!(benches, bench_single_report, bench_batch_reports);
criterion_main!(benches);
