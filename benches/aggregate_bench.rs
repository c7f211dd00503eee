//! Benchmarks for the salary aggregations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use salary_dashboard::{count_job_titles, parse_records, summarize_by_year, SalaryRecord};

const TITLES: [&str; 6] = [
    "Data Scientist",
    "Data Engineer",
    "Machine Learning Engineer",
    "Data Analyst",
    "Research Scientist",
    "Applied Scientist",
];

fn create_test_records(count: usize) -> Vec<SalaryRecord> {
    (0..count)
        .map(|i| {
            SalaryRecord::new(
                2020 + (i % 5) as i32,
                TITLES[i % TITLES.len()],
                50_000.0 + (i % 1_000) as f64 * 150.0,
            )
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_by_year");

    for size in [1_000, 10_000, 100_000] {
        let records = create_test_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("records_{}", size), |b| {
            b.iter(|| summarize_by_year(black_box(&records)))
        });
    }

    group.finish();
}

fn bench_count_job_titles(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_job_titles");

    for size in [1_000, 10_000, 100_000] {
        let records = create_test_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("records_{}", size), |b| {
            b.iter(|| count_job_titles(black_box(&records), black_box(2023)))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let records = create_test_records(10_000);
    let payload = serde_json::to_vec(&records).unwrap();

    let mut group = c.benchmark_group("parse_records");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("records_10000", |b| {
        b.iter(|| parse_records(black_box(&payload)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_summarize, bench_count_job_titles, bench_parse);
criterion_main!(benches);
