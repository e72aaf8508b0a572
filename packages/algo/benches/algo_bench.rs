//! Benchmark suite for mnemo-algo
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mnemo_algo::{reconcile, record_outcome, ProgressEntry, ProgressMap, ReviewScheduler, WordRecord};

fn catalog(size: usize) -> Vec<WordRecord> {
    (0..size)
        .map(|i| WordRecord::new(format!("word{i}"), format!("translation{i}"), ""))
        .collect()
}

fn bench_select_next(c: &mut Criterion) {
    let vocab = catalog(1000);
    let progress = reconcile(&vocab, ProgressMap::new());
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut scheduler = ReviewScheduler::with_seed(42);

    c.bench_function("select_next/1000", |b| {
        b.iter(|| {
            scheduler
                .select_next(black_box(&vocab), black_box(&progress), today)
                .map(|s| s.index)
        })
    });
}

fn bench_record_outcome(c: &mut Criterion) {
    let entry = ProgressEntry::default();
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    c.bench_function("record_outcome", |b| {
        b.iter(|| record_outcome(black_box(&entry), true, today))
    });
}

criterion_group!(benches, bench_select_next, bench_record_outcome);
criterion_main!(benches);
