//! Sort performance benchmarks.
//!
//! Shuffled input shows the typical case; already-sorted input is the
//! quadratic worst case for a first-element pivot.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dossier::sort::quick_sort;
use dossier::{Field, FieldValue, Record};

fn make_record(age: i64) -> Record {
    Record {
        email: "bench@mail.ru".to_string(),
        weight: FieldValue::Integer(70),
        national_id: "12345678901".to_string(),
        document_series: "12 34".to_string(),
        occupation: "Инженер".to_string(),
        age: FieldValue::Integer(age),
        category_a: "Умеренные".to_string(),
        category_b: "Деизм".to_string(),
        address: "ул. Ленина 5".to_string(),
    }
}

/// Deterministic scramble so runs are comparable.
fn scrambled(size: i64) -> Vec<Record> {
    (0..size).map(|i| make_record((i * 7919) % 108 + 1)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_sort");

    for size in [100, 1_000, 5_000] {
        let shuffled = scrambled(size);
        group.bench_with_input(BenchmarkId::new("scrambled", size), &shuffled, |b, records| {
            b.iter(|| black_box(quick_sort(records.clone(), Field::Age).unwrap()))
        });

        let sorted: Vec<Record> = (0..size).map(make_record).collect();
        group.bench_with_input(BenchmarkId::new("presorted", size), &sorted, |b, records| {
            b.iter(|| black_box(quick_sort(records.clone(), Field::Age).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
