//! Validation check throughput benchmark.
//!
//! Measures the cost of the passing path of each check using Criterion,
//! plus array checks over growing sequences.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::any::Any;
use strongly_typed::{
    validate_array_of_type, validate_type_equals, validate_type_in, validate_value_greater_than,
    validate_value_in, TypeFamily, TypeTag, ValueConstraint,
};

fn bench_type_checks(c: &mut Criterion) {
    let tag = TypeTag::of::<u64>();
    let family = TypeFamily::new("Integer")
        .with::<u8>()
        .with::<u16>()
        .with::<u32>()
        .with::<u64>();
    let types = [TypeTag::of::<String>(), TypeTag::of::<f64>(), TypeTag::of::<u64>()];

    let mut group = c.benchmark_group("type_checks");
    group.bench_function("type_equals_tag", |b| {
        b.iter(|| validate_type_equals("n", black_box(&42_u64), &tag).unwrap())
    });
    group.bench_function("type_equals_family", |b| {
        b.iter(|| validate_type_equals("n", black_box(&42_u64), &family).unwrap())
    });
    group.bench_function("type_in", |b| {
        b.iter(|| validate_type_in("n", black_box(&42_u64), &types).unwrap())
    });
    group.finish();
}

fn bench_array_of_type(c: &mut Criterion) {
    let tag = TypeTag::of::<u32>();
    let sizes: &[usize] = &[0, 16, 256, 4096];

    let mut group = c.benchmark_group("array_of_type");
    for &size in sizes {
        let typed: Vec<u32> = (0..size as u32).collect();
        group.bench_with_input(BenchmarkId::new("vec", size), &typed, |b, v| {
            b.iter(|| validate_array_of_type("items", black_box(v), &tag).unwrap())
        });

        let boxed: Vec<Box<dyn Any>> = (0..size as u32)
            .map(|n| Box::new(n) as Box<dyn Any>)
            .collect();
        group.bench_with_input(BenchmarkId::new("boxed", size), &boxed, |b, v| {
            b.iter(|| validate_array_of_type("items", black_box(v), &tag).unwrap())
        });
    }
    group.finish();
}

fn bench_value_checks(c: &mut Criterion) {
    let range = ValueConstraint::range(1_i64, 10);
    let set = ValueConstraint::set(["run", "walk", "saunter", "jog"]);

    let mut group = c.benchmark_group("value_checks");
    group.bench_function("greater_than", |b| {
        b.iter(|| validate_value_greater_than("n", black_box(&7_i64), &1_i64).unwrap())
    });
    group.bench_function("in_range", |b| {
        b.iter(|| validate_value_in("n", black_box(&7_i64), &range).unwrap())
    });
    group.bench_function("in_set", |b| {
        b.iter(|| validate_value_in("method", black_box(&"jog"), &set).unwrap())
    });
    group.bench_function("out_of_range_message", |b| {
        b.iter(|| validate_value_in("n", black_box(&11_i64), &range).unwrap_err())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_type_checks,
    bench_array_of_type,
    bench_value_checks
);
criterion_main!(benches);
