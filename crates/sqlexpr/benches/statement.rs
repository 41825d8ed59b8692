use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlexpr::StatementBuilder;

/// Configure a builder with `n` conditions and `n` select columns:
/// SELECT col0,col1,... FROM t WHERE col0 = ? and col1 = ? ...
fn build_select(n: usize) -> StatementBuilder {
    let mut builder = StatementBuilder::new();
    for i in 0..n {
        builder = builder
            .field(&format!("col{i}"))
            .cond(&format!("col{i} ="), i as i64);
    }
    builder.limit(50)
}

fn bench_build_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/build_select");

    for n in [1, 5, 10, 50, 100] {
        let builder = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.build_select("t").unwrap()));
        });
    }

    group.finish();
}

fn bench_configure_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/configure_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let builder = build_select(n);
                black_box(builder.build_select("t").unwrap());
                black_box(builder.params());
            });
        });
    }

    group.finish();
}

fn bench_in_list_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let builder = StatementBuilder::new().cond_in("id", values.clone());
                black_box(builder.build_delete("t").unwrap());
                black_box(builder.params());
            });
        });
    }

    group.finish();
}

fn bench_params_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/params");

    for n in [1, 10, 100] {
        let builder = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.params()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_select,
    bench_configure_and_build,
    bench_in_list_expansion,
    bench_params_flatten
);
criterion_main!(benches);
