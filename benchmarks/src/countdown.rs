use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn countdown(c: &mut Criterion) {
    c.bench_function("countdown", |b| {
        b.iter_batched(
            || benchmarks::COUNTDOWN,
            |source| black_box(benchmarks::run(source)),
            BatchSize::SmallInput,
        )
    });
}

fn factorial(c: &mut Criterion) {
    c.bench_function("factorial", |b| {
        b.iter(|| black_box(benchmarks::run(benchmarks::FACTORIAL)))
    });
}

fn list_sum(c: &mut Criterion) {
    c.bench_function("list_sum", |b| {
        b.iter(|| black_box(benchmarks::run(benchmarks::LIST_SUM)))
    });
}

criterion_group!(benches, countdown, factorial, list_sum);
criterion_main!(benches);
