use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyq::prelude::*;

#[derive(Clone)]
struct Row {
    group: i32,
    order: i64,
    value: f64,
}

fn make_rows(rows: usize) -> Items<Row> {
    let rows: Vec<Row> = (0..rows)
        .map(|i| Row {
            group: (i % 4) as i32,
            order: ((i * 7919) % rows) as i64,
            value: (i % 10) as f64,
        })
        .collect();
    from_vec(rows)
}

fn bench_streaming_pipeline(c: &mut Criterion) {
    let pipeline = range(0, 10_000)
        .filter(|n| n % 3 != 0)
        .select(|n| i64::from(n) * 2)
        .take(5_000);
    c.bench_function("range_filter_select_sum", |b| {
        b.iter(|| black_box(pipeline.sum().unwrap()))
    });
}

fn bench_order_by(c: &mut Criterion) {
    let rows = make_rows(4096);
    let sorted = rows
        .clone()
        .order_by(|r| r.group)
        .then_by_descending(|r| r.order);
    c.bench_function("order_by_then_by", |b| {
        b.iter(|| black_box(sorted.count().unwrap()))
    });
}

fn bench_group_by(c: &mut Criterion) {
    let rows = make_rows(4096);
    let totals = rows.group_by_result(
        |r| r.group,
        |r| r.value,
        |group, values| (group, values.sum().unwrap_or_default()),
    );
    c.bench_function("group_by_sum", |b| {
        b.iter(|| black_box(totals.to_vec().unwrap()))
    });
}

fn bench_join(c: &mut Criterion) {
    let outer = range(0, 1024);
    let inner = make_rows(4096);
    let joined = outer.join(inner, |o| *o % 4, |r| r.group, |o, r| i64::from(*o) + r.order);
    c.bench_function("hash_join", |b| b.iter(|| black_box(joined.long_count().unwrap())));
}

criterion_group!(
    operators,
    bench_streaming_pipeline,
    bench_order_by,
    bench_group_by,
    bench_join
);
criterion_main!(operators);
