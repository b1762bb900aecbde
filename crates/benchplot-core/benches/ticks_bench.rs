use benchplot_core::{make_ticks, nice_step};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_ticks");
    for &(min, max, target) in &[(92.0, 100.0, 6usize), (0.0, 160.0, 5), (73.0, 93.0, 6), (0.0, 10_000.0, 4)] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{min}_{max}_t{target}")), &(min, max, target), |b, &(lo, hi, t)| {
            b.iter(|| black_box(make_ticks(black_box(lo), black_box(hi), t)));
        });
    }
    group.finish();

    c.bench_function("nice_step", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for r in 1..200 {
                acc += nice_step(black_box(r as f64), 6);
            }
            acc
        });
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
