use benchplot_core::data::{mvtec, realiad};
use benchplot_core::{
    render_static_charts, to_svg, BarComparisonChart, BenchmarkSwitch, ChartRenderer, MemoryHost, RenderOptions,
    SpeedScatterChart,
};
use benchplot_core::chart::surface;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions::default();
    let mut group = c.benchmark_group("render_scene");
    for ds in [mvtec(), realiad()] {
        group.bench_function(format!("bar_{}", ds.name), |b| {
            b.iter(|| black_box(BarComparisonChart::new(&ds).render(&opts)));
        });
        group.bench_function(format!("scatter_{}", ds.name), |b| {
            b.iter(|| black_box(SpeedScatterChart::new(&ds).render(&opts)));
        });
    }
    group.finish();

    c.bench_function("static_charts", |b| {
        b.iter(|| {
            let mut host = MemoryHost::with_surfaces(surface::ALL);
            black_box(render_static_charts(&mut host, &opts))
        });
    });

    c.bench_function("switch_cycle", |b| {
        let mut host = MemoryHost::with_surfaces(surface::ALL);
        let mut switch = BenchmarkSwitch::builtin();
        switch.initialize(&mut host);
        b.iter(|| {
            for key in ["visa", "mpdd", "bmad", "realiad", "mvtec"] {
                black_box(switch.select(key, &mut host));
            }
        });
    });

    c.bench_function("svg_bar_mvtec", |b| {
        let ds = mvtec();
        let scene = BarComparisonChart::new(&ds).render(&opts).map(|o| o.scene);
        b.iter(|| scene.as_ref().map(|s| black_box(to_svg(s))).ok());
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
