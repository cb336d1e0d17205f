use chart_core::{ChartDescriptor, ChartKind, SeriesSpec};
use chart_render_skia::{render_descriptor, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_descriptor(kind: ChartKind, n: usize) -> ChartDescriptor {
    let labels: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
    let values = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001);
    ChartDescriptor::new(kind, labels).with_title("bench").with_series(SeriesSpec::new("s", values))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for (kind, n) in [(ChartKind::Line, 10_000usize), (ChartKind::Bar, 200), (ChartKind::Pie, 12)] {
        group.bench_function(format!("{kind}_{n}"), |b| {
            let d = build_descriptor(kind, n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| {
                let (_, mut surface) = render_descriptor(&d, opts.clone()).expect("render");
                black_box(surface.to_png_bytes().expect("encode"));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
