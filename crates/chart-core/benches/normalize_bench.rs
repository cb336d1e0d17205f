use chart_core::{ChartDescriptor, ChartKind, SeriesSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_descriptor(kind: ChartKind, categories: usize, series: usize) -> ChartDescriptor {
    let labels: Vec<String> = (0..categories).map(|i| format!("c{i}")).collect();
    let mut d = ChartDescriptor::new(kind, labels).with_title("bench");
    for s in 0..series {
        let values = (0..categories).map(|i| ((i + s) as f64 * 0.1).sin() * 100.0);
        d = d.with_series(SeriesSpec::new(format!("s{s}"), values));
    }
    d
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for kind in [ChartKind::Line, ChartKind::StackedBar, ChartKind::Pie] {
        let d = build_descriptor(kind, 500, 5);
        group.bench_function(kind.tag(), |b| b.iter(|| black_box(d.normalize())));
    }
    group.bench_function("decode_json", |b| {
        let v = serde_json::json!({
            "title": "t", "type": "bar",
            "data": { "labels": (0..200).collect::<Vec<_>>(), "series": [{ "name": "s", "values": (0..200).collect::<Vec<_>>() }] }
        });
        b.iter(|| black_box(ChartDescriptor::from_value(&v)));
    });
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
