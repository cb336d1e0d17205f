use chart_core::decimate_min_max;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimate_min_max");
    for &n in &[10_000usize, 100_000usize] {
        let values: Vec<Option<f64>> = (0..n)
            .map(|i| if i % 97 == 0 { None } else { Some((i as f64 * 0.01).sin() * 10.0) })
            .collect();
        group.bench_function(format!("n_{n}"), |b| b.iter(|| black_box(decimate_min_max(&values, 500))));
    }
    group.finish();
}

criterion_group!(benches, bench_decimate);
criterion_main!(benches);
