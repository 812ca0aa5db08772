// File: crates/chart-core/benches/layout_bench.rs
// Summary: Layout and scene construction throughput for large line and bar charts.

use chart_core::{AxisOverrides, Chart, Point, RenderOptions, Series, SeriesType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_line_chart(n: usize) -> Chart {
    let points = (0..n)
        .map(|i| {
            let x = i as f64;
            Point::numeric(x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect();
    Chart::from_series(vec![Series::new("Wave", SeriesType::Line).with_points(points)])
}

fn build_bar_chart(categories: usize, series: usize) -> Chart {
    let mut chart = Chart::new();
    for k in 0..series {
        let points = (0..categories).map(|i| Point::category(format!("c{i}"), (i * (k + 1)) as f64)).collect();
        chart.add_series(Series::new(format!("S{k}"), SeriesType::Bar).with_points(points));
    }
    chart
}

fn bench_layout(c: &mut Criterion) {
    let opts = RenderOptions::default();
    let mut group = c.benchmark_group("render_frame");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let chart = build_line_chart(n);
            b.iter(|| black_box(chart.render(&opts, AxisOverrides::none())));
        });
    }
    group.bench_function("bars_500x4", |b| {
        let chart = build_bar_chart(500, 4);
        b.iter(|| black_box(chart.render(&opts, AxisOverrides::none())));
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
