//! Benchmarks for curve building, tick generation and range resolution

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec2;
use linea::{AxisGroup, Chart, KnotParam, Series, Smoothing, build_curve, ticks};
use linea_test_utils::fixtures;

fn smoothings() -> Vec<Smoothing> {
    vec![
        Smoothing::Linear,
        Smoothing::catmull_rom(),
        Smoothing::MonotoneCubic,
        Smoothing::tcb(),
        Smoothing::beta_spline(),
        Smoothing::b_spline(),
    ]
}

fn bench_build_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_curve");

    for size in [16, 256, 4096] {
        group.throughput(Throughput::Elements(size as u64));
        let points = fixtures::to_vecs(&fixtures::sine(size));

        for smoothing in smoothings() {
            group.bench_with_input(
                BenchmarkId::new(smoothing.name(), size),
                &points,
                |b, points| b.iter(|| build_curve(black_box(points), &smoothing)),
            );
        }
    }

    group.finish();
}

fn bench_b_spline_knots(c: &mut Criterion) {
    let mut group = c.benchmark_group("b_spline_knots");
    let points = fixtures::to_vecs(&fixtures::parabola(1024));

    for param in [KnotParam::OpenUniform, KnotParam::ChordLength] {
        let smoothing = Smoothing::BSpline {
            degree: 3,
            knots: None,
            samples_per_span: 8,
            parameterization: param,
        };
        group.bench_with_input(
            BenchmarkId::new(format!("{param:?}"), points.len()),
            &points,
            |b, points| b.iter(|| build_curve(black_box(points), &smoothing)),
        );
    }

    group.finish();
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");

    for (min, max) in [(0.0, 1.0), (-1234.5, 98765.0), (1e-6, 3e-6)] {
        group.bench_function(BenchmarkId::new("nice", format!("{min}..{max}")), |b| {
            b.iter(|| ticks::nice_ticks(black_box(min), black_box(max), 6))
        });
    }
    group.bench_function("format_general", |b| {
        b.iter(|| ticks::format_general(black_box(123456.789)))
    });

    group.finish();
}

fn bench_chart_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_resolve");

    for series_count in [1, 8, 64] {
        let mut chart: Chart<usize> = Chart::new();
        for id in 0..series_count {
            chart.insert_series(id, Series::from_points(fixtures::ramp(512, id as f64)));
        }
        chart = chart
            .with_y_axes(AxisGroup::with(linea::Axis::y(), (0..series_count).step_by(2)))
            .unwrap_or_else(|e| panic!("{e}"));
        group.throughput(Throughput::Elements((series_count * 512) as u64));

        group.bench_function(BenchmarkId::new("resolve", series_count), |b| {
            b.iter(|| chart.resolve(black_box(false)))
        });
        group.bench_function(BenchmarkId::new("series_paths", series_count), |b| {
            b.iter(|| chart.series_paths(black_box(DVec2::new(1280.0, 720.0))).len())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_curve,
    bench_b_spline_knots,
    bench_ticks,
    bench_chart_resolve
);
criterion_main!(benches);
