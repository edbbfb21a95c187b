//! Multi-Axis Chart Example
//!
//! This example demonstrates:
//! - Two Y axes bound to different series
//! - Auto-ranging and tick labels per axis
//! - A simulated pinch, drag and double-tap
//! - Path output a renderer would consume
//!
//! Set `LINEA_PROFILE=1` to serve puffin scopes to `puffin_viewer`.
//!
//! Run with: cargo run -p linea --example multi_axis

use glam::DVec2;
use linea::{Axis, AxisFormatter, AxisGroup, Chart, ChartResult, Series, Smoothing};
use linea_core::config::{Config, ProfilingMode};
use linea_core::profiling::{new_frame, profile_scope};

const VIEWPORT: DVec2 = DVec2::new(1200.0, 800.0);

fn main() -> ChartResult<()> {
    let config = Config {
        profiling: if std::env::var_os("LINEA_PROFILE").is_some() {
            ProfilingMode::WithWebserver
        } else {
            ProfilingMode::Off
        },
        ..Default::default()
    };
    config.apply();

    let mut chart = Chart::new().with_y_axes(
        AxisGroup::with(
            Axis::y().with_formatter(AxisFormatter::custom(|v| format!("{v:.1}°C"))),
            ["temperature"],
        )
        .bind(
            Axis::y_secondary().with_formatter(AxisFormatter::number(0)),
            ["pressure"],
        ),
    )?;

    let hours = 0..48;
    chart.insert_series(
        "temperature",
        Series::from_points(hours.clone().map(|h| {
            let t = h as f64;
            (t, 14.0 + 6.0 * (t / 24.0 * std::f64::consts::TAU).sin())
        }))
        .with_smoothing(Smoothing::MonotoneCubic),
    );
    chart.insert_series(
        "pressure",
        Series::from_points(hours.map(|h| {
            let t = h as f64;
            (t, 1012.0 + 3.0 * (t / 17.0).cos())
        }))
        .with_smoothing(Smoothing::catmull_rom()),
    );

    print_frame("initial", &chart)?;

    chart.pinch(2.0, VIEWPORT / 2.0, VIEWPORT);
    print_frame("after pinch", &chart)?;

    chart.pan(DVec2::new(300.0, -100.0), VIEWPORT);
    print_frame("after pan", &chart)?;

    chart.reset_view();
    print_frame("after reset", &chart)?;

    Ok(())
}

fn print_frame(title: &str, chart: &Chart<&'static str>) -> ChartResult<()> {
    new_frame();
    profile_scope!("print_frame");

    tracing::info!("{title}");
    let labels = |ticks: Vec<linea::Tick>| {
        ticks
            .into_iter()
            .map(|t| t.label)
            .collect::<Vec<_>>()
            .join(" ")
    };
    tracing::info!("  x: {}", labels(chart.x_ticks()));
    for binding in 0..chart.y_axes().len() {
        let axis = chart.y_axis(binding)?;
        tracing::info!(
            "  y{binding} ({:?}) {:?}: {}",
            axis.position,
            axis.scale().bounds(),
            labels(chart.y_ticks(binding)?)
        );
    }
    for (id, path) in chart.series_paths(VIEWPORT) {
        tracing::info!("  {id}: {} path commands", path.len());
    }
    Ok(())
}
