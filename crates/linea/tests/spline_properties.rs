//! Shape properties of the curve builders.
//!
//! These tests check behavior every smoothing algorithm must share, plus
//! the per-algorithm guarantees hosts rely on when picking one.

use glam::DVec2;
use linea::{KnotParam, Path, PathCommand, Segment, Smoothing, build_curve, spline};
use linea_test_utils::{EPS, assert_points_close, assert_within, fixtures};

fn algorithms() -> Vec<Smoothing> {
    vec![
        Smoothing::Linear,
        Smoothing::catmull_rom(),
        Smoothing::MonotoneCubic,
        Smoothing::tcb(),
        Smoothing::beta_spline(),
        Smoothing::b_spline(),
        Smoothing::BSpline {
            degree: 2,
            knots: None,
            samples_per_span: 8,
            parameterization: KnotParam::ChordLength,
        },
    ]
}

fn is_single_subpath(path: &Path) -> bool {
    path.commands()
        .iter()
        .skip(1)
        .all(|c| !matches!(c, PathCommand::MoveTo(_) | PathCommand::Close))
}

// ====================
// Shared behavior
// ====================

#[test]
fn test_every_algorithm_emits_one_open_subpath() {
    let points = fixtures::to_vecs(&fixtures::sine(25));
    for smoothing in algorithms() {
        let path = build_curve(&points, &smoothing);
        assert!(!path.is_empty(), "{} produced nothing", smoothing.name());
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(is_single_subpath(&path), "{}", smoothing.name());
    }
}

#[test]
fn test_two_points_match_linear_for_every_algorithm() {
    let points = fixtures::to_vecs(&fixtures::ramp(2, 3.0));
    let linear = build_curve(&points, &Smoothing::Linear);
    for smoothing in algorithms() {
        assert_eq!(build_curve(&points, &smoothing), linear, "{}", smoothing.name());
    }
}

#[test]
fn test_output_is_finite() {
    let points = fixtures::to_vecs(&fixtures::parabola(9));
    for smoothing in algorithms() {
        for p in build_curve(&points, &smoothing).flatten(8) {
            assert!(p.is_finite(), "{} produced {p:?}", smoothing.name());
        }
    }
}

#[test]
fn test_interpolating_curves_pass_through_data() {
    let points = fixtures::to_vecs(&fixtures::sine(10));
    for smoothing in [
        Smoothing::Linear,
        Smoothing::catmull_rom(),
        Smoothing::MonotoneCubic,
        Smoothing::tcb(),
    ] {
        let path = build_curve(&points, &smoothing);
        let ends: Vec<DVec2> = path.segments().map(|s| s.end()).collect();
        assert_points_close(&ends, &points[1..], EPS);
    }
}

// ====================
// Per-algorithm guarantees
// ====================

#[test]
fn test_monotone_plateau_never_overshoots() {
    let points = fixtures::to_vecs(&fixtures::plateau());
    let path = build_curve(&points, &Smoothing::MonotoneCubic);

    let middle: Vec<DVec2> = path
        .flatten(64)
        .into_iter()
        .filter(|p| p.x >= 1.0 && p.x <= 2.0)
        .collect();
    assert!(!middle.is_empty());
    assert_within(middle.iter().map(|p| p.y), 0.0, 1.0, 1e-12);
}

#[test]
fn test_catmull_rom_overshoots_where_monotone_does_not() {
    let points = fixtures::to_vecs(&fixtures::plateau());
    let peak = build_curve(&points, &Smoothing::CatmullRom { tension: 1.0 })
        .flatten(64)
        .into_iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn test_b_spline_degrades_when_degree_too_high() {
    let points = fixtures::to_vecs(&fixtures::ramp(4, 1.0));
    let smoothing = Smoothing::BSpline {
        degree: 4,
        knots: None,
        samples_per_span: 16,
        parameterization: KnotParam::OpenUniform,
    };
    assert_eq!(build_curve(&points, &smoothing), spline::linear(&points));
}

#[test]
fn test_beta_spline_stays_near_data_box() {
    let points = fixtures::to_vecs(&fixtures::sine(16));
    let path = build_curve(&points, &Smoothing::beta_spline());
    let (min, max) = path.bounds().unwrap();
    // Tension above 1 pushes samples slightly away from the chord midpoint.
    assert!(min.y >= -1.05 && max.y <= 1.05);
    assert!(min.x >= 0.0 - EPS && max.x <= 1.0 + EPS);
}

#[test]
fn test_b_spline_with_explicit_knots() {
    let points = fixtures::to_vecs(&fixtures::sine(6));
    let knots = vec![0.0, 0.0, 0.0, 0.0, 0.2, 0.7, 1.0, 1.0, 1.0, 1.0];
    let smoothing = Smoothing::BSpline {
        degree: 3,
        knots: Some(knots),
        samples_per_span: 4,
        parameterization: KnotParam::OpenUniform,
    };
    let path = build_curve(&points, &smoothing);
    // Three non-empty spans
    assert_eq!(path.len(), 1 + 3 * 4);

    let flat = path.flatten(1);
    assert_points_close(&[flat[0]], &[points[0]], EPS);
    assert_points_close(&[flat[flat.len() - 1]], &[points[5]], EPS);
}

#[test]
fn test_cubic_segments_are_continuous() {
    let points = fixtures::to_vecs(&fixtures::parabola(6));
    let path = build_curve(&points, &Smoothing::tcb());
    let mut previous = path.start().unwrap();
    for segment in path.segments() {
        let Segment::Cubic(curve) = segment else {
            panic!("expected cubic segments only");
        };
        assert_eq!(curve.from, previous);
        previous = curve.to;
    }
}
