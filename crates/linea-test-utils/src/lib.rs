//! Test utilities for Linea.
//!
//! This crate provides testing infrastructure shared by the workspace:
//!
//! - Float assertions with explicit tolerances ([`assert_close`],
//!   [`assert_points_close`])
//! - Deterministic point fixtures ([`fixtures`])
//!
//! It deliberately does not depend on `linea` itself, so fixtures are plain
//! `(x, y)` tuples and `DVec2` values that any crate can convert.
//!
//! # Example
//!
//! ```rust
//! use linea_test_utils::{assert_close, fixtures};
//!
//! let ramp = fixtures::ramp(5, 2.0);
//! assert_eq!(ramp.len(), 5);
//! assert_close(ramp[4].1, 8.0, 1e-12);
//! ```

pub mod fixtures;

use glam::DVec2;

/// Default tolerance for comparisons of values produced by a handful of
/// floating point operations.
pub const EPS: f64 = 1e-9;

/// Assert that two floats are within `tolerance` of each other.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// Assert that two point slices have equal length and pairwise-close
/// coordinates.
#[track_caller]
pub fn assert_points_close(actual: &[DVec2], expected: &[DVec2], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "point count mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a.x - e.x).abs() <= tolerance && (a.y - e.y).abs() <= tolerance,
            "point {i}: expected {e:?}, got {a:?} (tolerance {tolerance})"
        );
    }
}

/// Assert that every value lies in `[min, max]`, allowing `tolerance`
/// of slack on both ends.
#[track_caller]
pub fn assert_within(values: impl IntoIterator<Item = f64>, min: f64, max: f64, tolerance: f64) {
    for (i, v) in values.into_iter().enumerate() {
        assert!(
            v >= min - tolerance && v <= max + tolerance,
            "value {i} = {v} outside [{min}, {max}]"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_close_accepts_within_tolerance() {
        assert_close(1.0, 1.0 + 1e-10, EPS);
    }

    #[test]
    #[should_panic]
    fn test_assert_close_rejects_outside_tolerance() {
        assert_close(1.0, 1.1, EPS);
    }

    #[test]
    #[should_panic]
    fn test_assert_points_close_rejects_length_mismatch() {
        assert_points_close(&[DVec2::ZERO], &[], EPS);
    }
}
