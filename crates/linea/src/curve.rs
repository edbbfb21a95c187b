//! Bezier curve primitives.
//!
//! Curve geometry is emitted as cubic segments; this type lets hosts and
//! tests evaluate them.

use glam::DVec2;

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: DVec2,
    /// First control point
    pub control1: DVec2,
    /// Second control point
    pub control2: DVec2,
    /// End point
    pub to: DVec2,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: DVec2, control1: DVec2, control2: DVec2, to: DVec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Sample the curve at `subdivisions` evenly spaced parameters in (0, 1].
    ///
    /// The start point is not included, so consecutive segments can be
    /// chained without duplicates.
    pub fn sample(&self, subdivisions: usize) -> impl Iterator<Item = DVec2> + '_ {
        let n = subdivisions.max(1);
        (1..=n).map(move |i| self.eval(i as f64 / n as f64))
    }
}
