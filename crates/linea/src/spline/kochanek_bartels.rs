use super::linear;
use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// Kochanek-Bartels spline with global tension, bias and continuity.
///
/// Neighbours past either end are clamped to the end point.
pub fn kochanek_bartels(points: &[DVec2], tension: f64, bias: f64, continuity: f64) -> Path {
    let n = points.len();
    if n <= 2 {
        return linear(points);
    }

    let at = |i: isize| points[i.clamp(0, n as isize - 1) as usize];

    let (t, b, c) = (tension, bias, continuity);
    let out_prev = (1.0 - t) * (1.0 + c) * (1.0 + b) / 2.0;
    let out_next = (1.0 - t) * (1.0 - c) * (1.0 - b) / 2.0;
    let in_prev = (1.0 - t) * (1.0 + c) * (1.0 - b) / 2.0;
    let in_next = (1.0 - t) * (1.0 - c) * (1.0 + b) / 2.0;

    let mut builder = PathBuilder::new();
    builder.move_to(points[0]);
    for i in 0..n as isize - 1 {
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let d10 = p1 - p0;
        let d21 = p2 - p1;
        let d32 = p3 - p2;

        let outgoing = d10 * out_prev + d21 * out_next;
        let incoming = d21 * in_prev + d32 * in_next;
        builder.cubic_to(p1 + outgoing / 3.0, p2 - incoming / 3.0, p2);
    }
    builder.build()
}
