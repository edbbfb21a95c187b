use super::linear;
use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// Sampled beta-spline.
///
/// This is an approximation of Barsky's beta-spline, not the exact
/// formulation: each 4-point window is evaluated with the uniform cubic
/// B-spline basis, then nudged toward the forward chord by `bias` and toward
/// the inner midpoint by `tension`. Output is a polyline starting at the
/// second point, since a B-spline begins inside the control hull.
///
/// Needs at least 4 points; fewer fall back to [`linear`].
pub fn beta_spline(points: &[DVec2], bias: f64, tension: f64, samples_per_segment: usize) -> Path {
    let n = points.len();
    if n < 4 {
        return linear(points);
    }

    let samples = samples_per_segment.max(1);
    let bias = bias.clamp(-1.0, 1.0);
    let tension = tension.max(1e-3);
    let tension_pull = 0.25 * (1.0 / tension - 1.0);

    let mut builder = PathBuilder::new();
    builder.move_to(points[1]);
    for w in points.windows(4) {
        let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
        for s in 1..=samples {
            let u = s as f64 / samples as f64;
            let [b0, b1, b2, b3] = uniform_basis(u);
            let mut p = p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3;
            if bias != 0.0 {
                p = p.lerp(p1.lerp(p2, u), 0.25 * bias);
            }
            if tension != 1.0 {
                p = p.lerp(p1.lerp(p2, 0.5), tension_pull);
            }
            builder.line_to(p);
        }
    }
    builder.build()
}

/// Uniform cubic B-spline basis weights at `u` in `[0, 1]`.
fn uniform_basis(u: f64) -> [f64; 4] {
    let u2 = u * u;
    let u3 = u2 * u;
    let mu = 1.0 - u;
    [
        mu * mu * mu / 6.0,
        (3.0 * u3 - 6.0 * u2 + 4.0) / 6.0,
        (-3.0 * u3 + 3.0 * u2 + 3.0 * u + 1.0) / 6.0,
        u3 / 6.0,
    ]
}
