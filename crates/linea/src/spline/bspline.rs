use super::{KnotParam, linear};
use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// B-spline of `degree` through de Boor evaluation, as a polyline.
///
/// An explicit knot vector is used only if it has `points + degree + 1`
/// entries, all finite and non-decreasing; otherwise one is generated with
/// `parameterization`. Each non-empty knot span is sampled
/// `max(samples_per_span, 2)` times.
///
/// Needs more points than `degree` (and a degree of at least 1); otherwise
/// falls back to [`linear`].
pub fn b_spline(
    points: &[DVec2],
    degree: usize,
    knots: Option<&[f64]>,
    samples_per_span: usize,
    parameterization: KnotParam,
) -> Path {
    let n = points.len();
    let k = degree;
    if n < 2 || k < 1 || n <= k {
        return linear(points);
    }

    let knots = match knots {
        Some(explicit) if is_valid_knot_vector(explicit, n, k) => explicit.to_vec(),
        Some(explicit) => {
            tracing::warn!(
                len = explicit.len(),
                expected = n + k + 1,
                "Rejected knot vector, generating one instead"
            );
            generate_knots(points, k, parameterization)
        }
        None => generate_knots(points, k, parameterization),
    };

    let (u0, u1) = (knots[k], knots[n]);
    if !(u1 > u0) {
        return linear(points);
    }

    let steps = samples_per_span.max(2);
    let mut builder = PathBuilder::new();
    builder.move_to(de_boor(points, &knots, k, u0));
    for i in k..n {
        let (a, b) = (knots[i], knots[i + 1]);
        if b <= a {
            continue;
        }
        for s in 1..=steps {
            let u = a + (b - a) * s as f64 / steps as f64;
            builder.line_to(de_boor(points, &knots, k, u));
        }
    }
    builder.build()
}

fn generate_knots(points: &[DVec2], degree: usize, parameterization: KnotParam) -> Vec<f64> {
    match parameterization {
        KnotParam::OpenUniform => open_uniform_knots(points.len(), degree),
        KnotParam::ChordLength => chord_length_knots(points, degree),
    }
}

fn is_valid_knot_vector(knots: &[f64], n: usize, k: usize) -> bool {
    knots.len() == n + k + 1
        && knots.iter().all(|u| u.is_finite())
        && knots.windows(2).all(|w| w[0] <= w[1])
}

/// Clamped knot vector for `n` control points: `degree + 1` zeros, uniform
/// interior knots, `degree + 1` ones.
pub fn open_uniform_knots(n: usize, degree: usize) -> Vec<f64> {
    let k = degree;
    (0..n + k + 1)
        .map(|j| {
            if j <= k {
                0.0
            } else if j >= n {
                1.0
            } else {
                (j - k) as f64 / (n - k) as f64
            }
        })
        .collect()
}

/// Clamped knot vector whose interior knots average `degree` consecutive
/// normalized chord-length parameters.
pub fn chord_length_knots(points: &[DVec2], degree: usize) -> Vec<f64> {
    let n = points.len();
    let k = degree;

    let mut params = Vec::with_capacity(n);
    let mut total = 0.0;
    params.push(0.0);
    for w in points.windows(2) {
        total += w[0].distance(w[1]);
        params.push(total);
    }
    let total = total.max(f64::EPSILON);
    for t in &mut params {
        *t /= total;
    }

    let mut knots = vec![0.0; n + k + 1];
    for u in &mut knots[n..] {
        *u = 1.0;
    }
    for j in 1..=n.saturating_sub(k + 1) {
        knots[j + k] = params[j..j + k].iter().sum::<f64>() / k as f64;
    }
    knots
}

/// Index `i` in `[k, n - 1]` with `knots[i] <= u < knots[i + 1]`, clamped at
/// both ends of the valid parameter range.
fn find_span(knots: &[f64], k: usize, n: usize, u: f64) -> usize {
    if u <= knots[k] {
        return k;
    }
    if u >= knots[n] {
        return n - 1;
    }
    k + knots[k + 1..n].partition_point(|&x| x <= u)
}

/// Point on the curve at `u` by de Boor's recursion.
fn de_boor(points: &[DVec2], knots: &[f64], k: usize, u: f64) -> DVec2 {
    let i = find_span(knots, k, points.len(), u);
    let mut d: Vec<DVec2> = points[i - k..=i].to_vec();

    for r in 1..=k {
        for j in (r..=k).rev() {
            let idx = i - k + j;
            let denom = (knots[idx + k - r + 1] - knots[idx]).max(f64::EPSILON);
            let alpha = (u - knots[idx]) / denom;
            d[j] = d[j - 1].lerp(d[j], alpha);
        }
    }
    d[k]
}
