use super::linear;
use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// Smallest x step used for secant slopes.
const MIN_DX: f64 = 1e-6;

/// Fritsch-Carlson monotone cubic interpolation.
///
/// Interior tangents are zero wherever the neighbouring secants change sign
/// or either is flat, so the curve never overshoots between samples.
/// x must be strictly increasing; other input gives a finite but
/// meaningless curve.
pub fn monotone_cubic(points: &[DVec2]) -> Path {
    let n = points.len();
    if n <= 2 {
        return linear(points);
    }

    let secants: Vec<f64> = points
        .windows(2)
        .map(|w| (w[1].y - w[0].y) / (w[1].x - w[0].x).max(MIN_DX))
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (before, after) = (secants[i - 1], secants[i]);
        tangents[i] = if before * after <= 0.0 {
            0.0
        } else {
            (before + after) / 2.0
        };
    }

    let mut builder = PathBuilder::new();
    builder.move_to(points[0]);
    for i in 0..n - 1 {
        let (p0, p1) = (points[i], points[i + 1]);
        let third = (p1.x - p0.x) / 3.0;
        let c1 = DVec2::new(p0.x + third, p0.y + tangents[i] * third);
        let c2 = DVec2::new(p1.x - third, p1.y - tangents[i + 1] * third);
        builder.cubic_to(c1, c2, p1);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Segment;

    #[test]
    fn test_plateau_stays_flat() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(3.0, 0.0),
        ];
        let path = monotone_cubic(&points);
        let middle = path.segments().nth(1).unwrap();
        let Segment::Cubic(curve) = middle else {
            panic!("expected cubic segment");
        };
        for i in 0..=20 {
            let p = curve.eval(i as f64 / 20.0);
            assert!((p.y - 1.0).abs() < 1e-12, "y = {}", p.y);
        }
    }

    #[test]
    fn test_monotone_data_gives_monotone_curve() {
        let points: Vec<_> = (0..6)
            .map(|i| DVec2::new(i as f64, (i * i) as f64))
            .collect();
        let flat = monotone_cubic(&points).flatten(16);
        for w in flat.windows(2) {
            assert!(w[1].y >= w[0].y - 1e-12);
        }
    }
}
