use super::linear;
use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// Uniform Catmull-Rom spline as cubic Beziers.
///
/// Consecutive duplicates are removed first. End neighbours are clamped to
/// the first and last point.
pub fn catmull_rom(points: &[DVec2], tension: f64) -> Path {
    let mut pts: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }
    if pts.len() <= 2 {
        return linear(&pts);
    }

    let k = tension / 6.0;
    let last = pts.len() - 1;

    let mut builder = PathBuilder::new();
    builder.move_to(pts[0]);
    for i in 0..last {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(last)];

        let c1 = p1 + (p2 - p0) * k;
        let c2 = p2 - (p3 - p1) * k;
        builder.cubic_to(c1, c2, p2);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    #[test]
    fn test_passes_through_points() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(3.0, 3.0),
        ];
        let path = catmull_rom(&points, 1.0);
        let ends: Vec<_> = path.segments().map(|s| s.end()).collect();
        assert_eq!(ends, points[1..]);
    }

    #[test]
    fn test_control_points() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 0.0),
        ];
        let path = catmull_rom(&points, 1.0);
        // First segment: p0 clamped to p1, so c1 = p1 + (p2 - p1) / 6.
        match path.commands()[1] {
            PathCommand::CubicTo {
                control1, control2, ..
            } => {
                assert!((control1 - DVec2::new(1.0 / 6.0, 1.0 / 6.0)).length() < 1e-12);
                assert!((control2 - DVec2::new(1.0 - 2.0 / 6.0, 1.0)).length() < 1e-12);
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_removed() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(1.0, 1.0);
        let c = DVec2::new(2.0, 0.0);
        assert_eq!(
            catmull_rom(&[a, a, b, b, c], 0.85),
            catmull_rom(&[a, b, c], 0.85)
        );
        assert_eq!(catmull_rom(&[a, a, b], 0.85), linear(&[a, b]));
        assert!(catmull_rom(&[a, a, a], 0.85).is_empty());
    }
}
