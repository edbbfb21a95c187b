//! Deterministic point fixtures.

use glam::DVec2;

/// `n` points on the line `y = slope * x`, with `x = 0, 1, .., n-1`.
pub fn ramp(n: usize, slope: f64) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, slope * i as f64)).collect()
}

/// `n` points on `y = x^2`, with `x = 0, 1, .., n-1`.
pub fn parabola(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i * i) as f64)).collect()
}

/// Rise, flat top, fall: `(0,0), (1,1), (2,1), (3,0)`.
pub fn plateau() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]
}

/// `n` samples of one sine period over `x` in `[0, 1]`.
pub fn sine(n: usize) -> Vec<(f64, f64)> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let x = i as f64 / denom;
            (x, (x * std::f64::consts::TAU).sin())
        })
        .collect()
}

/// Convert tuple fixtures into vectors.
pub fn to_vecs(points: &[(f64, f64)]) -> Vec<DVec2> {
    points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_endpoints() {
        let pts = sine(9);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], (0.0, 0.0));
        assert_eq!(pts[8].0, 1.0);
    }

    #[test]
    fn test_parabola_values() {
        let pts = parabola(4);
        assert_eq!(pts[3], (3.0, 9.0));
    }
}
