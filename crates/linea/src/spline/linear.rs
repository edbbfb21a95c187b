use crate::path::{Path, PathBuilder};
use glam::DVec2;

/// Straight segments through every point in order.
pub fn linear(points: &[DVec2]) -> Path {
    if points.len() < 2 {
        return Path::new();
    }
    let mut builder = PathBuilder::new();
    builder.polyline(points);
    builder.build()
}
