//! Data series.

use crate::spline::Smoothing;
use crate::types::Point;
use linea_core::alloc::IndexMap;

/// How a series is turned into geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesStyle {
    /// Curve algorithm
    pub smoothing: Smoothing,
    /// Also produce an area path closed to the bottom of the viewport
    pub fill: bool,
}

impl SeriesStyle {
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

/// An ordered list of points plus its style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Points in drawing order
    pub points: Vec<Point>,
    /// Presentation
    pub style: SeriesStyle,
}

impl Series {
    /// Series with the default (linear, unfilled) style.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            style: SeriesStyle::default(),
        }
    }

    /// Build from anything convertible to [`Point`].
    pub fn from_points<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.style.smoothing = smoothing;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Series keyed by id, iterated in insertion order.
pub type SeriesMap<K> = IndexMap<K, Series>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let s = Series::from_points([(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.points[1], Point::new(2.0, 3.0));
        assert_eq!(s.style.smoothing, Smoothing::Linear);
        assert!(!s.style.fill);
    }

    #[test]
    fn test_style_builders() {
        let s = Series::default().with_style(
            SeriesStyle::default()
                .with_smoothing(Smoothing::MonotoneCubic)
                .with_fill(true),
        );
        assert!(s.is_empty());
        assert!(s.style.fill);
        assert_eq!(s.style.smoothing, Smoothing::MonotoneCubic);
    }
}
