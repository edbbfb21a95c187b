//! Core chart types.

use glam::DVec2;

/// A data point in a chart.
///
/// Equality is exact; no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Read one coordinate.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Which coordinate of a point an axis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

/// Position of an axis on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisPosition {
    /// Left side (for Y axes)
    #[default]
    Left,
    /// Right side (for Y axes)
    Right,
    /// Top (for X axes)
    Top,
    /// Bottom (for X axes)
    Bottom,
}

impl AxisPosition {
    /// The coordinate an axis at this position measures.
    pub fn dimension(self) -> Dimension {
        match self {
            Self::Left | Self::Right => Dimension::Y,
            Self::Top | Self::Bottom => Dimension::X,
        }
    }
}
