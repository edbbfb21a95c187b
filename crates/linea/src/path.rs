//! Path primitives for curve geometry.
//!
//! A path is the sequence of drawing commands a host renderer strokes or
//! fills. Everything the curve engine produces is one continuous sub-path:
//! a `MoveTo` followed by lines and cubic segments.

use crate::CubicBezier;
use glam::DVec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(DVec2),
    /// Draw a line to a position.
    LineTo(DVec2),
    /// Draw a cubic Bezier curve.
    CubicTo {
        /// First control point
        control1: DVec2,
        /// Second control point
        control2: DVec2,
        /// End point
        to: DVec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

/// One drawn piece of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight segment.
    Line {
        /// Start point
        from: DVec2,
        /// End point
        to: DVec2,
    },
    /// Cubic Bezier segment.
    Cubic(CubicBezier),
}

impl Segment {
    /// End point of the segment.
    pub fn end(&self) -> DVec2 {
        match self {
            Self::Line { to, .. } => *to,
            Self::Cubic(curve) => curve.to,
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Starting point of the path, if any.
    pub fn start(&self) -> Option<DVec2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Get the bounding box of the path.
    ///
    /// Control points are included, so the box is conservative for cubic
    /// segments. Returns (min, max) corners.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    min = min.min(*control1).min(*control2).min(*to);
                    max = max.max(*control1).max(*control2).max(*to);
                }
                PathCommand::Close => {}
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Iterate over the drawn segments in order.
    ///
    /// `Close` yields the closing line back to the sub-path start.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let mut current = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;
        self.commands.iter().filter_map(move |cmd| match cmd {
            PathCommand::MoveTo(to) => {
                current = *to;
                subpath_start = *to;
                None
            }
            PathCommand::LineTo(to) => {
                let segment = Segment::Line {
                    from: current,
                    to: *to,
                };
                current = *to;
                Some(segment)
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let segment = Segment::Cubic(CubicBezier::new(current, *control1, *control2, *to));
                current = *to;
                Some(segment)
            }
            PathCommand::Close => {
                let segment = Segment::Line {
                    from: current,
                    to: subpath_start,
                };
                current = subpath_start;
                Some(segment)
            }
        })
    }

    /// Flatten the path into a polyline.
    ///
    /// Lines contribute their end point; cubic segments are sampled
    /// `subdivisions` times each.
    pub fn flatten(&self, subdivisions: usize) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(self.commands.len() * subdivisions.max(1));
        if let Some(start) = self.start() {
            points.push(start);
        }
        for segment in self.segments() {
            match segment {
                Segment::Line { to, .. } => points.push(to),
                Segment::Cubic(curve) => points.extend(curve.sample(subdivisions)),
            }
        }
        points
    }

    /// Close the path down to a horizontal baseline, for area fills.
    ///
    /// The result runs along this path, drops vertically to `baseline_y`,
    /// returns along the baseline to the start x and closes. An empty path
    /// stays empty.
    pub fn area_to_baseline(&self, baseline_y: f64) -> Path {
        let Some(start) = self.start() else {
            return Path::new();
        };
        let end = self
            .segments()
            .last()
            .map(|segment| segment.end())
            .unwrap_or(start);

        let mut commands = self.commands.clone();
        commands.push(PathCommand::LineTo(DVec2::new(end.x, baseline_y)));
        commands.push(PathCommand::LineTo(DVec2::new(start.x, baseline_y)));
        commands.push(PathCommand::Close);
        Path { commands }
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draw a cubic Bezier curve.
    pub fn cubic_to(&mut self, control1: DVec2, control2: DVec2, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Add an open polyline through the points.
    pub fn polyline(&mut self, points: &[DVec2]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };

        self.move_to(*first);
        for point in rest {
            self.line_to(*point);
        }
        self
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}
