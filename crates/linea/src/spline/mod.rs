//! Curve fitting.
//!
//! Turns an ordered point list (already in unit or viewport space) into a
//! single continuous [`Path`]. The algorithm is selected by [`Smoothing`];
//! [`build_curve`] dispatches over it.
//!
//! Shared degradation rules:
//! - fewer than 2 points yield an empty path
//! - exactly 2 points yield one straight segment, whatever the algorithm
//! - an algorithm lacking enough points or usable parameters falls back to
//!   [`linear`]
//!
//! Every builder is a pure function of its inputs.

mod beta;
mod bspline;
mod catmull_rom;
mod kochanek_bartels;
mod linear;
mod monotone;

pub use beta::beta_spline;
pub use bspline::{b_spline, chord_length_knots, open_uniform_knots};
pub use catmull_rom::catmull_rom;
pub use kochanek_bartels::kochanek_bartels;
pub use linear::linear;
pub use monotone::monotone_cubic;

use crate::path::Path;
use glam::DVec2;
use linea_core::profiling::profile_function;

/// How a B-spline knot vector is generated when none is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnotParam {
    /// Clamped knots, uniform in the interior.
    #[default]
    OpenUniform,
    /// Interior knots averaged from normalized cumulative chord lengths.
    ChordLength,
}

/// Curve algorithm and its parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Smoothing {
    /// Straight segments through every point.
    #[default]
    Linear,
    /// Uniform Catmull-Rom converted to cubic Beziers.
    CatmullRom {
        /// 1.0 is classic Catmull-Rom; lower values soften tangents.
        tension: f64,
    },
    /// Fritsch-Carlson monotone cubic. Expects strictly increasing x.
    MonotoneCubic,
    /// Kochanek-Bartels with one global parameter set.
    Tcb {
        tension: f64,
        bias: f64,
        continuity: f64,
    },
    /// Sampled beta-spline approximation.
    BetaSpline {
        /// Forward skew, clamped to `[-1, 1]`.
        bias: f64,
        /// Tightness; 1.0 leaves the B-spline shape alone.
        tension: f64,
        samples_per_segment: usize,
    },
    /// General B-spline evaluated with de Boor's algorithm.
    BSpline {
        degree: usize,
        /// Explicit knot vector of length `points + degree + 1`.
        knots: Option<Vec<f64>>,
        samples_per_span: usize,
        parameterization: KnotParam,
    },
}

impl Smoothing {
    pub fn catmull_rom() -> Self {
        Self::CatmullRom { tension: 0.85 }
    }

    pub fn tcb() -> Self {
        Self::Tcb {
            tension: 0.25,
            bias: 0.0,
            continuity: 0.0,
        }
    }

    pub fn beta_spline() -> Self {
        Self::BetaSpline {
            bias: 0.3,
            tension: 1.2,
            samples_per_segment: 10,
        }
    }

    pub fn b_spline() -> Self {
        Self::BSpline {
            degree: 3,
            knots: None,
            samples_per_span: 16,
            parameterization: KnotParam::OpenUniform,
        }
    }

    /// Short name for logs and bench ids.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::CatmullRom { .. } => "catmull_rom",
            Self::MonotoneCubic => "monotone_cubic",
            Self::Tcb { .. } => "tcb",
            Self::BetaSpline { .. } => "beta_spline",
            Self::BSpline { .. } => "b_spline",
        }
    }
}

/// Build curve geometry for `points` with the selected algorithm.
pub fn build_curve(points: &[DVec2], smoothing: &Smoothing) -> Path {
    profile_function!();
    tracing::trace!(
        points = points.len(),
        algorithm = smoothing.name(),
        "Building curve"
    );

    if points.len() <= 2 {
        return linear(points);
    }

    match smoothing {
        Smoothing::Linear => linear(points),
        Smoothing::CatmullRom { tension } => catmull_rom(points, *tension),
        Smoothing::MonotoneCubic => monotone_cubic(points),
        Smoothing::Tcb {
            tension,
            bias,
            continuity,
        } => kochanek_bartels(points, *tension, *bias, *continuity),
        Smoothing::BetaSpline {
            bias,
            tension,
            samples_per_segment,
        } => beta_spline(points, *bias, *tension, *samples_per_segment),
        Smoothing::BSpline {
            degree,
            knots,
            samples_per_span,
            parameterization,
        } => b_spline(
            points,
            (*degree).max(1),
            knots.as_deref(),
            *samples_per_span,
            *parameterization,
        ),
    }
}
