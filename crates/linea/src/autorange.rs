//! Automatic axis ranging.
//!
//! This module provides:
//! - `AutoRange` - the per-axis policy (pass-through, fixed, padded)
//! - `data_bounds` - extents of a series set along one dimension
//! - `with_padding` / `nice` - the two range adjustments a policy applies
//! - `nice_step` - the `{1, 2, 5} x 10^k` step selection shared with ticks

use crate::series::Series;
use crate::types::Dimension;

/// Range used when there is no finite data at all.
pub const EMPTY_BOUNDS: (f64, f64) = (0.0, 1.0);

/// How an axis turns raw data bounds into its visible range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoRange {
    /// Use the raw data bounds unchanged.
    None,
    /// Ignore the data and always use these bounds.
    Fixed {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// Pad the data bounds by `fraction * span` on each side, then
    /// optionally round outwards to nice steps.
    Padded {
        /// Padding as a fraction of the data span. Negative values act as 0.
        fraction: f64,
        /// Round to `{1, 2, 5} x 10^k` steps after padding.
        nice: bool,
    },
}

impl Default for AutoRange {
    fn default() -> Self {
        Self::Padded {
            fraction: 0.05,
            nice: true,
        }
    }
}

impl AutoRange {
    /// Fixed bounds.
    pub fn fixed(min: f64, max: f64) -> Self {
        Self::Fixed { min, max }
    }

    /// Padded bounds rounded to nice steps.
    pub fn padded(fraction: f64) -> Self {
        Self::Padded {
            fraction,
            nice: true,
        }
    }

    /// Apply the policy to raw data bounds.
    pub fn apply(&self, raw: (f64, f64), target_ticks: usize) -> (f64, f64) {
        match *self {
            Self::None => raw,
            Self::Fixed { min, max } => (min, max),
            Self::Padded { fraction, nice } => {
                let padded = with_padding(raw.0, raw.1, fraction);
                if nice {
                    self::nice(padded.0, padded.1, target_ticks)
                } else {
                    padded
                }
            }
        }
    }
}

/// Bounds of every finite coordinate along `dimension` across all series.
///
/// Returns [`EMPTY_BOUNDS`] when no finite value exists, and a unit-wide
/// window centered on the value when all values are equal.
pub fn data_bounds<'a, I>(series: I, dimension: Dimension) -> (f64, f64)
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for s in series {
        for value in s.points.iter().map(|p| p.get(dimension)) {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return EMPTY_BOUNDS;
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

/// Expand both ends by `span * fraction`. Negative fractions are floored to 0.
pub fn with_padding(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let pad = (max - min) * fraction.max(0.0);
    (min - pad, max + pad)
}

/// Closest step to `rough` among `1, 2, 5` times its power of ten and the
/// next power of ten. Ties go to the earlier candidate.
///
/// `rough` must be positive and finite.
pub fn nice_step(rough: f64) -> f64 {
    let pow10 = 10f64.powf(rough.log10().floor());
    let mut best = pow10;
    for candidate in [2.0 * pow10, 5.0 * pow10, 10.0 * pow10] {
        if (candidate - rough).abs() < (best - rough).abs() {
            best = candidate;
        }
    }
    best
}

/// Upper bound on re-rounding passes in [`nice`].
const MAX_NICE_PASSES: usize = 8;

/// Round `min` down and `max` up to multiples of a nice step chosen for
/// roughly `target_ticks` intervals.
///
/// Widening can move the span into the range of a larger step, so the
/// rounding is repeated until the bounds stop changing. The result is a
/// fixpoint: `nice` applied to its own output returns it unchanged.
///
/// Non-positive spans and a zero target are returned unchanged.
pub fn nice(min: f64, max: f64, target_ticks: usize) -> (f64, f64) {
    let mut bounds = (min, max);
    for _ in 0..MAX_NICE_PASSES {
        let next = nice_once(bounds.0, bounds.1, target_ticks);
        if next == bounds {
            break;
        }
        bounds = next;
    }
    bounds
}

/// One rounding pass with the step chosen for the current span.
fn nice_once(min: f64, max: f64, target_ticks: usize) -> (f64, f64) {
    let span = max - min;
    if !(span > 0.0) || !span.is_finite() || target_ticks == 0 {
        return (min, max);
    }
    let step = nice_step(span / target_ticks as f64);
    ((min / step).floor() * step, (max / step).ceil() * step)
}
