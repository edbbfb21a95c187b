//! Tick generation.
//!
//! Both strategies are pure functions of the scale bounds and a target
//! count; the same inputs always produce identical ticks.

use crate::autorange::nice_step;
use crate::scale::{LinearScale, MIN_UNIT_SPAN};

/// A tick mark on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Value in data space
    pub value: f64,
    /// Label text (may be empty)
    pub label: String,
}

impl Tick {
    /// Create a tick with a label.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// How tick positions are chosen for a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickGenerator {
    /// Round `{1, 2, 5} x 10^k` steps covering the scale, labelled `%g`-style.
    #[default]
    Nice,
    /// Exactly `target` equal intervals across the scale, unlabelled.
    FixedCount,
}

impl TickGenerator {
    /// Generate ticks for the current bounds of `scale`.
    pub fn ticks(&self, scale: &LinearScale, target: usize) -> Vec<Tick> {
        match self {
            Self::Nice => nice_ticks(scale.min(), scale.max(), target),
            Self::FixedCount => fixed_count_ticks(scale.min(), scale.max(), target),
        }
    }
}

/// Ticks at multiples of a nice step from `floor(min/step)` to
/// `ceil(max/step)`, both inclusive. A target below 2 is treated as 2.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<Tick> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let span = (max - min).max(MIN_UNIT_SPAN);
    let step = nice_step(span / target.max(2) as f64);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;

    // Half a step of slack keeps the last tick despite rounding error.
    let count = ((end - start) / step + 0.5).floor() as usize;
    (0..=count)
        .map(|i| {
            let value = start + i as f64 * step;
            Tick::new(value, format_general(value))
        })
        .collect()
}

/// `target + 1` evenly spaced ticks from `min` to `max` with empty labels.
///
/// Empty when `max <= min` or `target` is zero.
pub fn fixed_count_ticks(min: f64, max: f64, target: usize) -> Vec<Tick> {
    if !(max > min) || target == 0 {
        return Vec::new();
    }
    let step = (max - min) / target as f64;
    (0..=target)
        .map(|i| Tick::new(min + i as f64 * step, String::new()))
        .collect()
}

/// Format a value like C's `%g`: six significant digits, trailing zeros
/// removed, exponent notation outside `[1e-4, 1e6)`.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 {
        // Also covers -0.0
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounding to the target precision first decides the exponent, so that
    // 999999.7 becomes 1e+06 rather than 1000000.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
