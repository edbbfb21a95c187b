//! Axis value formatting.

use std::fmt;
use std::sync::Arc;

/// Formats tick values into label text.
#[derive(Clone)]
pub enum AxisFormatter {
    /// Fixed number of decimals, optionally abbreviated with `k`/`M`.
    Number {
        /// Digits after the decimal point
        decimals: usize,
        /// Abbreviate thousands and millions
        use_si: bool,
    },
    /// User-supplied formatting function.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl Default for AxisFormatter {
    fn default() -> Self {
        Self::number(2)
    }
}

impl fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { decimals, use_si } => f
                .debug_struct("Number")
                .field("decimals", decimals)
                .field("use_si", use_si)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl AxisFormatter {
    /// Plain fixed-decimal formatter.
    pub fn number(decimals: usize) -> Self {
        Self::Number {
            decimals,
            use_si: false,
        }
    }

    /// Fixed-decimal formatter with `k`/`M` suffixes.
    pub fn si(decimals: usize) -> Self {
        Self::Number {
            decimals,
            use_si: true,
        }
    }

    /// Wrap a closure.
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Label text for `value`.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Number { decimals, use_si } => {
                let decimals = *decimals;
                if *use_si {
                    let abs = value.abs();
                    if abs >= 1_000_000.0 {
                        return format!("{:.decimals$}M", value / 1_000_000.0);
                    }
                    if abs >= 1_000.0 {
                        return format!("{:.decimals$}k", value / 1_000.0);
                    }
                }
                format!("{value:.decimals$}")
            }
            Self::Custom(f) => f(value),
        }
    }
}
