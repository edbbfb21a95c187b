//! Error types for the chart context.
//!
//! The numeric engine itself never fails; these cover lookup-style misuse
//! of [`Chart`](crate::Chart).

use std::fmt;

/// Errors returned by chart operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No series with this id exists.
    UnknownSeries {
        /// Debug rendering of the id.
        id: String,
    },

    /// A Y-axis binding index past the end of the group.
    BindingOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of bindings.
        len: usize,
    },

    /// A series id is listed by two explicit bindings.
    SeriesAlreadyBound {
        /// Debug rendering of the id.
        id: String,
        /// Binding that lists it first.
        first: usize,
        /// Binding that lists it again.
        second: usize,
    },
}

impl ChartError {
    pub(crate) fn unknown_series(id: &impl fmt::Debug) -> Self {
        ChartError::UnknownSeries {
            id: format!("{:?}", id),
        }
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::UnknownSeries { id } => {
                write!(f, "Unknown series: {}", id)
            }
            ChartError::BindingOutOfRange { index, len } => {
                write!(f, "Axis binding {} out of range (have {})", index, len)
            }
            ChartError::SeriesAlreadyBound { id, first, second } => {
                write!(
                    f,
                    "Series {} bound by both binding {} and binding {}",
                    id, first, second
                )
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Result type alias for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ChartError::unknown_series(&"temp");
        assert_eq!(err.to_string(), "Unknown series: \"temp\"");

        let err = ChartError::BindingOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Axis binding 3 out of range (have 2)");
    }
}
