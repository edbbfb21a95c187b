//! Chart-level configuration.

use crate::interaction::ZoomAxes;

/// Knobs shared by the whole chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Approximate number of X ticks
    pub x_tick_target: usize,
    /// Approximate number of ticks per Y axis
    pub y_tick_target: usize,
    /// Axes a drag may move
    pub pan_mode: ZoomAxes,
    /// Axes a pinch may zoom
    pub zoom_mode: ZoomAxes,
    /// Re-resolve ranges whenever series change
    pub auto_rescale: bool,
    /// Smallest span a pinch may leave on any scale
    pub min_span: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_tick_target: 6,
            y_tick_target: 5,
            pan_mode: ZoomAxes::all(),
            zoom_mode: ZoomAxes::all(),
            auto_rescale: true,
            min_span: 1e-9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.x_tick_target, 6);
        assert_eq!(config.y_tick_target, 5);
        assert_eq!(config.pan_mode, ZoomAxes::X | ZoomAxes::Y);
        assert!(config.auto_rescale);
    }
}
