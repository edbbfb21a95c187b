//! Chart axis: a scale plus the policies that drive it.

use crate::autorange::{self, AutoRange};
use crate::format::AxisFormatter;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::ticks::{Tick, TickGenerator};
use crate::types::{AxisPosition, Dimension};
use linea_core::profiling::profile_function;

/// A chart axis.
///
/// Owns its [`LinearScale`] by value; interaction code borrows it mutably
/// through [`scale_mut`](Self::scale_mut) for the duration of one update.
#[derive(Debug, Clone)]
pub struct Axis {
    scale: LinearScale,
    /// Policy turning data bounds into the visible range
    pub auto_range: AutoRange,
    /// Tick placement strategy
    pub ticks: TickGenerator,
    /// Label formatter
    pub formatter: AxisFormatter,
    /// Draw grid lines at ticks
    pub grid: bool,
    /// Label color override (RGBA)
    pub label_color: Option<[f32; 4]>,
    /// Where the axis is drawn
    pub position: AxisPosition,
    resolved: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self::y()
    }
}

impl Axis {
    /// Create an axis at `position` with default policies.
    pub fn new(position: AxisPosition) -> Self {
        Self {
            scale: LinearScale::default(),
            auto_range: AutoRange::default(),
            ticks: TickGenerator::default(),
            formatter: AxisFormatter::default(),
            grid: true,
            label_color: None,
            position,
            resolved: false,
        }
    }

    /// Primary X axis (bottom).
    pub fn x() -> Self {
        Self::new(AxisPosition::Bottom)
    }

    /// Primary Y axis (left).
    pub fn y() -> Self {
        Self::new(AxisPosition::Left)
    }

    /// Secondary Y axis (right).
    pub fn y_secondary() -> Self {
        Self::new(AxisPosition::Right)
    }

    pub fn with_auto_range(mut self, auto_range: AutoRange) -> Self {
        self.auto_range = auto_range;
        self
    }

    pub fn with_ticks(mut self, ticks: TickGenerator) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_label_color(mut self, color: [f32; 4]) -> Self {
        self.label_color = Some(color);
        self
    }

    /// Replace the scale, e.g. to start from explicit bounds.
    pub fn with_scale(mut self, scale: LinearScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    pub fn scale_mut(&mut self) -> &mut LinearScale {
        &mut self.scale
    }

    /// The coordinate this axis measures.
    pub fn dimension(&self) -> Dimension {
        self.position.dimension()
    }

    /// Apply the auto-range policy to `raw` and make the result the visible
    /// range.
    ///
    /// With `reset_original` the result also becomes the scale's original
    /// range (reset target and clamp boundary). Without it, pan/zoom history
    /// relative to the previous original range is kept. The first resolution
    /// of an axis always sets the original range.
    pub fn resolve_range(
        &mut self,
        raw: (f64, f64),
        target_ticks: usize,
        reset_original: bool,
    ) -> (f64, f64) {
        let reset_original = reset_original || !self.resolved;
        self.resolved = true;

        let (min, max) = self.auto_range.apply(raw, target_ticks);
        self.scale.set_bounds(min, max);
        if reset_original {
            self.scale.set_original_range(min, max);
        }
        tracing::debug!(
            position = ?self.position,
            raw_min = raw.0,
            raw_max = raw.1,
            min,
            max,
            reset_original,
            "Resolved axis range"
        );
        (min, max)
    }

    /// Resolve from the data bounds of `series` along this axis' dimension.
    pub fn resolve_from_series<'a, I>(
        &mut self,
        series: I,
        target_ticks: usize,
        reset_original: bool,
    ) -> (f64, f64)
    where
        I: IntoIterator<Item = &'a Series>,
    {
        profile_function!();
        let raw = autorange::data_bounds(series, self.dimension());
        self.resolve_range(raw, target_ticks, reset_original)
    }

    /// Ticks for the current range, labelled by this axis' formatter.
    pub fn ticks(&self, target: usize) -> Vec<Tick> {
        let mut ticks = self.ticks.ticks(&self.scale, target);
        for tick in &mut ticks {
            tick.label = self.formatter.format(tick.value);
        }
        ticks
    }
}
