//! Chart context.
//!
//! [`Chart`] is the single owner of the series map and every scale. Range
//! resolution, interaction and geometry generation all go through it, so no
//! scale is ever aliased.

use crate::axis::Axis;
use crate::binding::AxisGroup;
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::format::AxisFormatter;
use crate::interaction::ZoomPanController;
use crate::path::Path;
use crate::series::{Series, SeriesMap};
use crate::spline::build_curve;
use crate::ticks::Tick;
use crate::types::Point;
use glam::DVec2;
use std::fmt::Debug;
use std::hash::Hash;

/// A line chart: series, one X axis and a group of Y axes.
///
/// # Example
///
/// ```
/// use linea::{Chart, Series, Smoothing};
/// use glam::DVec2;
///
/// let mut chart = Chart::new();
/// chart.insert_series("temp", Series::from_points([(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])
///     .with_smoothing(Smoothing::MonotoneCubic));
///
/// let viewport = DVec2::new(400.0, 200.0);
/// chart.pan(DVec2::new(40.0, 0.0), viewport);
/// let paths = chart.series_paths(viewport);
/// assert_eq!(paths.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Chart<K: Eq + Hash> {
    series: SeriesMap<K>,
    x_axis: Axis,
    y_axes: AxisGroup<K>,
    controller: ZoomPanController,
    config: ChartConfig,
}

impl<K: Eq + Hash + Clone + Debug> Default for Chart<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + Debug> Chart<K> {
    /// Empty chart with a bottom X axis (SI labels, no decimals) and one
    /// catch-all Y axis.
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            series: SeriesMap::default(),
            x_axis: Axis::x().with_formatter(AxisFormatter::si(0)),
            y_axes: AxisGroup::default(),
            controller: ZoomPanController::new(config.min_span),
            config,
        }
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = axis;
        self.refresh();
        self
    }

    /// Replace the Y-axis bindings. Fails if a series id is bound twice.
    pub fn with_y_axes(mut self, y_axes: AxisGroup<K>) -> ChartResult<Self> {
        y_axes.validate()?;
        self.y_axes = y_axes;
        self.refresh();
        Ok(self)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x_axis
    }

    pub fn y_axes(&self) -> &AxisGroup<K> {
        &self.y_axes
    }

    pub fn y_axis(&self, binding: usize) -> ChartResult<&Axis> {
        self.y_axes.axis(binding)
    }

    pub fn y_axis_mut(&mut self, binding: usize) -> ChartResult<&mut Axis> {
        self.y_axes.axis_mut(binding)
    }

    /// Add or replace a series. Returns the replaced one.
    pub fn insert_series(&mut self, id: K, series: Series) -> Option<Series> {
        let previous = self.series.insert(id, series);
        self.refresh();
        previous
    }

    /// Remove a series, keeping the order of the others.
    pub fn remove_series(&mut self, id: &K) -> ChartResult<Series> {
        let removed = self
            .series
            .shift_remove(id)
            .ok_or_else(|| ChartError::unknown_series(id))?;
        self.refresh();
        Ok(removed)
    }

    /// Replace the points of an existing series.
    pub fn set_points(&mut self, id: &K, points: Vec<Point>) -> ChartResult<()> {
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| ChartError::unknown_series(id))?;
        series.points = points;
        self.refresh();
        Ok(())
    }

    pub fn series(&self, id: &K) -> Option<&Series> {
        self.series.get(id)
    }

    /// All series in insertion order.
    pub fn series_iter(&self) -> impl Iterator<Item = (&K, &Series)> {
        self.series.iter()
    }

    /// Resolve the X axis from every drawable series and each Y axis from
    /// its bound series.
    ///
    /// Series that no binding measures are not drawn and do not widen the X
    /// range. With no drawable series the X axis keeps its range.
    ///
    /// With `reset_original` the resolved ranges also become the reset
    /// target and clamp boundary of every scale.
    pub fn resolve(&mut self, reset_original: bool) {
        let _span = tracing::debug_span!("resolve", series = self.series.len()).entered();
        let drawable: Vec<&Series> = self
            .series
            .iter()
            .filter(|(id, _)| self.y_axes.axis_for(id).is_some())
            .map(|(_, series)| series)
            .collect();
        if drawable.is_empty() {
            tracing::trace!("No drawable series, keeping X range");
        } else {
            self.x_axis.resolve_from_series(
                drawable,
                self.config.x_tick_target,
                reset_original,
            );
        }
        self.y_axes
            .resolve_all(&self.series, self.config.y_tick_target, reset_original);
    }

    /// Resolve and make the result the new original range, discarding
    /// pan/zoom state.
    pub fn rebaseline(&mut self) {
        self.resolve(true);
    }

    /// Re-resolve after a series change when auto-rescale is on. Pan/zoom
    /// state is kept; only axes resolving for the first time get an
    /// original range.
    fn refresh(&mut self) {
        if self.config.auto_rescale && !self.series.is_empty() {
            self.resolve(false);
        }
    }

    /// Apply a drag gesture to every scale enabled by `pan_mode`.
    pub fn pan(&mut self, drag: DVec2, viewport: DVec2) {
        self.controller.pan_many(
            self.x_axis.scale_mut(),
            self.y_axes.axes_mut().map(Axis::scale_mut),
            drag,
            viewport,
            self.config.pan_mode,
        );
    }

    /// Apply a pinch gesture to every scale enabled by `zoom_mode`.
    pub fn pinch(&mut self, factor: f64, focus: DVec2, viewport: DVec2) {
        self.controller.pinch_many(
            self.x_axis.scale_mut(),
            self.y_axes.axes_mut().map(Axis::scale_mut),
            factor,
            focus,
            viewport,
            self.config.zoom_mode,
        );
    }

    /// Return every scale to its original range (double-tap).
    pub fn reset_view(&mut self) {
        let scales = std::iter::once(self.x_axis.scale_mut())
            .chain(self.y_axes.axes_mut().map(Axis::scale_mut));
        for scale in scales {
            scale.reset();
            // Zero pan re-applies the clamp.
            scale.pan(0.0);
        }
    }

    pub fn x_ticks(&self) -> Vec<Tick> {
        self.x_axis.ticks(self.config.x_tick_target)
    }

    pub fn y_ticks(&self, binding: usize) -> ChartResult<Vec<Tick>> {
        Ok(self.y_axes.axis(binding)?.ticks(self.config.y_tick_target))
    }

    /// Finite points of a series in unit space, through its bound Y axis.
    ///
    /// `None` for an unknown series or one no binding measures.
    pub fn unit_points(&self, id: &K) -> Option<Vec<DVec2>> {
        let series = self.series.get(id)?;
        let y_axis = self.y_axes.axis(self.y_axes.axis_for(id)?).ok()?;
        let (x, y) = (self.x_axis.scale(), y_axis.scale());
        Some(
            series
                .points
                .iter()
                .filter(|p| p.is_finite())
                .map(|p| DVec2::new(x.to_unit(p.x), y.to_unit(p.y)))
                .collect(),
        )
    }

    /// Curve geometry of every drawable series in viewport space (origin
    /// top-left, Y down), in insertion order.
    pub fn series_paths(&self, viewport: DVec2) -> Vec<(&K, Path)> {
        self.series
            .iter()
            .filter_map(|(id, series)| {
                let points = self.viewport_points(id, viewport)?;
                Some((id, build_curve(&points, &series.style.smoothing)))
            })
            .collect()
    }

    /// Area geometry of every filled series, closed to the viewport bottom.
    pub fn series_fills(&self, viewport: DVec2) -> Vec<(&K, Path)> {
        self.series
            .iter()
            .filter(|(_, series)| series.style.fill)
            .filter_map(|(id, series)| {
                let points = self.viewport_points(id, viewport)?;
                let curve = build_curve(&points, &series.style.smoothing);
                Some((id, curve.area_to_baseline(viewport.y)))
            })
            .collect()
    }

    fn viewport_points(&self, id: &K, viewport: DVec2) -> Option<Vec<DVec2>> {
        let unit = self.unit_points(id)?;
        Some(
            unit.into_iter()
                .map(|u| DVec2::new(viewport.x * u.x, viewport.y * (1.0 - u.y)))
                .collect(),
        )
    }
}
