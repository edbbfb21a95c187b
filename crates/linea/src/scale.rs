//! Linear mapping between a data range and the unit interval.

/// Smallest denominator used when mapping into unit space.
pub const MIN_UNIT_SPAN: f64 = 1e-12;

/// Invertible linear scale between `[min, max]` and `[0, 1]`.
///
/// Besides the visible window the scale remembers an *original* range. It is
/// the target of [`reset`](Self::reset) and, when `clamp_to_original` is set,
/// the boundary pan and zoom are held against. Only explicit resolution
/// (`set_original_range`) moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    original_min: f64,
    original_max: f64,
    clamp_to_original: bool,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl LinearScale {
    /// Create a scale whose original range equals the initial bounds.
    ///
    /// Clamping to the original range is on by default.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            original_min: min,
            original_max: max,
            clamp_to_original: true,
        }
    }

    /// Enable or disable clamping pan/zoom to the original range.
    pub fn with_clamp_to_original(mut self, clamp: bool) -> Self {
        self.clamp_to_original = clamp;
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Current visible bounds.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Bounds restored by [`reset`](Self::reset).
    pub fn original_bounds(&self) -> (f64, f64) {
        (self.original_min, self.original_max)
    }

    pub fn clamp_to_original(&self) -> bool {
        self.clamp_to_original
    }

    pub fn set_clamp_to_original(&mut self, clamp: bool) {
        self.clamp_to_original = clamp;
    }

    /// Set the visible bounds directly, without clamping.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Replace the reset target and clamp boundary. The visible bounds are
    /// left untouched.
    pub fn set_original_range(&mut self, min: f64, max: f64) {
        self.original_min = min;
        self.original_max = max;
    }

    /// Map a data value into unit space.
    ///
    /// The result is not clamped; off-screen values map outside `[0, 1]`.
    pub fn to_unit(&self, value: f64) -> f64 {
        let span = (self.max - self.min).max(MIN_UNIT_SPAN);
        (value - self.min) / span
    }

    /// Map a unit-space coordinate back into data space.
    pub fn from_unit(&self, unit: f64) -> f64 {
        self.min + (self.max - self.min) * unit
    }

    /// Shift the window by `delta` data units. A non-finite delta is
    /// ignored.
    pub fn pan(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.min += delta;
        self.max += delta;
        self.apply_clamp_to_original();
    }

    /// Divide the span by `factor` and re-center the window on `around`.
    ///
    /// Ignored unless `factor` is finite and positive and `around` is
    /// finite, so the bounds never become NaN or infinite.
    pub fn zoom(&mut self, factor: f64, around: f64) {
        if !(factor.is_finite() && factor > 0.0 && around.is_finite()) {
            return;
        }
        let span = (self.max - self.min) / factor;
        self.min = around - span / 2.0;
        self.max = around + span / 2.0;
        self.apply_clamp_to_original();
    }

    /// Widen the window to `min_span` around its center if it is narrower.
    pub fn clamp_span(&mut self, min_span: f64) {
        if self.max - self.min < min_span {
            let center = (self.min + self.max) / 2.0;
            self.min = center - min_span / 2.0;
            self.max = center + min_span / 2.0;
        }
        self.apply_clamp_to_original();
    }

    /// Restore the original range. No clamping is needed since the target is
    /// the clamp boundary itself.
    pub fn reset(&mut self) {
        self.min = self.original_min;
        self.max = self.original_max;
    }

    /// Slide the window back inside the original range, keeping its span.
    ///
    /// Each violated bound is re-aligned in turn. When the window is wider
    /// than the original range the second re-alignment wins and the lower
    /// bound may end up below `original_min`; zooming out past the original
    /// range is therefore elastic on one side.
    fn apply_clamp_to_original(&mut self) {
        if !self.clamp_to_original {
            return;
        }
        let span = self.max - self.min;
        if self.min < self.original_min {
            self.min = self.original_min;
            self.max = self.original_min + span;
        }
        if self.max > self.original_max {
            self.max = self.original_max;
            self.min = self.original_max - span;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounds(scale: &LinearScale, min: f64, max: f64) {
        assert!(
            (scale.min() - min).abs() < 1e-9 && (scale.max() - max).abs() < 1e-9,
            "expected ({min}, {max}), got {:?}",
            scale.bounds()
        );
    }

    #[test]
    fn test_unit_roundtrip() {
        let scale = LinearScale::new(-3.0, 17.0);
        for &v in &[-3.0, 0.0, 4.25, 17.0, 40.0] {
            assert!((scale.from_unit(scale.to_unit(v)) - v).abs() < 1e-9);
        }
        for &u in &[0.0, 0.3, 1.0, -0.5, 1.5] {
            assert!((scale.to_unit(scale.from_unit(u)) - u).abs() < 1e-12);
        }
    }

    #[test]
    fn test_to_unit_is_not_clamped() {
        let scale = LinearScale::new(0.0, 10.0);
        assert!((scale.to_unit(20.0) - 2.0).abs() < 1e-12);
        assert!((scale.to_unit(-5.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_span_does_not_blow_up() {
        let scale = LinearScale::new(5.0, 5.0);
        let u = scale.to_unit(5.0 + 1e-13);
        assert!(u.is_finite());
        assert_eq!(scale.to_unit(5.0), 0.0);
    }

    #[test]
    fn test_zoom_centers_on_value() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.zoom(2.0, 5.0);
        assert_bounds(&scale, 2.5, 7.5);
    }

    #[test]
    fn test_pan_clamped_to_original_keeps_span() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.zoom(2.0, 5.0);
        let span = scale.span();

        scale.pan(100.0);
        assert_bounds(&scale, 5.0, 10.0);
        assert!((scale.span() - span).abs() < 1e-12);

        scale.pan(-100.0);
        assert_bounds(&scale, 0.0, 5.0);
        assert!(scale.min() >= 0.0);
    }

    #[test]
    fn test_invalid_zoom_keeps_bounds() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.zoom(0.0, 5.0);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        scale.zoom(f64::NAN, 5.0);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        scale.zoom(-2.0, 5.0);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        scale.zoom(f64::INFINITY, 5.0);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        scale.zoom(2.0, f64::NAN);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        assert_eq!(scale.to_unit(5.0), 0.5);
    }

    #[test]
    fn test_non_finite_pan_keeps_bounds() {
        let mut scale = LinearScale::new(0.0, 10.0).with_clamp_to_original(false);
        scale.pan(f64::NAN);
        assert_eq!(scale.bounds(), (0.0, 10.0));
        scale.pan(f64::NEG_INFINITY);
        assert_eq!(scale.bounds(), (0.0, 10.0));
    }

    #[test]
    fn test_pan_without_clamp_moves_freely() {
        let mut scale = LinearScale::new(0.0, 10.0).with_clamp_to_original(false);
        scale.pan(100.0);
        assert_bounds(&scale, 100.0, 110.0);
    }

    #[test]
    fn test_zoom_out_past_original_is_elastic_below() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.zoom(0.5, 5.0);
        // Window of span 20: the upper bound is re-aligned last.
        assert_bounds(&scale, -10.0, 10.0);
    }

    #[test]
    fn test_clamp_span_widens_around_center() {
        let mut scale = LinearScale::new(4.0, 4.0).with_clamp_to_original(false);
        scale.clamp_span(1.0);
        assert_bounds(&scale, 3.5, 4.5);

        let mut wide = LinearScale::new(0.0, 10.0);
        wide.clamp_span(1.0);
        assert_bounds(&wide, 0.0, 10.0);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.zoom(4.0, 1.0);
        scale.pan(3.0);
        scale.reset();
        assert_bounds(&scale, 0.0, 10.0);
    }

    #[test]
    fn test_set_original_range_leaves_bounds() {
        let mut scale = LinearScale::new(0.0, 10.0);
        scale.set_original_range(-5.0, 50.0);
        assert_bounds(&scale, 0.0, 10.0);
        assert_eq!(scale.original_bounds(), (-5.0, 50.0));

        scale.pan(30.0);
        assert_bounds(&scale, 30.0, 40.0);
    }
}
