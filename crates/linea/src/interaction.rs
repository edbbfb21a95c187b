//! Pan and zoom.
//!
//! [`ZoomPanController`] turns viewport-relative gesture deltas into scale
//! mutations. It holds no per-gesture state; the scales are borrowed for the
//! duration of one call.

use crate::scale::LinearScale;
use bitflags::bitflags;
use glam::DVec2;

bitflags! {
    /// Axes an interaction is allowed to change.
    ///
    /// `empty()` disables the interaction, `all()` enables both axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ZoomAxes: u8 {
        /// Horizontal axis
        const X = 1 << 0;
        /// Vertical axes
        const Y = 1 << 1;
    }
}

impl Default for ZoomAxes {
    fn default() -> Self {
        Self::all()
    }
}

/// Viewport extents at or below this are treated as not laid out yet.
const MIN_VIEWPORT_EXTENT: f64 = 1.0;

/// Translates drag and pinch gestures into scale changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanController {
    /// Span every scale is widened to after a pinch, if narrower
    pub min_span: f64,
}

impl Default for ZoomPanController {
    fn default() -> Self {
        Self { min_span: 1e-9 }
    }
}

impl ZoomPanController {
    pub fn new(min_span: f64) -> Self {
        Self { min_span }
    }

    /// Pan by a drag of `drag` viewport units inside a `viewport`-sized area.
    ///
    /// Dragging right reveals data to the left, so the X delta is negated.
    /// Screen Y grows downward while values grow upward, so the Y delta is
    /// applied as is.
    pub fn pan(
        &self,
        x: &mut LinearScale,
        y: Option<&mut LinearScale>,
        drag: DVec2,
        viewport: DVec2,
        mode: ZoomAxes,
    ) {
        self.pan_many(x, y, drag, viewport, mode);
    }

    /// [`pan`](Self::pan) with any number of Y scales sharing the gesture.
    pub fn pan_many<'a>(
        &self,
        x: &mut LinearScale,
        ys: impl IntoIterator<Item = &'a mut LinearScale>,
        drag: DVec2,
        viewport: DVec2,
        mode: ZoomAxes,
    ) {
        tracing::trace!(?drag, ?viewport, ?mode, "Pan");

        if mode.contains(ZoomAxes::X) && viewport.x > MIN_VIEWPORT_EXTENT {
            let fraction = drag.x / viewport.x;
            x.pan(-x.span() * fraction);
        }
        if mode.contains(ZoomAxes::Y) && viewport.y > MIN_VIEWPORT_EXTENT {
            let fraction = drag.y / viewport.y;
            for y in ys {
                y.pan(y.span() * fraction);
            }
        }
    }

    /// Zoom by `factor` around `focus` (viewport units, origin top-left).
    ///
    /// Afterwards every scale, enabled or not, is widened to at least
    /// `min_span`.
    pub fn pinch(
        &self,
        x: &mut LinearScale,
        y: Option<&mut LinearScale>,
        factor: f64,
        focus: DVec2,
        viewport: DVec2,
        mode: ZoomAxes,
    ) {
        self.pinch_many(x, y, factor, focus, viewport, mode);
    }

    /// [`pinch`](Self::pinch) with any number of Y scales sharing the gesture.
    pub fn pinch_many<'a>(
        &self,
        x: &mut LinearScale,
        ys: impl IntoIterator<Item = &'a mut LinearScale>,
        factor: f64,
        focus: DVec2,
        viewport: DVec2,
        mode: ZoomAxes,
    ) {
        tracing::trace!(factor, ?focus, ?viewport, ?mode, "Pinch");

        let fx = focus.x / viewport.x.max(MIN_VIEWPORT_EXTENT);
        let fy = 1.0 - focus.y / viewport.y.max(MIN_VIEWPORT_EXTENT);

        if mode.contains(ZoomAxes::X) {
            let around = x.from_unit(fx);
            x.zoom(factor, around);
        }
        x.clamp_span(self.min_span);

        for y in ys {
            if mode.contains(ZoomAxes::Y) {
                let around = y.from_unit(fy);
                y.zoom(factor, around);
            }
            y.clamp_span(self.min_span);
        }
    }
}
