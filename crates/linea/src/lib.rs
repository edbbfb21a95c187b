//! Linea - 2D line-chart engine
//!
//! This crate provides:
//! - Linear scales mapping data ranges to unit space, with pan/zoom/clamp
//! - Automatic axis ranging and nice tick generation
//! - Multiple Y axes bound to subsets of series
//! - Gesture translation for drag and pinch
//! - Curve fitting (Catmull-Rom, monotone cubic, TCB, beta-spline, B-spline)
//!
//! Rendering is left to the host: the engine outputs resolved ranges, tick
//! lists and [`Path`] geometry.
//!
//! # Example
//!
//! ```
//! use linea::*;
//! use glam::DVec2;
//!
//! let mut chart = Chart::new()
//!     .with_y_axes(
//!         AxisGroup::with(Axis::y(), ["temp"])
//!             .bind(Axis::y_secondary(), ["pressure"]),
//!     )
//!     .unwrap();
//!
//! chart.insert_series("temp", Series::from_points([(0.0, 18.5), (1.0, 21.0), (2.0, 19.2)]));
//! chart.insert_series(
//!     "pressure",
//!     Series::from_points([(0.0, 1009.0), (1.0, 1013.0), (2.0, 1011.0)])
//!         .with_smoothing(Smoothing::catmull_rom()),
//! );
//!
//! let viewport = DVec2::new(640.0, 360.0);
//! chart.pinch(1.5, viewport / 2.0, viewport);
//!
//! for tick in chart.x_ticks() {
//!     println!("{} at {}", tick.label, tick.value);
//! }
//! for (id, path) in chart.series_paths(viewport) {
//!     println!("{id}: {} commands", path.len());
//! }
//! ```

// Geometry primitives
mod curve;
mod path;
mod types;

// Scaling and ranging
pub mod autorange;
mod scale;
pub mod ticks;

// Axes
mod axis;
mod binding;
mod format;

// Interaction
mod interaction;

// Curve fitting
pub mod spline;

// Chart context
mod chart;
mod config;
mod error;
mod series;

// Re-exports
pub use curve::*;
pub use path::*;
pub use types::*;

pub use autorange::AutoRange;
pub use scale::*;
pub use ticks::{Tick, TickGenerator};

pub use axis::*;
pub use binding::*;
pub use format::*;

pub use interaction::*;

pub use spline::{KnotParam, Smoothing, build_curve};

pub use chart::*;
pub use config::*;
pub use error::*;
pub use series::*;
