//! Multiple Y axes.
//!
//! An [`AxisGroup`] holds an ordered list of [`AxisBinding`]s, each pairing
//! one [`Axis`] with the series it measures. A binding with no ids is a
//! wildcard and takes every series that no explicit binding names.

use crate::axis::Axis;
use crate::error::{ChartError, ChartResult};
use crate::series::{Series, SeriesMap};
use linea_core::alloc::HashSet;
use linea_core::profiling::profile_function;
use std::fmt::Debug;
use std::hash::Hash;

/// One axis and the series ids it measures.
#[derive(Debug, Clone)]
pub struct AxisBinding<K: Eq + Hash> {
    /// The bound axis
    pub axis: Axis,
    series_ids: HashSet<K>,
}

impl<K: Eq + Hash> AxisBinding<K> {
    /// Bind `axis` to the listed series. An empty list makes a wildcard.
    pub fn new(axis: Axis, series_ids: impl IntoIterator<Item = K>) -> Self {
        Self {
            axis,
            series_ids: series_ids.into_iter().collect(),
        }
    }

    /// Bind `axis` to every series not claimed by an explicit binding.
    pub fn wildcard(axis: Axis) -> Self {
        Self {
            axis,
            series_ids: HashSet::default(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.series_ids.is_empty()
    }

    /// Whether `id` is listed explicitly.
    pub fn names(&self, id: &K) -> bool {
        self.series_ids.contains(id)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &K> {
        self.series_ids.iter()
    }
}

/// Ordered Y-axis bindings of a chart. Never empty.
#[derive(Debug, Clone)]
pub struct AxisGroup<K: Eq + Hash> {
    bindings: Vec<AxisBinding<K>>,
}

impl<K: Eq + Hash> Default for AxisGroup<K> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K: Eq + Hash> AxisGroup<K> {
    /// Group the given bindings. An empty list gets one wildcard Y axis.
    pub fn new(mut bindings: Vec<AxisBinding<K>>) -> Self {
        if bindings.is_empty() {
            bindings.push(AxisBinding::wildcard(Axis::y()));
        }
        Self { bindings }
    }

    /// A group with one explicit binding, to be extended with [`bind`](Self::bind).
    pub fn with(axis: Axis, series_ids: impl IntoIterator<Item = K>) -> Self {
        Self::new(vec![AxisBinding::new(axis, series_ids)])
    }

    /// Append a binding.
    pub fn bind(mut self, axis: Axis, series_ids: impl IntoIterator<Item = K>) -> Self {
        self.bindings.push(AxisBinding::new(axis, series_ids));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[AxisBinding<K>] {
        &self.bindings
    }

    pub fn axis(&self, index: usize) -> ChartResult<&Axis> {
        let len = self.bindings.len();
        self.bindings
            .get(index)
            .map(|b| &b.axis)
            .ok_or(ChartError::BindingOutOfRange { index, len })
    }

    pub fn axis_mut(&mut self, index: usize) -> ChartResult<&mut Axis> {
        let len = self.bindings.len();
        self.bindings
            .get_mut(index)
            .map(|b| &mut b.axis)
            .ok_or(ChartError::BindingOutOfRange { index, len })
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.bindings.iter().map(|b| &b.axis)
    }

    pub fn axes_mut(&mut self) -> impl Iterator<Item = &mut Axis> {
        self.bindings.iter_mut().map(|b| &mut b.axis)
    }

    /// Index of the binding that measures `id`: an explicit binding naming
    /// it, else the first wildcard, else `None` (the series is not drawn).
    pub fn axis_for(&self, id: &K) -> Option<usize> {
        self.bindings
            .iter()
            .position(|b| b.names(id))
            .or_else(|| self.bindings.iter().position(AxisBinding::is_wildcard))
    }

    /// Resolve every bound axis from its own subset of `series`.
    ///
    /// A binding whose subset is empty keeps its previous range.
    pub fn resolve_all(
        &mut self,
        series: &SeriesMap<K>,
        target_ticks: usize,
        reset_original: bool,
    ) {
        profile_function!();

        let explicit: HashSet<&K> = self
            .bindings
            .iter()
            .flat_map(|b| b.series_ids.iter())
            .collect();
        let subsets: Vec<Vec<&Series>> = self
            .bindings
            .iter()
            .map(|binding| {
                series
                    .iter()
                    .filter(|(id, _)| {
                        if binding.is_wildcard() {
                            !explicit.contains(id)
                        } else {
                            binding.names(id)
                        }
                    })
                    .map(|(_, s)| s)
                    .collect()
            })
            .collect();

        for (index, (binding, subset)) in self.bindings.iter_mut().zip(subsets).enumerate() {
            if subset.is_empty() {
                tracing::trace!(index, "Skipping binding with no series");
                continue;
            }
            binding
                .axis
                .resolve_from_series(subset, target_ticks, reset_original);
        }
    }
}

impl<K: Eq + Hash + Debug> AxisGroup<K> {
    /// Check that no series id is listed by two explicit bindings.
    pub fn validate(&self) -> ChartResult<()> {
        for (second, binding) in self.bindings.iter().enumerate() {
            for id in &binding.series_ids {
                if let Some(first) = self.bindings[..second].iter().position(|b| b.names(id)) {
                    return Err(ChartError::SeriesAlreadyBound {
                        id: format!("{:?}", id),
                        first,
                        second,
                    });
                }
            }
        }
        Ok(())
    }
}
