use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::RadarSeries;

/// Linear mapping from `[0, max_value]` onto `[0, radius]`.
///
/// A scale whose `max_value` is not strictly positive is degenerate: every
/// data position collapses to the center. The range `radius` stays available
/// so grid rings and spokes can still be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialScale {
    max_value: f64,
    radius: f64,
}

impl RadialScale {
    #[must_use]
    pub fn new(max_value: f64, radius: f64) -> Self {
        Self {
            max_value: if max_value.is_finite() { max_value } else { 0.0 },
            radius: if radius.is_finite() { radius.max(0.0) } else { 0.0 },
        }
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        if self.is_degenerate() {
            (0.0, 0.0)
        } else {
            (0.0, self.max_value)
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max_value <= 0.0
    }

    /// Maps a data value to its distance from the center.
    ///
    /// Values are not clamped: anything above `max_value` lands outside the
    /// outer ring and negative values land on the opposite side of the center.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        value / self.max_value * self.radius
    }
}

/// Builds the single global scale shared by every series.
///
/// Only values aligned with an axis take part in the maximum; non-finite
/// values are ignored here and rejected later during polygon projection.
#[must_use]
pub fn compute_scale<S: AsRef<str>>(
    series: &[RadarSeries],
    axes: &[S],
    radius: f64,
) -> RadialScale {
    let max_value = global_max_value(series, axes.len()).unwrap_or(0.0);
    RadialScale::new(max_value, radius)
}

pub(crate) fn global_max_value(series: &[RadarSeries], axis_count: usize) -> Option<f64> {
    series
        .iter()
        .flat_map(|series| series.values.iter().take(axis_count))
        .copied()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(|max| max.0)
}
