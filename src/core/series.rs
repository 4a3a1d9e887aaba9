use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::polar::{axis_angle, polar_to_cartesian};
use crate::core::{RadarPoint, RadialScale};
use crate::error::{RadarError, RadarResult};

/// One named polygon of the radar, holding one value per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl RadarSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Fails with `ShapeMismatch` unless there is exactly one value per axis.
    pub fn ensure_axis_count(&self, axis_count: usize) -> RadarResult<()> {
        if self.values.len() != axis_count {
            return Err(RadarError::ShapeMismatch {
                series: self.name.clone(),
                expected: axis_count,
                actual: self.values.len(),
            });
        }
        Ok(())
    }

    /// Applies `policy` to every missing or non-finite value.
    pub fn sanitized(mut self, policy: NonFiniteValuePolicy) -> RadarResult<Self> {
        for (axis_index, value) in self.values.iter_mut().enumerate() {
            if value.is_finite() {
                continue;
            }
            match policy {
                NonFiniteValuePolicy::Reject => {
                    return Err(RadarError::InvalidValue {
                        series: self.name,
                        axis_index,
                    });
                }
                NonFiniteValuePolicy::TreatAsZero => {
                    warn!(series = %self.name, axis_index, "non-finite value treated as zero");
                    *value = 0.0;
                }
            }
        }
        Ok(self)
    }
}

/// What to do with `null`, `NaN` or infinite series values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFiniteValuePolicy {
    /// Fail with `RadarError::InvalidValue`.
    #[default]
    Reject,
    /// Replace the value with zero so its vertex sits on the center.
    TreatAsZero,
}

/// Projects one vertex per axis. The polygon is implicitly closed: consumers
/// connect the last vertex back to the first.
///
/// The series must carry exactly one finite value per axis; nothing is
/// produced otherwise.
pub fn compute_series_polygon<S: AsRef<str>>(
    series: &RadarSeries,
    axes: &[S],
    scale: RadialScale,
    angle_slice: f64,
) -> RadarResult<Vec<RadarPoint>> {
    series.ensure_axis_count(axes.len())?;

    let mut vertices = Vec::with_capacity(axes.len());
    for (axis_index, value) in series.values.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(RadarError::InvalidValue {
                series: series.name.clone(),
                axis_index,
            });
        }
        vertices.push(polar_to_cartesian(
            scale.position(value),
            axis_angle(axis_index, angle_slice),
        ));
    }
    Ok(vertices)
}

/// Marker anchors for a series. Positions match the polygon vertices; this is
/// a separate operation so that computing geometry stays independent of
/// whether markers are drawn.
pub fn compute_series_markers<S: AsRef<str>>(
    series: &RadarSeries,
    axes: &[S],
    scale: RadialScale,
    angle_slice: f64,
) -> RadarResult<Vec<RadarPoint>> {
    compute_series_polygon(series, axes, scale, angle_slice)
}
