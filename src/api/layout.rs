use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{
    AxisLabel, AxisLine, NonFiniteValuePolicy, PlotArea, RadarPoint, RadarSeries, RadialScale,
    compute_angle_slice, compute_axis_label_positions, compute_axis_lines, compute_grid_rings,
    compute_scale, compute_series_markers, compute_series_polygon, compute_viewport,
};
use crate::error::{RadarError, RadarResult};

use super::{RadarChartConfig, RadarDataset};

pub const RADAR_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// Geometry of one series, in center-relative coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub name: String,
    /// Implicitly closed polygon, one vertex per axis.
    pub polygon: Vec<RadarPoint>,
    /// Marker anchors, present only when markers are enabled.
    pub markers: Option<Vec<RadarPoint>>,
}

/// Every geometric primitive of one radar draw.
///
/// Ring radii, spokes, labels and series vertices are relative to the radial
/// center; `plot_area.center` locates that center in host pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub plot_area: PlotArea,
    pub scale: RadialScale,
    /// `None` when there are no axes.
    pub angle_slice: Option<f64>,
    pub rings: Vec<f64>,
    pub axis_lines: Vec<AxisLine>,
    pub axis_labels: Vec<AxisLabel>,
    pub series: Vec<SeriesGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: RadarLayout,
}

impl RadarLayout {
    /// Runs the full layout pass for one draw call.
    ///
    /// An empty dataset produces an empty layout rather than an error. Any
    /// series that does not match the axis count fails the whole pass.
    pub fn compute(config: &RadarChartConfig, dataset: &RadarDataset) -> RadarResult<Self> {
        let plot_area = compute_viewport(config.viewport, config.margins);
        let axes = dataset.axes();
        let scale = compute_scale(dataset.series(), axes, plot_area.radius);

        if dataset.is_empty() {
            debug!(
                series = dataset.series().len(),
                "no axes to lay out, producing empty radar layout"
            );
            return Ok(Self {
                plot_area,
                scale,
                angle_slice: None,
                rings: Vec::new(),
                axis_lines: Vec::new(),
                axis_labels: Vec::new(),
                series: Vec::new(),
            });
        }

        let angle_slice = compute_angle_slice(axes.len())?;
        let series = project_all_series(
            dataset.series(),
            axes,
            scale,
            angle_slice,
            config.show_markers,
            config.non_finite_policy,
        )?;

        debug!(
            axes = axes.len(),
            series = series.len(),
            radius = plot_area.radius,
            max_value = scale.max_value(),
            "computed radar layout"
        );

        Ok(Self {
            plot_area,
            scale,
            angle_slice: Some(angle_slice),
            rings: compute_grid_rings(config.levels, plot_area.radius),
            axis_lines: compute_axis_lines(axes, scale, angle_slice),
            axis_labels: compute_axis_label_positions(
                axes,
                scale,
                angle_slice,
                config.label_padding,
            ),
            series,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty() && self.axis_lines.is_empty() && self.series.is_empty()
    }

    pub fn to_json_contract_v1_pretty(&self) -> RadarResult<String> {
        let payload = RadarLayoutJsonContractV1 {
            schema_version: RADAR_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RadarError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> RadarResult<Self> {
        if let Ok(layout) = serde_json::from_str::<RadarLayout>(input) {
            return Ok(layout);
        }
        let payload: RadarLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RadarError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != RADAR_LAYOUT_JSON_SCHEMA_V1 {
            return Err(RadarError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

fn project_all_series(
    series: &[RadarSeries],
    axes: &[String],
    scale: RadialScale,
    angle_slice: f64,
    show_markers: bool,
    policy: NonFiniteValuePolicy,
) -> RadarResult<Vec<SeriesGeometry>> {
    // Output order matches input order in both paths.
    #[cfg(feature = "parallel-projection")]
    {
        series
            .par_iter()
            .map(|item| project_series(item, axes, scale, angle_slice, show_markers, policy))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series
            .iter()
            .map(|item| project_series(item, axes, scale, angle_slice, show_markers, policy))
            .collect()
    }
}

fn project_series(
    series: &RadarSeries,
    axes: &[String],
    scale: RadialScale,
    angle_slice: f64,
    show_markers: bool,
    policy: NonFiniteValuePolicy,
) -> RadarResult<SeriesGeometry> {
    series.ensure_axis_count(axes.len())?;
    let series = if series.values.iter().all(|value| value.is_finite()) {
        Cow::Borrowed(series)
    } else {
        Cow::Owned(series.clone().sanitized(policy)?)
    };

    let polygon = compute_series_polygon(&series, axes, scale, angle_slice)?;
    let markers = if show_markers {
        Some(compute_series_markers(&series, axes, scale, angle_slice)?)
    } else {
        None
    };

    Ok(SeriesGeometry {
        name: series.name.clone(),
        polygon,
        markers,
    })
}
