use serde::{Deserialize, Serialize};

use crate::core::polar::{axis_angle, polar_to_cartesian};
use crate::core::{RadarPoint, RadialScale};

/// Default factor that pushes axis labels just past the outer ring.
pub const DEFAULT_LABEL_PADDING: f64 = 1.1;

/// Spoke from the center to the outer ring, in center-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Projects one spoke per axis.
///
/// Spokes describe axis extent, so they always reach the full radius even when
/// the data scale is degenerate.
#[must_use]
pub fn compute_axis_lines<S: AsRef<str>>(
    axes: &[S],
    scale: RadialScale,
    angle_slice: f64,
) -> Vec<AxisLine> {
    (0..axes.len())
        .map(|index| {
            let end = polar_to_cartesian(scale.radius(), axis_angle(index, angle_slice));
            AxisLine {
                x1: RadarPoint::ORIGIN.x,
                y1: RadarPoint::ORIGIN.y,
                x2: end.x,
                y2: end.y,
            }
        })
        .collect()
}

#[must_use]
pub fn compute_axis_label_positions<S: AsRef<str>>(
    axes: &[S],
    scale: RadialScale,
    angle_slice: f64,
    label_padding: f64,
) -> Vec<AxisLabel> {
    let distance = scale.radius() * label_padding;
    axes.iter()
        .enumerate()
        .map(|(index, label)| {
            let anchor = polar_to_cartesian(distance, axis_angle(index, angle_slice));
            AxisLabel {
                x: anchor.x,
                y: anchor.y,
                text: label.as_ref().to_owned(),
            }
        })
        .collect()
}
