use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::RadarPoint;
use crate::error::{RadarError, RadarResult};

/// Angular distance between two neighbouring axes.
pub fn compute_angle_slice(axis_count: usize) -> RadarResult<f64> {
    if axis_count == 0 {
        return Err(RadarError::InvalidData(
            "angle slice requires at least one axis".to_owned(),
        ));
    }
    Ok(TAU / axis_count as f64)
}

/// Angle of axis `index`. Axis 0 points straight up and angles grow
/// clockwise on screen because y grows downward.
#[must_use]
pub fn axis_angle(index: usize, angle_slice: f64) -> f64 {
    index as f64 * angle_slice - FRAC_PI_2
}

#[must_use]
pub fn polar_to_cartesian(distance: f64, angle: f64) -> RadarPoint {
    let (sin, cos) = angle.sin_cos();
    RadarPoint::new(distance * cos, distance * sin)
}
