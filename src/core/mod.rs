pub mod axis;
pub mod grid;
pub mod polar;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{
    AxisLabel, AxisLine, DEFAULT_LABEL_PADDING, compute_axis_label_positions, compute_axis_lines,
};
pub use grid::compute_grid_rings;
pub use polar::{axis_angle, compute_angle_slice, polar_to_cartesian};
pub use scale::{RadialScale, compute_scale};
pub use series::{NonFiniteValuePolicy, RadarSeries, compute_series_markers, compute_series_polygon};
pub use types::{Margins, PlotArea, RadarPoint, Viewport, compute_viewport};
