use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error, PartialEq)]
pub enum RadarError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series `{series}` has {actual} values but the chart has {expected} axes")]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("series `{series}` has a missing or non-finite value at axis {axis_index}")]
    InvalidValue { series: String, axis_index: usize },
}
