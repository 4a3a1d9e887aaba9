//! radar-rs: radial chart layout engine.
//!
//! The crate keeps a strict split between pure geometry (`core`), the
//! orchestration surface consumed by hosts (`api`) and backend-agnostic draw
//! primitives (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RadarChartConfig, RadarDataset, RadarEngine, RadarLayout};
pub use error::{RadarError, RadarResult};
