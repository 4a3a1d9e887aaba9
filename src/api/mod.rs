mod dataset;
mod engine;
mod engine_config;
mod json_contract;
mod layout;
mod render_frame_builder;
mod validation;

pub use dataset::{FieldSpec, HostRow, RadarDataset};
pub use engine::RadarEngine;
pub use engine_config::RadarChartConfig;
pub use json_contract::{HostColor, HostFields, HostPayload, HostStyle, HostTables, StyleEntry};
pub use layout::{
    RADAR_LAYOUT_JSON_SCHEMA_V1, RadarLayout, RadarLayoutJsonContractV1, SeriesGeometry,
};
pub use render_frame_builder::build_render_frame;
pub use validation::MAX_LEVELS;
