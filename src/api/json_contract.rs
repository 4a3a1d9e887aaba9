use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RadarError, RadarResult};
use crate::render::Color;

use super::engine_config::default_levels;
use super::{FieldSpec, HostRow, RadarChartConfig, RadarDataset};

/// Style entry as sent by the dashboard host: `{"value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry<T> {
    pub value: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostColor {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStyle {
    #[serde(default)]
    pub levels: Option<StyleEntry<f64>>,
    #[serde(default)]
    pub opacity: Option<StyleEntry<f64>>,
    #[serde(default)]
    pub stroke_width: Option<StyleEntry<f64>>,
    #[serde(default)]
    pub grid_color: Option<StyleEntry<HostColor>>,
    #[serde(default)]
    pub show_dots: Option<StyleEntry<bool>>,
}

/// Field metadata: `concepts` are dimensions, `metrics` are series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostFields {
    #[serde(default)]
    pub concepts: Vec<FieldSpec>,
    #[serde(default)]
    pub metrics: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostTables {
    #[serde(rename = "DEFAULT", default)]
    pub default: Vec<HostRow>,
}

/// Data payload delivered by the dashboard host on every refresh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostPayload {
    #[serde(default)]
    pub style: HostStyle,
    #[serde(default)]
    pub fields: HostFields,
    #[serde(default)]
    pub tables: HostTables,
}

impl HostPayload {
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse host payload: {e}")))
    }

    /// Overlays the payload style on `base`. Entries the host left out keep
    /// the base value; a missing or zero `levels` falls back to the default.
    pub fn resolve_config(&self, base: &RadarChartConfig) -> RadarResult<RadarChartConfig> {
        let mut config = base.clone();
        let style = &self.style;

        config.levels = match style.levels.as_ref().and_then(|entry| entry.value) {
            Some(levels) if levels.is_finite() && levels.round() != 0.0 => {
                levels.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
            }
            _ => default_levels(),
        };
        if let Some(opacity) = style.opacity.as_ref().and_then(|entry| entry.value) {
            config.fill_opacity = opacity;
        }
        if let Some(stroke_width) = style.stroke_width.as_ref().and_then(|entry| entry.value) {
            config.stroke_width = stroke_width;
        }
        if let Some(grid_color) = style
            .grid_color
            .as_ref()
            .and_then(|entry| entry.value.as_ref())
        {
            config.grid_color = Color::from_hex(&grid_color.color)?;
        }
        if let Some(show_dots) = style.show_dots.as_ref().and_then(|entry| entry.value) {
            config.show_markers = show_dots;
        }

        config.validate()?;
        Ok(config)
    }

    /// Builds the dataset from the default table. No rows is an empty dataset.
    pub fn dataset(&self, config: &RadarChartConfig) -> RadarResult<RadarDataset> {
        let rows = &self.tables.default;
        if rows.is_empty() {
            return Ok(RadarDataset::empty());
        }

        let dimension = match self.fields.concepts.as_slice() {
            [] => {
                return Err(RadarError::InvalidData(
                    "host payload declares no dimension field".to_owned(),
                ));
            }
            [dimension] => dimension,
            [dimension, ..] => {
                warn!(
                    dimensions = self.fields.concepts.len(),
                    used = %dimension.id,
                    "host payload declares several dimensions, using the first"
                );
                dimension
            }
        };

        RadarDataset::from_rows(
            dimension,
            &self.fields.metrics,
            rows,
            config.non_finite_policy,
        )
    }

    /// Resolves both the per-call config and the dataset.
    pub fn into_parts(
        &self,
        base: &RadarChartConfig,
    ) -> RadarResult<(RadarChartConfig, RadarDataset)> {
        let config = self.resolve_config(base)?;
        let dataset = self.dataset(&config)?;
        Ok((config, dataset))
    }
}
