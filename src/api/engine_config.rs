use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LABEL_PADDING, Margins, NonFiniteValuePolicy, Viewport};
use crate::error::{RadarError, RadarResult};
use crate::render::Color;

use super::validation::validate_chart_config;

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field except the viewport
/// has a default, so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    /// Number of concentric grid rings. Zero or negative draws none.
    #[serde(default = "default_levels")]
    pub levels: i32,
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,
    /// Series outline width. Zero disables the outline.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_show_markers")]
    pub show_markers: bool,
    #[serde(default = "default_label_padding")]
    pub label_padding: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_marker_fill_opacity")]
    pub marker_fill_opacity: f64,
    #[serde(default = "default_ring_stroke_width")]
    pub ring_stroke_width: f64,
    #[serde(default = "default_ring_dash")]
    pub ring_dash: Vec<f64>,
    #[serde(default = "default_spoke_stroke_width")]
    pub spoke_stroke_width: f64,
    /// Series colors, cycled by series index.
    #[serde(default = "default_series_palette")]
    pub series_palette: Vec<Color>,
    #[serde(default)]
    pub non_finite_policy: NonFiniteValuePolicy,
}

impl RadarChartConfig {
    /// Creates a config with the default radar styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            levels: default_levels(),
            fill_opacity: default_fill_opacity(),
            stroke_width: default_stroke_width(),
            grid_color: default_grid_color(),
            show_markers: default_show_markers(),
            label_padding: default_label_padding(),
            label_font_size_px: default_label_font_size_px(),
            label_color: default_label_color(),
            marker_radius_px: default_marker_radius_px(),
            marker_fill_opacity: default_marker_fill_opacity(),
            ring_stroke_width: default_ring_stroke_width(),
            ring_dash: default_ring_dash(),
            spoke_stroke_width: default_spoke_stroke_width(),
            series_palette: default_series_palette(),
            non_finite_policy: NonFiniteValuePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_levels(mut self, levels: i32) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    #[must_use]
    pub fn with_show_markers(mut self, show_markers: bool) -> Self {
        self.show_markers = show_markers;
        self
    }

    #[must_use]
    pub fn with_label_padding(mut self, label_padding: f64) -> Self {
        self.label_padding = label_padding;
        self
    }

    #[must_use]
    pub fn with_series_palette(mut self, palette: Vec<Color>) -> Self {
        self.series_palette = palette;
        self
    }

    #[must_use]
    pub fn with_non_finite_policy(mut self, policy: NonFiniteValuePolicy) -> Self {
        self.non_finite_policy = policy;
        self
    }

    /// Color assigned to the series at `index`.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_palette.is_empty() {
            return default_series_palette()[0];
        }
        self.series_palette[index % self.series_palette.len()]
    }

    pub fn validate(&self) -> RadarResult<()> {
        validate_chart_config(self)
    }

    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RadarError::InvalidData(format!("failed to parse chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RadarError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

pub(crate) fn default_levels() -> i32 {
    5
}

fn default_fill_opacity() -> f64 {
    0.35
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_grid_color() -> Color {
    Color::rgb(0.8, 0.8, 0.8)
}

fn default_show_markers() -> bool {
    true
}

fn default_label_padding() -> f64 {
    DEFAULT_LABEL_PADDING
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_label_color() -> Color {
    Color::rgb(0.2, 0.2, 0.2)
}

fn default_marker_radius_px() -> f64 {
    4.0
}

fn default_marker_fill_opacity() -> f64 {
    0.8
}

fn default_ring_stroke_width() -> f64 {
    0.5
}

fn default_ring_dash() -> Vec<f64> {
    vec![2.0, 2.0]
}

fn default_spoke_stroke_width() -> f64 {
    1.0
}

fn default_series_palette() -> Vec<Color> {
    [
        (31.0, 119.0, 180.0),
        (255.0, 127.0, 14.0),
        (44.0, 160.0, 44.0),
        (214.0, 39.0, 40.0),
        (148.0, 103.0, 189.0),
        (140.0, 86.0, 75.0),
    ]
    .into_iter()
    .map(|(red, green, blue)| Color::rgb(red / 255.0, green / 255.0, blue / 255.0))
    .collect()
}
