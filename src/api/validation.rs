use crate::error::{RadarError, RadarResult};

use super::RadarChartConfig;

/// Upper bound on concentric grid rings.
pub const MAX_LEVELS: i32 = 1_000;

pub(super) fn validate_chart_config(config: &RadarChartConfig) -> RadarResult<()> {
    if !config.viewport.is_valid() {
        return Err(RadarError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    if config.levels > MAX_LEVELS {
        return Err(RadarError::InvalidData(format!(
            "`levels` must be <= {MAX_LEVELS}, got {}",
            config.levels
        )));
    }

    for (name, value) in [
        ("margins.top", config.margins.top),
        ("margins.right", config.margins.right),
        ("margins.bottom", config.margins.bottom),
        ("margins.left", config.margins.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RadarError::InvalidData(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("fill_opacity", config.fill_opacity),
        ("marker_fill_opacity", config.marker_fill_opacity),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(RadarError::InvalidData(format!(
                "`{name}` must be finite and in [0, 1]"
            )));
        }
    }

    for (name, value) in [
        ("stroke_width", config.stroke_width),
        ("ring_stroke_width", config.ring_stroke_width),
        ("spoke_stroke_width", config.spoke_stroke_width),
        ("marker_radius_px", config.marker_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RadarError::InvalidData(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    if !config.label_padding.is_finite() || config.label_padding <= 0.0 {
        return Err(RadarError::InvalidData(
            "`label_padding` must be finite and > 0".to_owned(),
        ));
    }
    if !config.label_font_size_px.is_finite() || config.label_font_size_px <= 0.0 {
        return Err(RadarError::InvalidData(
            "`label_font_size_px` must be finite and > 0".to_owned(),
        ));
    }
    if config
        .ring_dash
        .iter()
        .any(|length| !length.is_finite() || *length < 0.0)
    {
        return Err(RadarError::InvalidData(
            "`ring_dash` lengths must be finite and >= 0".to_owned(),
        ));
    }
    if config.series_palette.is_empty() {
        return Err(RadarError::InvalidData(
            "`series_palette` must contain at least one color".to_owned(),
        ));
    }

    config.grid_color.validate()?;
    config.label_color.validate()?;
    for color in &config.series_palette {
        color.validate()?;
    }

    Ok(())
}
