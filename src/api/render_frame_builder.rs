use tracing::trace;

use crate::error::RadarResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayerPrimitives, LinePrimitive, PolygonPrimitive,
    RenderFrame, Stroke, TextHAlign, TextPrimitive,
};

use super::{RadarChartConfig, RadarLayout};

/// Materializes a layout into host-pixel draw primitives.
///
/// Layers come out in paint order: grid rings, then spokes with their labels,
/// then one layer per series (filled polygon followed by its markers).
pub fn build_render_frame(
    layout: &RadarLayout,
    config: &RadarChartConfig,
) -> RadarResult<RenderFrame> {
    let center = layout.plot_area.center;
    let mut frame = RenderFrame::new(config.viewport);

    let mut grid = LayerPrimitives::new(CanvasLayerKind::Grid);
    let ring_stroke = Stroke::dashed(
        config.grid_color,
        config.ring_stroke_width,
        config.ring_dash.clone(),
    );
    grid.circles.extend(layout.rings.iter().map(|radius| {
        CirclePrimitive::outlined(center.x, center.y, *radius, ring_stroke.clone())
    }));
    frame.layers.push(grid);

    let mut axis = LayerPrimitives::new(CanvasLayerKind::Axis);
    let spoke_stroke = Stroke::solid(config.grid_color, config.spoke_stroke_width);
    axis.lines.extend(layout.axis_lines.iter().map(|line| {
        LinePrimitive::new(
            center.x + line.x1,
            center.y + line.y1,
            center.x + line.x2,
            center.y + line.y2,
            spoke_stroke.clone(),
        )
    }));
    axis.texts.extend(
        layout
            .axis_labels
            .iter()
            .filter(|label| !label.text.is_empty())
            .map(|label| {
                TextPrimitive::new(
                    label.text.clone(),
                    center.x + label.x,
                    center.y + label.y,
                    config.label_font_size_px,
                    config.label_color,
                    TextHAlign::Center,
                )
            }),
    );
    frame.layers.push(axis);

    for (index, series) in layout.series.iter().enumerate() {
        let color = config.series_color(index);
        let mut layer = LayerPrimitives::series(series.name.clone());

        if !series.polygon.is_empty() {
            let stroke = (config.stroke_width > 0.0)
                .then(|| Stroke::solid(color, config.stroke_width));
            layer.polygons.push(PolygonPrimitive::new(
                series
                    .polygon
                    .iter()
                    .map(|vertex| vertex.translated(center))
                    .collect(),
                Some(color.with_alpha(config.fill_opacity)),
                stroke,
            ));
        }

        if let Some(markers) = &series.markers {
            let fill = color.with_alpha(config.marker_fill_opacity);
            layer.circles.extend(markers.iter().map(|marker| {
                let anchor = marker.translated(center);
                CirclePrimitive::filled(anchor.x, anchor.y, config.marker_radius_px, fill)
            }));
        }

        frame.layers.push(layer);
    }

    trace!(
        lines = frame.line_count(),
        circles = frame.circle_count(),
        polygons = frame.polygon_count(),
        texts = frame.text_count(),
        "built radar render frame"
    );
    Ok(frame)
}
