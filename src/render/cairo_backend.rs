use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{RadarError, RadarResult};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, PolygonPrimitive, RenderFrame, Renderer, Stroke,
    TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RadarResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// The surface is cleared with the clear color before every frame, so each
/// draw fully replaces the previous one.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RadarResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RadarError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RadarResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RadarResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> RadarResult<()> {
    for polygon in &layer.polygons {
        append_polygon_path(context, polygon);
        fill_and_stroke(context, polygon.fill, polygon.stroke.as_ref())?;
        stats.polygons_drawn += 1;
    }

    for circle in &layer.circles {
        append_circle_path(context, circle);
        fill_and_stroke(context, circle.fill, circle.stroke.as_ref())?;
        stats.circles_drawn += 1;
    }

    for line in &layer.lines {
        context.new_path();
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        apply_stroke(context, &line.stroke);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = text.y - f64::from(text_height) / 2.0;

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn fill_and_stroke(
    context: &Context,
    fill: Option<Color>,
    stroke: Option<&Stroke>,
) -> RadarResult<()> {
    match (fill, stroke) {
        (Some(fill), Some(stroke)) => {
            apply_color(context, fill);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
            apply_stroke(context, stroke);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))
        }
        (Some(fill), None) => {
            apply_color(context, fill);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill path", err))
        }
        (None, Some(stroke)) => {
            apply_stroke(context, stroke);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))
        }
        (None, None) => {
            context.new_path();
            Ok(())
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, stroke: &Stroke) {
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context.set_dash(&stroke.dash, 0.0);
}

fn append_polygon_path(context: &Context, polygon: &PolygonPrimitive) {
    context.new_path();
    let mut points = polygon.points.iter();
    if let Some(first) = points.next() {
        context.move_to(first.x, first.y);
    }
    for point in points {
        context.line_to(point.x, point.y);
    }
    context.close_path();
}

fn append_circle_path(context: &Context, circle: &CirclePrimitive) {
    context.new_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RadarError {
    RadarError::InvalidData(format!("{prefix}: {err}"))
}
