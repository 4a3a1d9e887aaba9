#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use radar_rs::RadarError;
use radar_rs::api::{RadarChartConfig, RadarDataset, RadarEngine};
use radar_rs::core::{RadarSeries, Viewport};
use radar_rs::render::CairoRenderer;

fn dataset() -> RadarDataset {
    RadarDataset::new(
        vec!["Speed".to_owned(), "Power".to_owned(), "Defense".to_owned()],
        vec![RadarSeries::new("hero", vec![10.0, 20.0, 30.0])],
    )
    .expect("dataset")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, RadarError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_layer() {
    let renderer = CairoRenderer::new(400, 400).expect("renderer");
    let config = RadarChartConfig::new(Viewport::new(400, 400));
    let mut engine = RadarEngine::new(renderer, config).expect("engine init");

    engine.draw(&dataset()).expect("draw");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.circles_drawn, 5 + 3);
    assert_eq!(stats.lines_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(320, 320).expect("renderer");
    let config = RadarChartConfig::new(Viewport::new(320, 320)).with_show_markers(false);
    let mut engine = RadarEngine::new(renderer, config).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 320, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .draw_on_cairo_context(&context, &dataset())
        .expect("draw on context");

    assert_eq!(engine.into_renderer().last_stats().circles_drawn, 5);
}
