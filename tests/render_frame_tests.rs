use approx::assert_abs_diff_eq;
use radar_rs::RadarError;
use radar_rs::api::{RadarChartConfig, RadarDataset, RadarEngine, RadarLayout, build_render_frame};
use radar_rs::core::{NonFiniteValuePolicy, RadarSeries, Viewport};
use radar_rs::render::{CanvasLayerKind, NullRenderer};

fn skills_dataset() -> RadarDataset {
    RadarDataset::new(
        vec!["Speed".to_owned(), "Power".to_owned(), "Defense".to_owned()],
        vec![
            RadarSeries::new("Alice", vec![10.0, 20.0, 30.0]),
            RadarSeries::new("Bob", vec![4.0, 8.0, 12.0]),
        ],
    )
    .expect("dataset")
}

fn engine(config: RadarChartConfig) -> RadarEngine<NullRenderer> {
    RadarEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn frame_contains_rings_spokes_labels_polygons_and_markers() {
    let mut engine = engine(RadarChartConfig::new(Viewport::new(300, 300)));
    engine.draw(&skills_dataset()).expect("draw");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    let frame = renderer.last_frame.expect("frame");

    let grid: Vec<_> = frame.layers_of(CanvasLayerKind::Grid).collect();
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].circles.len(), 5);

    let axis: Vec<_> = frame.layers_of(CanvasLayerKind::Axis).collect();
    assert_eq!(axis[0].lines.len(), 3);
    assert_eq!(axis[0].texts.len(), 3);

    let series: Vec<_> = frame.layers_of(CanvasLayerKind::Series).collect();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label.as_deref(), Some("Alice"));
    assert_eq!(frame.polygon_count(), 2);
    assert_eq!(frame.circle_count(), 5 + 6);
}

#[test]
fn geometry_is_translated_to_the_plot_center() {
    let config = RadarChartConfig::new(Viewport::new(300, 300));
    let layout = RadarLayout::compute(&config, &skills_dataset()).expect("layout");
    let frame = build_render_frame(&layout, &config).expect("frame");

    let grid = frame.layers_of(CanvasLayerKind::Grid).next().expect("grid");
    let outer = grid.circles.last().expect("outer ring");
    assert_eq!((outer.cx, outer.cy, outer.radius), (150.0, 150.0, 100.0));
    assert_eq!(outer.stroke.as_ref().expect("stroke").dash, vec![2.0, 2.0]);

    let alice = frame
        .layers_of(CanvasLayerKind::Series)
        .next()
        .expect("alice");
    let top = alice.polygons[0].points[0];
    assert_abs_diff_eq!(top.x, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(top.y, 150.0 - 100.0 / 3.0, epsilon = 1e-9);

    let fill = alice.polygons[0].fill.expect("fill");
    assert_eq!(fill.alpha, config.fill_opacity);
    assert_eq!(alice.circles[0].radius, config.marker_radius_px);
}

#[test]
fn markers_are_skipped_when_disabled() {
    let config = RadarChartConfig::new(Viewport::new(300, 300)).with_show_markers(false);
    let layout = RadarLayout::compute(&config, &skills_dataset()).expect("layout");
    assert!(layout.series.iter().all(|series| series.markers.is_none()));

    let frame = build_render_frame(&layout, &config).expect("frame");
    assert_eq!(frame.circle_count(), 5);
}

#[test]
fn zero_stroke_width_drops_polygon_outline() {
    let config = RadarChartConfig::new(Viewport::new(300, 300)).with_stroke_width(0.0);
    let layout = RadarLayout::compute(&config, &skills_dataset()).expect("layout");
    let frame = build_render_frame(&layout, &config).expect("frame");
    for layer in frame.layers_of(CanvasLayerKind::Series) {
        assert!(layer.polygons[0].stroke.is_none());
    }
}

#[test]
fn empty_dataset_draws_nothing_without_error() {
    let mut engine = engine(RadarChartConfig::new(Viewport::new(300, 300)));
    let layout = engine.draw(&RadarDataset::empty()).expect("draw");
    assert!(layout.is_empty());
    assert!(layout.angle_slice.is_none());

    let frame = engine.into_renderer().last_frame.expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn all_zero_data_keeps_grid_and_collapses_polygons() {
    let dataset = RadarDataset::new(
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned(), "d".to_owned()],
        vec![RadarSeries::new("zero", vec![0.0; 4])],
    )
    .expect("dataset");
    let config = RadarChartConfig::new(Viewport::new(300, 300));
    let layout = RadarLayout::compute(&config, &dataset).expect("layout");

    assert!(layout.scale.is_degenerate());
    assert_eq!(layout.rings, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
    for line in &layout.axis_lines {
        assert_abs_diff_eq!(line.x2.hypot(line.y2), 100.0, epsilon = 1e-9);
    }
    for vertex in &layout.series[0].polygon {
        assert_eq!(vertex.distance_from_origin(), 0.0);
    }
}

#[test]
fn non_positive_levels_draw_no_rings() {
    let config = RadarChartConfig::new(Viewport::new(300, 300)).with_levels(0);
    let layout = RadarLayout::compute(&config, &skills_dataset()).expect("layout");
    assert!(layout.rings.is_empty());
    assert_eq!(layout.axis_lines.len(), 3);
}

#[test]
fn treat_as_zero_policy_applies_during_layout() {
    let dataset = RadarDataset::new(
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        vec![RadarSeries::new("gappy", vec![3.0, f64::NAN, 6.0])],
    )
    .expect("dataset");

    let strict = RadarChartConfig::new(Viewport::new(300, 300));
    let err = RadarLayout::compute(&strict, &dataset).expect_err("nan rejected");
    assert!(matches!(err, RadarError::InvalidValue { axis_index: 1, .. }));

    let lenient = strict.with_non_finite_policy(NonFiniteValuePolicy::TreatAsZero);
    let layout = RadarLayout::compute(&lenient, &dataset).expect("layout");
    assert_eq!(layout.series[0].polygon[1].distance_from_origin(), 0.0);
    assert_eq!(layout.scale.max_value(), 6.0);
}

#[test]
fn payload_style_applies_to_one_draw_only() {
    let mut engine = engine(RadarChartConfig::new(Viewport::new(300, 300)));
    let payload = r#"{
        "style": {"levels": {"value": 3}, "showDots": {"value": false}},
        "fields": {
            "concepts": [{"id": "d", "name": "Dim"}],
            "metrics": [{"id": "m", "name": "Metric"}]
        },
        "tables": {"DEFAULT": [
            {"d": "x", "m": 1}, {"d": "y", "m": 2}, {"d": "z", "m": 3}
        ]}
    }"#;

    let layout = engine.draw_payload_json(payload).expect("draw payload");
    assert_eq!(layout.rings.len(), 3);
    assert!(layout.series[0].markers.is_none());
    assert_eq!(engine.config().levels, 5);
    assert!(engine.config().show_markers);
}

#[test]
fn engine_rejects_zero_sized_viewport() {
    let result = RadarEngine::new(
        NullRenderer::default(),
        RadarChartConfig::new(Viewport::new(0, 400)),
    );
    assert!(matches!(
        result,
        Err(RadarError::InvalidViewport { width: 0, height: 400 })
    ));
}

#[test]
fn layout_json_contract_carries_schema_version() {
    let config = RadarChartConfig::new(Viewport::new(300, 300));
    let layout = RadarLayout::compute(&config, &skills_dataset()).expect("layout");

    let json = layout.to_json_contract_v1_pretty().expect("json");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = RadarLayout::from_json_compat_str(&json).expect("restore");
    assert_eq!(restored.rings, layout.rings);
    assert_eq!(restored.axis_labels.len(), 3);
    assert_eq!(restored.series.len(), layout.series.len());
    assert_abs_diff_eq!(
        restored.series[0].polygon[2].x,
        layout.series[0].polygon[2].x,
        epsilon = 1e-9
    );

    let unsupported = json.replace("\"schema_version\": 1", "\"schema_version\": 7");
    assert!(RadarLayout::from_json_compat_str(&unsupported).is_err());
}
