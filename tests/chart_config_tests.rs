use radar_rs::RadarError;
use radar_rs::api::{MAX_LEVELS, RadarChartConfig};
use radar_rs::core::{Margins, NonFiniteValuePolicy, Viewport};
use radar_rs::render::Color;

#[test]
fn partial_json_config_fills_defaults() {
    let config = RadarChartConfig::from_json_str(
        r#"{"viewport": {"width": 640, "height": 480}, "levels": 8}"#,
    )
    .expect("config");

    assert_eq!(config.levels, 8);
    assert_eq!(config.margins, Margins::uniform(50.0));
    assert_eq!(config.label_padding, 1.1);
    assert_eq!(config.marker_radius_px, 4.0);
    assert_eq!(config.ring_dash, vec![2.0, 2.0]);
    assert_eq!(config.non_finite_policy, NonFiniteValuePolicy::Reject);
    assert!(config.show_markers);
}

#[test]
fn policy_is_written_in_snake_case() {
    let config = RadarChartConfig::new(Viewport::new(100, 100))
        .with_non_finite_policy(NonFiniteValuePolicy::TreatAsZero);
    let json = config.to_json_pretty().expect("json");
    assert!(json.contains("\"treat_as_zero\""));
    let parsed = RadarChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.non_finite_policy, NonFiniteValuePolicy::TreatAsZero);
}

#[test]
fn invalid_values_are_rejected() {
    let base = RadarChartConfig::new(Viewport::new(400, 400));

    for config in [
        base.clone().with_fill_opacity(-0.1),
        base.clone().with_stroke_width(f64::NAN),
        base.clone().with_label_padding(0.0),
        base.clone().with_series_palette(Vec::new()),
        base.clone().with_grid_color(Color::rgb(2.0, 0.0, 0.0)),
        base.clone().with_margins(Margins::uniform(-1.0)),
    ] {
        assert!(matches!(config.validate(), Err(RadarError::InvalidData(_))));
    }

    assert!(base.validate().is_ok());
}

#[test]
fn palette_cycles_by_series_index() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let config =
        RadarChartConfig::new(Viewport::new(400, 400)).with_series_palette(vec![red, blue]);
    assert_eq!(config.series_color(0), red);
    assert_eq!(config.series_color(1), blue);
    assert_eq!(config.series_color(4), red);
}

#[test]
fn levels_above_the_ring_limit_are_rejected() {
    let base = RadarChartConfig::new(Viewport::new(400, 400));
    assert!(base.clone().with_levels(MAX_LEVELS).validate().is_ok());
    assert!(base.clone().with_levels(-3).validate().is_ok());

    for levels in [MAX_LEVELS + 1, i32::MAX] {
        assert!(matches!(
            base.clone().with_levels(levels).validate(),
            Err(RadarError::InvalidData(_))
        ));
    }
}
