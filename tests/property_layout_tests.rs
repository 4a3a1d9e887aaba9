use std::f64::consts::TAU;

use proptest::prelude::*;
use radar_rs::core::{
    RadarSeries, compute_angle_slice, compute_grid_rings, compute_scale, compute_series_polygon,
};

fn axis_labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("axis-{index}")).collect()
}

proptest! {
    #[test]
    fn angle_slices_cover_full_circle(axis_count in 1usize..512) {
        let slice = compute_angle_slice(axis_count).expect("slice");
        prop_assert!((slice * axis_count as f64 - TAU).abs() <= 1e-9);
    }

    #[test]
    fn rings_are_increasing_and_end_on_radius(
        levels in 1i32..64,
        radius in 0.001f64..5_000.0,
    ) {
        let rings = compute_grid_rings(levels, radius);
        prop_assert_eq!(rings.len(), levels as usize);
        for pair in rings.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert_eq!(rings[rings.len() - 1], radius);
    }

    #[test]
    fn series_at_max_lies_on_outer_ring(
        axis_count in 1usize..48,
        max_value in 0.01f64..1_000_000.0,
        radius in 1.0f64..2_000.0,
    ) {
        let axes = axis_labels(axis_count);
        let series = RadarSeries::new("full", vec![max_value; axis_count]);
        let scale = compute_scale(std::slice::from_ref(&series), &axes, radius);
        let slice = compute_angle_slice(axis_count).expect("slice");

        let polygon = compute_series_polygon(&series, &axes, scale, slice).expect("polygon");
        prop_assert_eq!(polygon.len(), axis_count);
        for vertex in polygon {
            prop_assert!((vertex.distance_from_origin() - radius).abs() <= 1e-9 * radius.max(1.0));
        }
    }

    #[test]
    fn polygon_projection_is_repeatable(
        values in proptest::collection::vec(0.0f64..10_000.0, 1..32),
        radius in 1.0f64..2_000.0,
    ) {
        let axes = axis_labels(values.len());
        let series = RadarSeries::new("s", values);
        let scale = compute_scale(std::slice::from_ref(&series), &axes, radius);
        let slice = compute_angle_slice(axes.len()).expect("slice");

        let first = compute_series_polygon(&series, &axes, scale, slice).expect("first");
        let second = compute_series_polygon(&series, &axes, scale, slice).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn vertices_never_leave_the_outer_ring(
        values in proptest::collection::vec(0.0f64..10_000.0, 1..32),
        radius in 1.0f64..2_000.0,
    ) {
        let axes = axis_labels(values.len());
        let series = RadarSeries::new("s", values);
        let scale = compute_scale(std::slice::from_ref(&series), &axes, radius);
        let slice = compute_angle_slice(axes.len()).expect("slice");

        for vertex in compute_series_polygon(&series, &axes, scale, slice).expect("polygon") {
            prop_assert!(vertex.distance_from_origin() <= radius * (1.0 + 1e-12));
        }
    }
}
