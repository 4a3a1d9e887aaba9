/// Radii of the concentric reference rings, innermost first.
///
/// `levels <= 0` yields no rings. The outermost ring is exactly `radius`.
#[must_use]
pub fn compute_grid_rings(levels: i32, radius: f64) -> Vec<f64> {
    if levels <= 0 {
        return Vec::new();
    }

    let total = f64::from(levels);
    (1..=levels)
        .map(|level| radius * (f64::from(level) / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::compute_grid_rings;

    #[test]
    fn non_positive_levels_have_no_rings() {
        assert!(compute_grid_rings(0, 100.0).is_empty());
        assert!(compute_grid_rings(-3, 100.0).is_empty());
    }

    #[test]
    fn single_level_is_the_outer_ring() {
        assert_eq!(compute_grid_rings(1, 42.0), vec![42.0]);
    }
}
