use serde::{Deserialize, Serialize};
use tracing::warn;

/// Host-provided drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins reserved around the radial plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Point in plot space. Layout operations return points relative to the
/// radial center with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

impl RadarPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_from_origin(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn translated(self, offset: RadarPoint) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Usable plot region left after margins are removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// Radial center in host pixel space.
    pub center: RadarPoint,
}

impl PlotArea {
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.radius <= 0.0
    }
}

/// Subtracts margins from the host surface and derives the radial plot area.
///
/// A surface that is too small for its margins collapses to a zero radius
/// instead of failing; callers decide whether to skip drawing.
#[must_use]
pub fn compute_viewport(viewport: Viewport, margins: Margins) -> PlotArea {
    let usable_width = f64::from(viewport.width) - margins.left - margins.right;
    let usable_height = f64::from(viewport.height) - margins.top - margins.bottom;

    if !(usable_width > 0.0 && usable_height > 0.0) {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "viewport collapses to zero radius after margins"
        );
        let width = usable_width.max(0.0);
        let height = usable_height.max(0.0);
        return PlotArea {
            width,
            height,
            radius: 0.0,
            center: RadarPoint::new(margins.left + width / 2.0, margins.top + height / 2.0),
        };
    }

    PlotArea {
        width: usable_width,
        height: usable_height,
        radius: usable_width.min(usable_height) / 2.0,
        center: RadarPoint::new(
            margins.left + usable_width / 2.0,
            margins.top + usable_height / 2.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{Margins, RadarPoint, Viewport, compute_viewport};

    #[test]
    fn radius_uses_shorter_usable_side() {
        let area = compute_viewport(Viewport::new(500, 300), Margins::default());
        assert_eq!(area.width, 400.0);
        assert_eq!(area.height, 200.0);
        assert_eq!(area.radius, 100.0);
        assert_eq!(area.center, RadarPoint::new(250.0, 150.0));
    }

    #[test]
    fn oversized_margins_collapse_to_zero_radius() {
        let area = compute_viewport(Viewport::new(80, 400), Margins::default());
        assert!(area.is_degenerate());
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 300.0);
    }
}
