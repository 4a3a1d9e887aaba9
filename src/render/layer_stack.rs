use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};
use crate::error::RadarResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Series,
}

/// Primitives of one paint layer.
///
/// Inside a layer, backends paint polygons, then circles, then lines, then
/// texts. Layers themselves are painted in frame order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    /// Series name for `Series` layers.
    pub label: Option<String>,
    pub polygons: Vec<PolygonPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            label: None,
            polygons: Vec::new(),
            circles: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn series(name: impl Into<String>) -> Self {
        Self {
            label: Some(name.into()),
            ..Self::new(CanvasLayerKind::Series)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    pub fn validate(&self) -> RadarResult<()> {
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}
