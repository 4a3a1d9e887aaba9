use tracing::debug;

use crate::error::RadarResult;
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{HostPayload, RadarChartConfig, RadarDataset, RadarLayout};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// Every draw computes a fresh layout from its input, builds a frame and hands
/// it to the renderer once. Nothing from a previous draw is reused.
pub struct RadarEngine<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
}

impl<R: Renderer> RadarEngine<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> RadarResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &RadarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RadarChartConfig) -> RadarResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn compute_layout(&self, dataset: &RadarDataset) -> RadarResult<RadarLayout> {
        RadarLayout::compute(&self.config, dataset)
    }

    pub fn build_render_frame(&self, dataset: &RadarDataset) -> RadarResult<RenderFrame> {
        let layout = self.compute_layout(dataset)?;
        build_render_frame(&layout, &self.config)
    }

    /// Computes and renders `dataset`, returning the layout that was drawn.
    pub fn draw(&mut self, dataset: &RadarDataset) -> RadarResult<RadarLayout> {
        let layout = self.compute_layout(dataset)?;
        let frame = build_render_frame(&layout, &self.config)?;
        debug!(
            axes = dataset.axis_count(),
            series = dataset.series().len(),
            "draw radar frame"
        );
        self.renderer.render(&frame)?;
        Ok(layout)
    }

    /// Draws a host payload. Its style applies to this call only; the engine
    /// config stays the base for the next payload.
    pub fn draw_payload(&mut self, payload: &HostPayload) -> RadarResult<RadarLayout> {
        let (config, dataset) = payload.into_parts(&self.config)?;
        let layout = RadarLayout::compute(&config, &dataset)?;
        let frame = build_render_frame(&layout, &config)?;
        debug!(
            axes = dataset.axis_count(),
            series = dataset.series().len(),
            "draw radar frame from host payload"
        );
        self.renderer.render(&frame)?;
        Ok(layout)
    }

    pub fn draw_payload_json(&mut self, input: &str) -> RadarResult<RadarLayout> {
        let payload = HostPayload::from_json_str(input)?;
        self.draw_payload(&payload)
    }

    /// Renders into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        dataset: &RadarDataset,
    ) -> RadarResult<RadarLayout>
    where
        R: CairoContextRenderer,
    {
        let layout = self.compute_layout(dataset)?;
        let frame = build_render_frame(&layout, &self.config)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        Ok(layout)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
