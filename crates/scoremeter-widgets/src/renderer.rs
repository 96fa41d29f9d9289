//! Pure meter computation with the fraction and gradient cached.

use crate::config::MeterConfig;
use crate::gradient::GradientSpec;
use crate::layers::{produce_layers, LayerStack};
use crate::layout::{compute_fraction, LayoutGeometry};
use crate::reveal::reveal_offset;
use scoremeter_core::{Color, DrawCommand, Rect};

/// Geometry and color source for one meter configuration.
///
/// The config is immutable, so fraction and gradient are computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterRenderer {
    config: MeterConfig,
    fraction: f64,
    gradient: GradientSpec,
}

impl MeterRenderer {
    /// Build a renderer, computing fraction and gradient once.
    #[must_use]
    pub fn new(config: MeterConfig) -> Self {
        let fraction = compute_fraction(&config);
        let gradient = GradientSpec::for_fraction(fraction);
        log::debug!(
            "meter {}/{}: fraction {fraction}, end hue {}",
            config.correct_responses(),
            config.question_count(),
            gradient.end_hue_degrees
        );
        Self {
            config,
            fraction,
            gradient,
        }
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Fill fraction, in `[0, 1]` unless overflow is unclamped.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Red-to-end-color gradient for the fill.
    #[must_use]
    pub const fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }

    /// Color at the top of the fill.
    #[must_use]
    pub const fn end_color(&self) -> Color {
        self.gradient.end
    }

    /// Geometry for a viewport height.
    #[must_use]
    pub fn layout(&self, viewport_height: f32) -> LayoutGeometry {
        LayoutGeometry::new(&self.config, self.fraction, viewport_height)
    }

    /// Layer stack for a container at a given mask offset.
    #[must_use]
    pub fn layers(&self, container: Rect, mask_offset: f32) -> LayerStack {
        let layout = self.layout(container.height);
        produce_layers(&self.config, &layout, &self.gradient, container, mask_offset)
    }

    /// Draw commands for a viewport at normalized reveal `progress`.
    #[must_use]
    pub fn render(&self, viewport: Rect, progress: f64) -> Vec<DrawCommand> {
        let layout = self.layout(viewport.height);
        let offset = reveal_offset(layout.track_height, progress.clamp(0.0, 1.0));
        produce_layers(&self.config, &layout, &self.gradient, viewport, offset).into_commands()
    }
}

impl Default for MeterRenderer {
    fn default() -> Self {
        Self::new(MeterConfig::default())
    }
}
