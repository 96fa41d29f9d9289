//! Vertical progress meter widget.

use crate::config::MeterConfig;
use crate::error::MeterError;
use crate::gradient::GradientSpec;
use crate::layers::{produce_layers, LayerStack};
use crate::layout::LayoutGeometry;
use crate::renderer::MeterRenderer;
use crate::reveal::{AnimationHandle, AnimationState, RevealPhase};
use scoremeter_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Rect, Size, Widget,
};

/// Vertical meter showing correct responses as a red-to-green fill.
///
/// The meter fills the space it is given, centers a fixed-width track in it,
/// and reveals the fill once with a slide-up mask after [`start`](Self::start).
#[derive(Debug, Clone)]
pub struct ProgressMeter {
    /// Cached fraction and gradient
    renderer: MeterRenderer,
    /// Geometry from the last layout pass
    geometry: Option<LayoutGeometry>,
    /// Current layout bounds
    bounds: Rect,
    /// Reveal animation
    reveal: AnimationState,
    /// Accessible name
    accessible_name_value: String,
    /// Test ID
    test_id_value: Option<String>,
}

impl ProgressMeter {
    /// Create a meter from a validated config.
    #[must_use]
    pub fn new(config: MeterConfig) -> Self {
        Self {
            renderer: MeterRenderer::new(config),
            geometry: None,
            bounds: Rect::default(),
            reveal: AnimationState::new(),
            accessible_name_value: format!(
                "{} of {} correct",
                config.correct_responses(),
                config.question_count()
            ),
            test_id_value: None,
        }
    }

    /// Create a meter with default dimensions for a score.
    pub fn from_counts(correct_responses: u32, question_count: u32) -> Result<Self, MeterError> {
        let config = MeterConfig::builder()
            .score(correct_responses, question_count)
            .build()?;
        Ok(Self::new(config))
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = name.into();
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Start the reveal. Call once, after the first layout.
    pub fn start(&mut self) -> Result<AnimationHandle, MeterError> {
        let geometry = self.geometry.ok_or(MeterError::NotLaidOut)?;
        self.reveal.start(geometry.track_height)
    }

    /// Advance the reveal by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> RevealPhase {
        self.reveal.tick(dt)
    }

    /// The meter configuration.
    #[must_use]
    pub fn config(&self) -> &MeterConfig {
        self.renderer.config()
    }

    /// Fill fraction of the configured score.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.renderer.fraction()
    }

    /// Color at the top of the fill.
    #[must_use]
    pub fn end_color(&self) -> Color {
        self.renderer.end_color()
    }

    /// Gradient painted over the fill.
    #[must_use]
    pub fn gradient(&self) -> &GradientSpec {
        self.renderer.gradient()
    }

    /// Geometry from the last layout, if any.
    #[must_use]
    pub const fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    /// Current vertical offset of the cover mask, zero or negative.
    #[must_use]
    pub fn mask_offset(&self) -> f32 {
        self.reveal.offset()
    }

    /// Where the reveal animation stands.
    #[must_use]
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    /// Layer stack at the current bounds and mask offset.
    #[must_use]
    pub fn layers(&self) -> Option<LayerStack> {
        let geometry = self.geometry?;
        Some(produce_layers(
            self.config(),
            &geometry,
            self.gradient(),
            self.bounds,
            self.mask_offset(),
        ))
    }

    fn intrinsic_size(&self) -> Size {
        let config = self.config();
        Size::new(
            config.meter_width() + config.border_width(),
            config.vertical_padding() + config.border_width(),
        )
    }
}

impl Default for ProgressMeter {
    fn default() -> Self {
        Self::new(MeterConfig::default())
    }
}

impl Widget for ProgressMeter {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.expand(self.intrinsic_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.geometry = Some(self.renderer.layout(bounds.height));
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(stack) = self.layers() {
            stack.paint(canvas);
        }
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.accessible_name_value)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
