//! Layered draw output.
//!
//! A meter is four layers painted back to front: the track (empty space
//! over the gradient fill), the reveal mask, the border frame, and a
//! paint-free centering record hosts use for placement and hit testing.

use crate::config::MeterConfig;
use crate::gradient::GradientSpec;
use crate::layout::LayoutGeometry;
use crate::renderer::MeterRenderer;
use scoremeter_core::{
    Canvas, Color, DrawCommand, LinearGradient, RecordingCanvas, Rect, StrokeStyle,
};
use serde::{Deserialize, Serialize};

/// One visual layer of the meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum Layer {
    /// Empty space stacked above the gradient fill
    Track {
        /// Background-colored rect at the top of the track
        empty: Rect,
        /// Gradient rect at the bottom of the track
        fill: Rect,
        /// Color of the empty space
        background: Color,
        /// Fill gradient, bottom to top
        gradient: LinearGradient,
    },
    /// Opaque cover sliding up to reveal the track
    Mask {
        /// Track rect shifted by `offset`
        bounds: Rect,
        /// Cover color
        color: Color,
        /// Vertical offset from the resting position
        offset: f32,
    },
    /// Outline around the track
    Border {
        /// Frame rect, `border_width` larger than the track
        frame: Rect,
        /// Interior fill
        fill: Color,
        /// Outline stroke
        stroke: StrokeStyle,
    },
    /// Placement of the content frame inside the container
    Centering {
        /// Space the host gave the meter
        container: Rect,
        /// Border frame centered in `container`
        content: Rect,
    },
}

impl Layer {
    /// Paint this layer, skipping anything that would draw nothing.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Track {
                empty,
                fill,
                background,
                gradient,
            } => {
                if !empty.is_empty() {
                    canvas.fill_rect(*empty, *background);
                }
                if !fill.is_empty() {
                    canvas.fill_gradient(*fill, gradient);
                }
            }
            Self::Mask { bounds, color, .. } => {
                if !bounds.is_empty() {
                    canvas.fill_rect(*bounds, *color);
                }
            }
            Self::Border {
                frame,
                fill,
                stroke,
            } => {
                if frame.is_empty() {
                    return;
                }
                if !fill.is_transparent() {
                    canvas.fill_rect(*frame, *fill);
                }
                if stroke.width > 0.0 {
                    canvas.stroke_rect(*frame, stroke.color, stroke.width);
                }
            }
            Self::Centering { .. } => {}
        }
    }

    /// Short name used in logs and text output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Track { .. } => "track",
            Self::Mask { .. } => "mask",
            Self::Border { .. } => "border",
            Self::Centering { .. } => "centering",
        }
    }
}

/// The four layers of one meter frame, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    layers: [Layer; 4],
}

impl LayerStack {
    /// Layers in paint order.
    #[must_use]
    pub const fn layers(&self) -> &[Layer; 4] {
        &self.layers
    }

    /// Paint every layer in order.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        for layer in &self.layers {
            layer.paint(canvas);
        }
    }

    /// Flatten into draw commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.paint(&mut canvas);
        canvas.into_commands()
    }
}

impl IntoIterator for LayerStack {
    type Item = Layer;
    type IntoIter = std::array::IntoIter<Layer, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

/// Build the layer stack for one placement and mask offset.
#[must_use]
pub fn produce_layers(
    config: &MeterConfig,
    layout: &LayoutGeometry,
    gradient: &GradientSpec,
    container: Rect,
    mask_offset: f32,
) -> LayerStack {
    let frame = layout.place(container);
    let scheme = config.scheme();

    LayerStack {
        layers: [
            Layer::Track {
                empty: frame.empty,
                fill: frame.fill,
                background: scheme.background(),
                gradient: gradient.linear(),
            },
            Layer::Mask {
                bounds: frame.track.translate(0.0, mask_offset),
                color: scheme.background(),
                offset: mask_offset,
            },
            Layer::Border {
                frame: frame.border,
                fill: Color::TRANSPARENT,
                stroke: StrokeStyle {
                    color: scheme.foreground(),
                    width: layout.border_width,
                },
            },
            Layer::Centering {
                container,
                content: frame.border,
            },
        ],
    }
}

/// Render one frame of a meter filling `viewport` at reveal `progress`.
///
/// `progress` is normalized time in [0, 1]; the reveal curve is applied here.
#[must_use]
pub fn render_frame(config: &MeterConfig, viewport: Rect, progress: f64) -> Vec<DrawCommand> {
    MeterRenderer::new(*config).render(viewport, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;
    use crate::layout::compute_layout;
    use scoremeter_core::BoxStyle;

    fn scenario() -> (MeterConfig, LayoutGeometry, GradientSpec) {
        let config = MeterConfig::default();
        let layout = compute_layout(&config, 600.0);
        (config, layout, GradientSpec::for_fraction(0.7))
    }

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 600.0);

    #[test]
    fn test_layer_order() {
        let (config, layout, gradient) = scenario();
        let names: Vec<_> = produce_layers(&config, &layout, &gradient, CONTAINER, 0.0)
            .into_iter()
            .map(|layer| layer.name())
            .collect();
        assert_eq!(names, ["track", "mask", "border", "centering"]);
    }

    #[test]
    fn test_covered_frame_commands() {
        let (config, layout, gradient) = scenario();
        let commands = produce_layers(&config, &layout, &gradient, CONTAINER, 0.0).into_commands();
        assert_eq!(commands.len(), 4);

        assert_eq!(
            commands[0],
            DrawCommand::filled_rect(Rect::new(150.0, 50.0, 100.0, 150.0), Color::WHITE)
        );
        assert_eq!(
            commands[1],
            DrawCommand::gradient_rect(Rect::new(150.0, 200.0, 100.0, 350.0), gradient.linear())
        );
        assert_eq!(
            commands[2],
            DrawCommand::filled_rect(Rect::new(150.0, 50.0, 100.0, 500.0), Color::WHITE)
        );
        assert_eq!(
            commands[3],
            DrawCommand::Rect {
                bounds: Rect::new(149.0, 49.0, 102.0, 502.0),
                style: BoxStyle::stroke(StrokeStyle {
                    color: Color::BLACK,
                    width: 2.0
                }),
            }
        );
    }

    #[test]
    fn test_mask_follows_offset() {
        let (config, layout, gradient) = scenario();
        let stack = produce_layers(&config, &layout, &gradient, CONTAINER, -500.0);
        match stack.layers()[1] {
            Layer::Mask { bounds, offset, .. } => {
                assert_eq!(offset, -500.0);
                assert_eq!(bounds, Rect::new(150.0, -450.0, 100.0, 500.0));
                assert!(bounds.bottom() <= 50.0);
            }
            other => panic!("expected mask, got {other:?}"),
        }
    }

    #[test]
    fn test_border_drawn_above_mask() {
        let (config, layout, gradient) = scenario();
        let commands = produce_layers(&config, &layout, &gradient, CONTAINER, -250.0).into_commands();
        let last = commands.last().expect("commands");
        assert_eq!(last.bounds(), Rect::new(149.0, 49.0, 102.0, 502.0));
    }

    #[test]
    fn test_dark_scheme_swaps_colors() {
        let config = MeterConfig::builder()
            .scheme(ColorScheme::Dark)
            .build()
            .expect("valid");
        let layout = compute_layout(&config, 600.0);
        let stack = produce_layers(&config, &layout, &GradientSpec::for_fraction(0.7), CONTAINER, 0.0);
        match stack.layers()[2] {
            Layer::Border { stroke, fill, .. } => {
                assert_eq!(stroke.color, Color::WHITE);
                assert_eq!(fill, Color::TRANSPARENT);
            }
            other => panic!("expected border, got {other:?}"),
        }
        match stack.layers()[1] {
            Layer::Mask { color, .. } => assert_eq!(color, Color::BLACK),
            other => panic!("expected mask, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_layout_paints_only_border() {
        let config = MeterConfig::new(100.0, 2.0, 200.0, 7, 10).expect("valid");
        let layout = compute_layout(&config, 100.0);
        let commands = produce_layers(
            &config,
            &layout,
            &GradientSpec::for_fraction(0.7),
            Rect::new(0.0, 0.0, 400.0, 100.0),
            0.0,
        )
        .into_commands();

        assert_eq!(commands.len(), 1);
        let bounds = commands[0].bounds();
        assert_eq!(bounds.height, 2.0);
        assert!(bounds.width > 0.0);
    }

    #[test]
    fn test_zero_border_skips_stroke() {
        let config = MeterConfig::new(100.0, 0.0, 100.0, 7, 10).expect("valid");
        let commands = render_frame(&config, CONTAINER, 0.0);
        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| !matches!(
            c,
            DrawCommand::Rect { style: BoxStyle { stroke: Some(_), .. }, .. }
        )));
    }

    #[test]
    fn test_empty_meter_skips_fill() {
        let config = MeterConfig::new(100.0, 2.0, 100.0, 0, 10).expect("valid");
        let commands = render_frame(&config, CONTAINER, 1.0);
        assert!(commands
            .iter()
            .all(|c| !matches!(c, DrawCommand::Gradient { .. })));
    }

    #[test]
    fn test_render_frame_progress_endpoints() {
        let config = MeterConfig::default();
        let start = render_frame(&config, CONTAINER, 0.0);
        let end = render_frame(&config, CONTAINER, 1.0);
        assert_eq!(start[2].bounds().y, 50.0);
        assert_eq!(end[2].bounds().y, -450.0);

        let beyond = render_frame(&config, CONTAINER, 7.0);
        assert_eq!(beyond, end);
    }

    #[test]
    fn test_layer_stack_serializes_tagged() {
        let (config, layout, gradient) = scenario();
        let stack = produce_layers(&config, &layout, &gradient, CONTAINER, 0.0);
        let json = serde_json::to_value(stack).expect("serialize");
        assert_eq!(json["layers"][0]["layer"], "track");
        assert_eq!(json["layers"][3]["layer"], "centering");
    }
}
